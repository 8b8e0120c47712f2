use dioxus::prelude::*;

/// Transient per-form status line.
///
/// `Limited` is the quota-reached soft decline from the booking endpoint:
/// a normal response variant with its own styling, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending(&'static str),
    Success(&'static str),
    Limited(&'static str),
    Error(&'static str),
}

impl Status {
    pub fn text(self) -> &'static str {
        match self {
            Status::Pending(t) | Status::Success(t) | Status::Limited(t) | Status::Error(t) => t,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Status::Pending(_) => "status status-pending",
            Status::Success(_) => "status status-success",
            Status::Limited(_) => "status status-limited",
            Status::Error(_) => "status status-error",
        }
    }
}

#[component]
pub fn StatusLine(#[props(!optional)] status: Option<Status>) -> Element {
    match status {
        Some(s) => rsx! {
            span { class: s.class(), "{s.text()}" }
        },
        None => rsx! {},
    }
}
