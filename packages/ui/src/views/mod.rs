use dioxus::prelude::*;

use crate::state::Mode;
use crate::use_app_state;

mod auth;
mod dashboard;
mod home;
mod profile;
mod reflections;
mod sessions;
mod shell;

pub use auth::AuthScreen;
pub use dashboard::DashboardSection;
pub use home::HomeScreen;
pub use profile::ProfileSection;
pub use reflections::ReflectionsSection;
pub use sessions::SessionsSection;
pub use shell::AppShell;

/// Top-level renderer: exactly one screen per mode.
#[component]
pub fn Screen() -> Element {
    let state = use_app_state();

    match state().mode {
        Mode::Home => rsx! { HomeScreen {} },
        Mode::Auth => rsx! { AuthScreen {} },
        Mode::App => rsx! { AppShell {} },
    }
}
