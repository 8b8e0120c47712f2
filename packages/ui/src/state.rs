//! Application state and the top-level mode state machine.
//!
//! One explicit [`AppState`] value held in a Dioxus `Signal` and provided
//! through context — no ambient globals. All transitions go through the
//! typed methods below, which keep the core invariant: dashboard, session
//! and reflection data only exists while the client is in [`Mode::App`],
//! and every failure path lands back on a consistent screen.
//!
//! ```text
//! home --Get Started--> auth --login/signup ok--> app
//!  ^                     |  ^                      |
//!  +------back-----------+  +--logout / refresh----+
//!                                    failure
//! ```

use api::{Dashboard, Reflection, Session, User};

use crate::session::Snapshot;

/// Which top-level screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Home,
    Auth,
    App,
}

/// Banner shown on the auth screen after an involuntary sign-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    SessionExpired,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::SessionExpired => "Your session has expired. Please sign in again.",
        }
    }
}

/// Everything the view renderer reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub mode: Mode,
    pub user: Option<User>,
    pub dashboard: Option<Dashboard>,
    pub sessions: Vec<Session>,
    pub reflections: Vec<Reflection>,
    pub notice: Option<Notice>,
}

impl AppState {
    /// Home → Auth ("Get Started" or explicit nav).
    pub fn begin_auth(&mut self) {
        self.mode = Mode::Auth;
        self.notice = None;
    }

    /// Auth → Home. Always available; auth is never a terminal screen.
    pub fn back_home(&mut self) {
        self.mode = Mode::Home;
        self.notice = None;
    }

    /// Auth → App after a successful login/signup plus initial refresh.
    pub fn enter_app(&mut self, snapshot: Snapshot) {
        self.apply_snapshot(snapshot);
        self.mode = Mode::App;
        self.notice = None;
    }

    /// Replace the fetched data wholesale. Used by every refresh; partial
    /// results are never merged in.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        self.user = Some(snapshot.user);
        self.dashboard = Some(snapshot.dashboard);
        self.sessions = snapshot.sessions;
        self.reflections = snapshot.reflections;
    }

    /// App → Auth on logout or token invalidation. Drops all fetched data so
    /// nothing authenticated survives the transition.
    pub fn sign_out(&mut self, notice: Option<Notice>) {
        *self = AppState {
            mode: Mode::Auth,
            notice,
            ..AppState::default()
        };
    }

    /// Paywall gate: true once the free session quota is spent. Disables the
    /// booking submit and shows the upsell panel.
    pub fn show_paywall(&self) -> bool {
        self.dashboard
            .as_ref()
            .is_some_and(|d| d.sessions.exhausted())
    }
}

/// Numeric coercion for the optional age field: surrounding whitespace is
/// tolerated, anything non-numeric (or empty) becomes "not provided".
pub fn parse_age(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Percentages, Purpose, SessionQuota, TanaBreakdown};

    fn snapshot(used: u32, total: u32) -> Snapshot {
        Snapshot {
            user: User {
                id: "u1".to_string(),
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                age: Some(34),
                purpose: Purpose::Growth,
            },
            dashboard: Dashboard {
                name: "Ana".to_string(),
                tana: TanaBreakdown {
                    percentages: Percentages {
                        mind: 60.0,
                        money: 40.0,
                        meaning: 75.0,
                    },
                },
                sessions: SessionQuota { used, total },
            },
            sessions: Vec::new(),
            reflections: Vec::new(),
        }
    }

    #[test]
    fn test_initial_mode_is_home() {
        assert_eq!(AppState::default().mode, Mode::Home);
    }

    #[test]
    fn test_get_started_then_back() {
        let mut state = AppState::default();
        state.begin_auth();
        assert_eq!(state.mode, Mode::Auth);
        state.back_home();
        assert_eq!(state.mode, Mode::Home);
    }

    #[test]
    fn test_login_enters_app_with_data() {
        let mut state = AppState::default();
        state.begin_auth();
        state.enter_app(snapshot(1, 3));
        assert_eq!(state.mode, Mode::App);
        assert!(state.user.is_some());
        assert!(state.dashboard.is_some());
        assert_eq!(state.notice, None);
    }

    #[test]
    fn test_sign_out_drops_everything() {
        let mut state = AppState::default();
        state.enter_app(snapshot(1, 3));

        state.sign_out(Some(Notice::SessionExpired));
        assert_eq!(state.mode, Mode::Auth);
        assert_eq!(state.user, None);
        assert_eq!(state.dashboard, None);
        assert!(state.sessions.is_empty());
        assert!(state.reflections.is_empty());
        assert_eq!(state.notice, Some(Notice::SessionExpired));
    }

    #[test]
    fn test_voluntary_logout_has_no_notice() {
        let mut state = AppState::default();
        state.enter_app(snapshot(0, 3));
        state.sign_out(None);
        assert_eq!(state.mode, Mode::Auth);
        assert_eq!(state.notice, None);
    }

    #[test]
    fn test_paywall_tracks_quota() {
        let mut state = AppState::default();
        assert!(!state.show_paywall()); // no dashboard yet

        state.apply_snapshot(snapshot(2, 3));
        assert!(!state.show_paywall());

        state.apply_snapshot(snapshot(3, 3));
        assert!(state.show_paywall());
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("34"), Some(34));
        assert_eq!(parse_age(" 34 "), Some(34));
        assert_eq!(parse_age(""), None);
        assert_eq!(parse_age("abc"), None);
        assert_eq!(parse_age("-3"), None);
    }
}
