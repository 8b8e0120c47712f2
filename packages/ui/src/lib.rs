//! This crate contains all shared UI for the TANA client: the application
//! state machine, the refresh orchestrator, and the three top-level screens.

mod platform;
pub use platform::{make_token_store, PlatformTokenStore, TanaApi};

pub mod state;
pub use state::{AppState, Mode, Notice};

mod session;
pub use session::{establish_session, fetch_snapshot, log_out, Snapshot};

mod app;
pub use app::{refresh_all, use_api, use_app_state, TanaProvider};

mod status;
pub use status::{Status, StatusLine};

pub mod views;
pub use views::Screen;
