//! Refresh orchestration: one sequential, all-or-nothing fetch of everything
//! the app screen renders.

use api::{ApiClient, ApiError, Dashboard, Reflection, Session, User};
use store::TokenStore;

use crate::state::AppState;

/// The complete data set behind the app screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub user: User,
    pub dashboard: Dashboard,
    pub sessions: Vec<Session>,
    pub reflections: Vec<Reflection>,
}

/// Fetch profile, dashboard, sessions and reflections, in that order.
///
/// The profile comes first because it seeds the profile-edit form. Any single
/// failure fails the whole refresh — partial data is never returned, and the
/// caller treats the error as an invalidated session.
pub async fn fetch_snapshot<S: TokenStore>(api: &ApiClient<S>) -> Result<Snapshot, ApiError> {
    let user = api.me().await?;
    let dashboard = api.dashboard().await?;
    let sessions = api.sessions().await?;
    let reflections = api.reflections().await?;
    Ok(Snapshot {
        user,
        dashboard,
        sessions,
        reflections,
    })
}

/// Persist a fresh token, then run the initial refresh. On failure the token
/// is dropped again, so a credential that cannot complete a refresh never
/// survives the attempt.
pub async fn establish_session<S: TokenStore>(
    api: &ApiClient<S>,
    token: &str,
) -> Result<Snapshot, ApiError> {
    api.tokens().set(token);
    match fetch_snapshot(api).await {
        Ok(snapshot) => Ok(snapshot),
        Err(e) => {
            api.tokens().clear();
            Err(e)
        }
    }
}

/// Voluntary logout: drop the persisted token and land on the auth screen
/// with no notice.
pub fn log_out<S: TokenStore>(tokens: &S, state: &mut AppState) {
    tokens.clear();
    state.sign_out(None);
}
