//! HTTP client for the TANA backend.
//!
//! One [`ApiClient`] per app, constructed with the platform token store.
//! Requests are single-shot: one attempt, a fixed per-call timeout, no retry
//! and no backoff. The bearer header is attached iff a token is held and the
//! call asks for authentication.

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use store::TokenStore;

use crate::error::ApiError;
use crate::models::{
    Dashboard, ItemsResponse, LoginRequest, NewReflectionRequest, NewSessionRequest, ProfileUpdate,
    Reflection, Session, SessionCreated, SignupRequest, TokenResponse, User,
};

/// Per-request deadline. A hung backend call fails the handler instead of
/// stalling it forever.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Typed REST client: base URL + HTTP connection pool + token store.
#[derive(Clone)]
pub struct ApiClient<S: TokenStore> {
    base_url: String,
    http: reqwest::Client,
    tokens: S,
    timeout: Duration,
}

impl<S: TokenStore> ApiClient<S> {
    pub fn new(base_url: impl Into<String>, tokens: S) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            tokens,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The token store this client reads its bearer token from.
    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self, builder: reqwest::RequestBuilder, auth: bool) -> reqwest::RequestBuilder {
        match self.tokens.get() {
            Some(token) if auth => builder.header("Authorization", format!("Bearer {token}")),
            _ => builder,
        }
    }

    /// Authenticated GET, decoding the JSON body into `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.bearer(self.http.get(self.url(path)), true);
        let response = with_timeout(self.timeout, request.send()).await??;
        decode(response).await
    }

    /// JSON POST. `auth: false` is used by login/signup, which run before a
    /// token exists.
    pub async fn post<B, T>(&self, path: &str, body: &B, auth: bool) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.bearer(self.http.post(self.url(path)).json(body), auth);
        let response = with_timeout(self.timeout, request.send()).await??;
        decode(response).await
    }

    // ---- Typed endpoints ----

    pub async fn signup(&self, req: &SignupRequest) -> Result<TokenResponse, ApiError> {
        self.post("/auth/signup", req, false).await
    }

    pub async fn login(&self, req: &LoginRequest) -> Result<TokenResponse, ApiError> {
        self.post("/auth/login", req, false).await
    }

    pub async fn me(&self) -> Result<User, ApiError> {
        self.get("/me").await
    }

    pub async fn dashboard(&self) -> Result<Dashboard, ApiError> {
        self.get("/dashboard").await
    }

    pub async fn sessions(&self) -> Result<Vec<Session>, ApiError> {
        let list: ItemsResponse<Session> = self.get("/sessions").await?;
        Ok(list.items)
    }

    pub async fn create_session(&self, req: &NewSessionRequest) -> Result<SessionCreated, ApiError> {
        self.post("/sessions", req, true).await
    }

    pub async fn reflections(&self) -> Result<Vec<Reflection>, ApiError> {
        let list: ItemsResponse<Reflection> = self.get("/reflections").await?;
        Ok(list.items)
    }

    pub async fn create_reflection(&self, req: &NewReflectionRequest) -> Result<Reflection, ApiError> {
        self.post("/reflections", req, true).await
    }

    pub async fn update_profile(&self, req: &ProfileUpdate) -> Result<User, ApiError> {
        self.post("/profile", req, true).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "backend rejected request");
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.json::<T>().await?)
}

#[cfg(not(target_arch = "wasm32"))]
async fn with_timeout<F>(timeout: Duration, fut: F) -> Result<F::Output, ApiError>
where
    F: Future,
{
    tokio::time::timeout(timeout, fut)
        .await
        .map_err(|_| ApiError::Timeout)
}

#[cfg(target_arch = "wasm32")]
async fn with_timeout<F>(timeout: Duration, fut: F) -> Result<F::Output, ApiError>
where
    F: Future,
{
    use futures_util::future::{select, Either};

    let deadline = gloo_timers::future::sleep(timeout);
    match select(std::pin::pin!(fut), std::pin::pin!(deadline)).await {
        Either::Left((out, _)) => Ok(out),
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Pillar, Purpose, SessionTopic};
    use serde_json::json;
    use store::MemoryStore;
    use wiremock::matchers::{body_json, header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn user_json() -> serde_json::Value {
        json!({
            "id": "u1",
            "name": "Ana",
            "email": "ana@example.com",
            "age": 34,
            "purpose": "Growth"
        })
    }

    fn client_for(server: &MockServer, token: Option<&str>) -> ApiClient<MemoryStore> {
        let tokens = MemoryStore::new();
        if let Some(token) = token {
            tokens.set(token);
        }
        ApiClient::new(server.uri(), tokens)
    }

    #[tokio::test]
    async fn test_bearer_header_attached_when_token_held() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .and(header("Authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some("tok-1"));
        let user = client.me().await.unwrap();
        assert_eq!(user.name, "Ana");
        assert_eq!(user.purpose, Purpose::Growth);
    }

    #[tokio::test]
    async fn test_no_bearer_header_without_token() {
        let server = MockServer::start().await;
        // Any request carrying an Authorization header is rejected outright,
        // so a passing call proves the header was absent.
        Mock::given(header_exists("Authorization"))
            .respond_with(ResponseTemplate::new(500))
            .with_priority(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
            .with_priority(5)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        assert!(client.me().await.is_ok());
    }

    #[tokio::test]
    async fn test_login_skips_bearer_even_with_stale_token() {
        let server = MockServer::start().await;
        Mock::given(header_exists("Authorization"))
            .respond_with(ResponseTemplate::new(500))
            .with_priority(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "fresh"})))
            .with_priority(5)
            .mount(&server)
            .await;

        let client = client_for(&server, Some("stale"));
        let resp = client
            .login(&LoginRequest {
                email: "ana@example.com".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(resp.token, "fresh");
    }

    #[tokio::test]
    async fn test_non_success_carries_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dashboard"))
            .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("tok"));
        match client.dashboard().await {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status, 401);
                assert_eq!(body, "token expired");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_items_envelope_unwrapped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sessions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{
                    "id": "s1",
                    "topic": "mind_clarity",
                    "date": "2025-03-01",
                    "time": "10:00",
                    "status": "requested"
                }]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("tok"));
        let sessions = client.sessions().await.unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].topic, SessionTopic::MindClarity);
        assert_eq!(sessions[0].spatial_url, None);
    }

    #[tokio::test]
    async fn test_create_session_payload_and_limited_decline() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sessions"))
            .and(body_json(json!({
                "user_id": "u1",
                "topic": "money_mapping",
                "date": "2025-03-02",
                "time": "14:30",
                "status": "requested"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"limited": true})))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("tok"));
        let req = NewSessionRequest::requested(
            "u1".to_string(),
            SessionTopic::MoneyMapping,
            "2025-03-02".to_string(),
            "14:30".to_string(),
        );
        let created = client.create_session(&req).await.unwrap();
        assert!(created.limited);
    }

    #[tokio::test]
    async fn test_create_reflection_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/reflections"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "r1",
                "pillar": "Mind",
                "entry_text": "slept well",
                "mood": "calm",
                "created_at": "2025-03-01T08:00:00Z"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("tok"));
        let reflection = client
            .create_reflection(&NewReflectionRequest {
                user_id: "u1".to_string(),
                pillar: Pillar::Mind,
                entry_text: "slept well".to_string(),
                mood: Some("calm".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(reflection.id, "r1");
        assert_eq!(reflection.mood.as_deref(), Some("calm"));
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(user_json())
                    .set_delay(Duration::from_millis(400)),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, Some("tok")).with_timeout(Duration::from_millis(50));
        match client.me().await {
            Err(ApiError::Timeout) => {}
            other => panic!("expected timeout, got {other:?}"),
        }
    }
}
