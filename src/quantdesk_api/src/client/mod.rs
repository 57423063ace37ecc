pub mod auth;
pub mod error;
pub mod order;
pub mod portfolio;
pub mod risk;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use cookie_store::Cookie;
use reqwest::{Method, StatusCode};
use reqwest_cookie_store::{CookieStore, CookieStoreMutex};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::constants::USER_COOKIE_NAME;

pub struct QuantDeskClient {
    /// The client used to make requests to the platform.
    client: reqwest::Client,
    /// Base URL of the platform API, e.g. `http://localhost:8000/api`.
    base_url: String,
    /// Cookie store shared by every request. Carries the `user_token` session
    /// cookie from `auth/login` into subsequent calls.
    cookie_store: Arc<CookieStoreMutex>,
    /// Where the cookie store is persisted between one-shot invocations.
    session_file: Option<PathBuf>,
}

/// Status and parsed JSON body of one backend call. The smoke commands print
/// both, whatever the status was.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// `message` field of the error envelope, when the backend sent one.
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }
}

/// On-disk form of one persisted cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionCookie {
    name: String,
    value: String,
}

impl QuantDeskClient {
    pub fn new(base_url: &str) -> QuantDeskClient {
        let cookie_store = CookieStore::default();
        let cookie_store = CookieStoreMutex::new(cookie_store);
        let cookie_store = Arc::new(cookie_store);
        QuantDeskClient {
            client: reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::none())
                .cookie_provider(Arc::clone(&cookie_store))
                .build()
                .unwrap(),
            cookie_store,
            base_url: base_url.trim_end_matches('/').to_string(),
            session_file: None,
        }
    }

    /// Build a client whose cookie store is backed by `path`, restoring any
    /// session persisted by a previous invocation.
    pub fn with_session_file(base_url: &str, path: &Path) -> Result<QuantDeskClient> {
        let mut client = Self::new(base_url);
        client.session_file = Some(path.to_path_buf());

        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read session file: {}", path.display()))?;
            let cookies: Vec<SessionCookie> = serde_json::from_str(&content)
                .with_context(|| format!("Session file is corrupt: {}", path.display()))?;
            for cookie in cookies {
                client.insert_cookie(&cookie.name, &cookie.value)?;
            }
        }

        Ok(client)
    }

    /// Persist the current cookie set so the next invocation reuses the session.
    /// No-op for clients built without a session file.
    pub fn save_session(&self) -> Result<()> {
        let Some(path) = self.session_file.as_ref() else {
            return Ok(());
        };
        if let Some(directory) = path.parent() {
            fs::create_dir_all(directory).with_context(|| {
                format!("Failed to create session directory: {}", directory.display())
            })?;
        }
        let cookies: Vec<SessionCookie> = self
            .cookies()
            .into_iter()
            .map(|(name, value)| SessionCookie { name, value })
            .collect();
        fs::write(path, serde_json::to_string_pretty(&cookies)?)
            .with_context(|| format!("Failed to persist session file: {}", path.display()))
    }

    /// Drop every cookie and remove the persisted session file.
    pub fn clear_session(&self) -> Result<()> {
        {
            let mut store = self.cookie_store.lock().unwrap();
            store.clear();
        }
        if let Some(path) = self.session_file.as_ref() {
            if path.exists() {
                fs::remove_file(path).with_context(|| {
                    format!("Failed to remove session file: {}", path.display())
                })?;
            }
        }
        Ok(())
    }

    /// Current cookie set as `(name, value)` pairs, the way the original smoke
    /// scripts echoed `session.cookies.get_dict()`.
    pub fn cookies(&self) -> Vec<(String, String)> {
        let store = self.cookie_store.lock().unwrap();
        store
            .iter_unexpired()
            .map(|cookie| (cookie.name().to_string(), cookie.value().to_string()))
            .collect()
    }

    /// Whether the cookie store holds a `user_token` session cookie.
    pub fn has_session(&self) -> bool {
        self.cookies()
            .iter()
            .any(|(name, _)| name == USER_COOKIE_NAME)
    }

    fn insert_cookie(&self, name: &str, value: &str) -> Result<()> {
        // The backend scopes its session cookie to `Path=/`, and a couple of
        // routes live outside the `/api` prefix. Restore against the host
        // root so the cookie matches both.
        let url = reqwest::Url::parse(&self.base_url)?.join("/")?;
        let mut store = self.cookie_store.lock().unwrap();
        store.insert(
            Cookie::parse(format!("{}={}; Path=/", name, value), &url)?,
            &url,
        )?;
        Ok(())
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// The host root. A couple of legacy routes are mounted there instead of
    /// under the `/api` prefix.
    fn root_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches("/api"), path)
    }

    fn get_headers(&self) -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "user-agent",
            concat!("quantdesk-cli/", env!("CARGO_PKG_VERSION"))
                .parse()
                .unwrap(),
        );
        headers
    }

    /// Issue one call and parse the body as JSON. Any HTTP status comes back
    /// as a normal `ApiResponse`; a body that is not JSON is an error, the
    /// same fail-loud behavior the original scripts had.
    pub(crate) async fn send<T: Serialize + ?Sized>(
        &self,
        method: Method,
        url: String,
        payload: Option<&T>,
        query: &[(&str, String)],
    ) -> Result<ApiResponse> {
        let mut request = self
            .client
            .request(method.clone(), &url)
            .headers(self.get_headers());
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to reach {} {}", method, url))?;
        let status = response.status();
        let text = response.text().await?;
        debug!("{} {} -> {}", method, url, status);

        let body: Value = serde_json::from_str(&text).with_context(|| {
            format!(
                "Response from {} {} is not JSON (status {}): {}",
                method, url, status, text
            )
        })?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_without_double_slash() {
        let client = QuantDeskClient::new("http://localhost:8000/api/");
        assert_eq!(
            client.api_url("auth/login"),
            "http://localhost:8000/api/auth/login"
        );
    }

    #[test]
    fn test_root_url_strips_api_prefix() {
        let client = QuantDeskClient::new("http://localhost:8000/api");
        assert_eq!(
            client.root_url("get_portfolio_names"),
            "http://localhost:8000/get_portfolio_names"
        );
    }

    #[test]
    fn test_session_round_trip() {
        let path = std::env::temp_dir().join("quantdesk-session-round-trip.json");
        let _ = std::fs::remove_file(&path);

        let client =
            QuantDeskClient::with_session_file("http://localhost:8000/api", &path).unwrap();
        assert!(!client.has_session());

        client.insert_cookie(USER_COOKIE_NAME, "deadbeef").unwrap();
        client.save_session().unwrap();

        let restored =
            QuantDeskClient::with_session_file("http://localhost:8000/api", &path).unwrap();
        assert!(restored.has_session());
        assert_eq!(
            restored.cookies(),
            vec![(USER_COOKIE_NAME.to_string(), "deadbeef".to_string())]
        );

        restored.clear_session().unwrap();
        assert!(!restored.has_session());
        assert!(!path.exists());
    }

    #[test]
    fn test_restored_cookie_matches_root_mounted_routes() {
        let path = std::env::temp_dir().join("quantdesk-session-root-path.json");
        let _ = std::fs::remove_file(&path);

        let client =
            QuantDeskClient::with_session_file("http://localhost:8000/api", &path).unwrap();
        client.insert_cookie(USER_COOKIE_NAME, "deadbeef").unwrap();
        client.save_session().unwrap();

        let restored =
            QuantDeskClient::with_session_file("http://localhost:8000/api", &path).unwrap();
        let api_route = reqwest::Url::parse("http://localhost:8000/api/order").unwrap();
        let root_route = reqwest::Url::parse("http://localhost:8000/get_portfolio_names").unwrap();
        {
            let store = restored.cookie_store.lock().unwrap();
            assert_eq!(store.matches(&api_route).len(), 1);
            // `get_portfolio_names` is mounted at the host root; the restored
            // session cookie has to reach it too
            assert_eq!(store.matches(&root_route).len(), 1);
        }

        restored.clear_session().unwrap();
    }
}
