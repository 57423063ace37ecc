use anyhow::Result;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use super::{ApiResponse, QuantDeskClient};

/// Body of `POST auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub name: String,
    pub password: String,
}

/// Body of `POST auth/user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupInfo {
    pub name: String,
    pub password: String,
    pub email: String,
    /// Bare account-type discriminant, the platform does not name its roles.
    pub user_type: i32,
}

impl QuantDeskClient {
    /// Log in. On success the backend sets the `user_token` cookie in the
    /// shared cookie store, which authenticates every later call.
    pub async fn login(&self, name: &str, password: &str) -> Result<ApiResponse> {
        let payload = Credentials {
            name: name.to_string(),
            password: password.to_string(),
        };
        let response = self
            .send(Method::POST, self.api_url("auth/login"), Some(&payload), &[])
            .await?;
        if response.is_success() {
            info!("🔓 Logged in as {}", name);
        }
        Ok(response)
    }

    pub async fn signup(&self, info: &SignupInfo) -> Result<ApiResponse> {
        self.send(Method::POST, self.api_url("auth/user"), Some(info), &[])
            .await
    }

    /// Change the password of the logged in account.
    pub async fn reset_password(&self, new_password: &str) -> Result<ApiResponse> {
        let payload = json!({ "password": new_password });
        self.send(Method::POST, self.api_url("auth/reset"), Some(&payload), &[])
            .await
    }

    /// Invalidate the session server side. The persisted cookie file is the
    /// caller's to clear, see [`QuantDeskClient::clear_session`].
    pub async fn logout(&self) -> Result<ApiResponse> {
        self.send::<()>(Method::POST, self.api_url("auth/logout"), None, &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_payload_shape() {
        let payload = Credentials {
            name: "admin".to_string(),
            password: "123456".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"name": "admin", "password": "123456"})
        );
    }

    #[test]
    fn test_signup_payload_shape() {
        let payload = SignupInfo {
            name: "admin".to_string(),
            password: "123456".to_string(),
            email: "admin@localhost".to_string(),
            user_type: 0,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "name": "admin",
                "password": "123456",
                "email": "admin@localhost",
                "user_type": 0
            })
        );
    }
}
