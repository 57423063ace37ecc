use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use std::io::{stdout, Write};
use tracing::{info, warn};

use crate::settings::consts::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER};
use crate::settings::SettingsStore;
use quantdesk_api::{
    client::{error::ClientError, ApiResponse, QuantDeskClient},
    constants::{DEFAULT_BASE_URL, SESSION_FILE},
    types::{Password, Username},
};

pub trait CredentialsProvider {
    fn read_password(&self, prompt: &str) -> Result<Password>;
}
pub struct StdinCredentialsProvider;
impl CredentialsProvider for StdinCredentialsProvider {
    fn read_password(&self, prompt: &str) -> Result<Password> {
        print!("\n{} (hidden): ", prompt);
        let _ = stdout().flush();
        let password = Password::new(&rpassword::read_password()?)?;
        println!();
        Ok(password)
    }
}

pub trait ClientFactory {
    fn new_client(&self, base_url: &str) -> Result<QuantDeskClient>;
}
pub struct DefaultClientFactory;
impl ClientFactory for DefaultClientFactory {
    fn new_client(&self, base_url: &str) -> Result<QuantDeskClient> {
        let project_dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .ok_or_else(|| anyhow!("Could not determine project directories"))?;
        let session_file = project_dirs.data_dir().join(SESSION_FILE);
        QuantDeskClient::with_session_file(base_url, &session_file)
    }
}

pub struct AuthService<'a> {
    settings_store: &'a dyn SettingsStore,
    credentials_provider: Box<dyn CredentialsProvider>,
    client_factory: Box<dyn ClientFactory>,
}

impl<'a> AuthService<'a> {
    pub fn new(
        settings_store: &'a dyn SettingsStore,
        credentials_provider: Box<dyn CredentialsProvider>,
        client_factory: Box<dyn ClientFactory>,
    ) -> Self {
        Self {
            settings_store,
            credentials_provider,
            client_factory,
        }
    }

    pub fn with_defaults(settings_store: &'a dyn SettingsStore) -> Self {
        Self::new(
            settings_store,
            Box::new(StdinCredentialsProvider),
            Box::new(DefaultClientFactory),
        )
    }

    fn base_url(&self) -> Result<String> {
        let settings = self.settings_store.load()?;
        Ok(settings
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()))
    }

    /// A client backed by the persisted cookie store, without requiring a
    /// session. Used by the commands that work logged out (signup, login).
    pub fn connect(&self) -> Result<QuantDeskClient> {
        self.client_factory.new_client(&self.base_url()?)
    }

    /// Log in with the configured username (or `username` when given) and a
    /// password from the settings or a hidden prompt. Persists the session
    /// cookie on success. `None` means the CLI is not configured yet.
    pub async fn login(
        &self,
        username: Option<Username>,
    ) -> Result<Option<(QuantDeskClient, ApiResponse)>> {
        let settings = self.settings_store.load()?;
        let username = match username
            .map(|u| u.as_str().to_string())
            .or_else(|| settings.username.clone())
        {
            Some(username) => username,
            None => {
                warn!("No username found in settings, run `quantdesk-cli config --username <NAME>` to set it");
                return Ok(None);
            }
        };

        let password = match settings.password.as_deref() {
            Some(password) => Password::new(password)?,
            None => {
                info!("We'll need your password to log you in. It will not be stored.");
                self.credentials_provider
                    .read_password("Enter your password")?
            }
        };

        let client = self.connect()?;
        let response = client.login(&username, password.as_ref()).await?;
        if response.is_success() {
            client.save_session()?;
        }
        Ok(Some((client, response)))
    }

    /// Reuse the persisted session when one exists, log in otherwise.
    pub async fn session(&self) -> Result<Option<QuantDeskClient>> {
        let client = self.connect()?;
        if client.has_session() {
            return Ok(Some(client));
        }

        info!("No persisted session, logging in first");
        match self.login(None).await? {
            Some((client, response)) if response.is_success() => Ok(Some(client)),
            Some((_, response)) => {
                let message = response
                    .message()
                    .unwrap_or("the platform rejected the login")
                    .to_string();
                // The backend answers wrong credentials with a 400
                if response.status.as_u16() == 400 {
                    Err(anyhow::Error::new(ClientError::InvalidCredentials).context(message))
                } else {
                    Err(ClientError::Api {
                        status: response.status.as_u16(),
                        message,
                    }
                    .into())
                }
            }
            None => Ok(None),
        }
    }
}
