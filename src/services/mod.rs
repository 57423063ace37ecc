mod auth;

pub use auth::{AuthService, CredentialsProvider, StdinCredentialsProvider};
