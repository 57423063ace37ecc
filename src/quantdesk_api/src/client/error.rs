use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Unexpected response from the platform (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_status_and_message() {
        let err = ClientError::Api {
            status: 503,
            message: "Fail to reset password.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected response from the platform (status 503): Fail to reset password."
        );
    }
}
