pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Session cookie set by `auth/login` and checked by every authenticated route.
pub const USER_COOKIE_NAME: &str = "user_token";

/// File used to persist the cookie store between one-shot invocations.
pub const SESSION_FILE: &str = "session.json";
