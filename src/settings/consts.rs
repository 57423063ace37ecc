pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "quantdesk";
pub const APP_NAME: &str = "quantdesk-cli";

pub const SETTINGS_FILE: &str = "settings.json";
