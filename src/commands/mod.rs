use anyhow::Result;
use tracing::info;

use quantdesk_api::client::{ApiResponse, QuantDeskClient};

pub mod config;
pub mod login;
pub mod logout;
pub mod order;
pub mod portfolio;
pub mod reset;
pub mod risk;
pub mod signup;

/// Print one backend response the way the original smoke scripts did: status
/// first, then the parsed body.
pub(crate) fn print_response(response: &ApiResponse) -> Result<()> {
    info!("HTTP {}", response.status);
    println!("{}", serde_json::to_string_pretty(&response.body)?);
    Ok(())
}

/// Echo the session cookie set, `name=value` per line.
pub(crate) fn print_cookies(client: &QuantDeskClient) {
    for (name, value) in client.cookies() {
        println!("{}={}", name, value);
    }
}
