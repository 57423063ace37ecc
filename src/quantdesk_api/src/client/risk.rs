use anyhow::{Context, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ApiResponse, QuantDeskClient};

/// One risk rule, both the body of `POST risk` and a record of `GET risk`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRule {
    /// Rule kind as the platform stores it, e.g. "pnl".
    #[serde(rename = "type")]
    pub rule_type: String,
    /// Whether the rule is enforced.
    pub on: bool,
    pub pnl: i64,
    pub position: String,
    /// UUID of the portfolio the rule applies to.
    pub pid: String,
}

/// Envelope of `GET risk`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskStatus {
    pub success: bool,
    pub data: Vec<RiskRule>,
}

impl QuantDeskClient {
    pub async fn set_risk_rule(&self, rule: &RiskRule) -> Result<ApiResponse> {
        self.send(Method::POST, self.api_url("risk"), Some(rule), &[])
            .await
    }

    pub async fn list_risk_rules(&self) -> Result<ApiResponse> {
        self.send::<()>(Method::GET, self.api_url("risk"), None, &[])
            .await
    }
}

/// Decode a `GET risk` body into typed rules.
pub fn decode_risk_status(body: &Value) -> Result<RiskStatus> {
    serde_json::from_value(body.clone()).context("Malformed risk status response")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_risk_rule_payload_shape() {
        let rule = RiskRule {
            rule_type: "pnl".to_string(),
            on: true,
            pnl: 0,
            position: "100".to_string(),
            pid: "3fa85f64-5717-4562-b3fc-2c963f66afa6".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&rule).unwrap(),
            json!({
                "type": "pnl",
                "on": true,
                "pnl": 0,
                "position": "100",
                "pid": "3fa85f64-5717-4562-b3fc-2c963f66afa6"
            })
        );
    }

    #[test]
    fn test_decode_risk_status() {
        let body = json!({
            "success": true,
            "data": [{
                "type": "pnl",
                "on": false,
                "pnl": -50,
                "position": "3",
                "pid": "3fa85f64-5717-4562-b3fc-2c963f66afa6"
            }]
        });
        let status = decode_risk_status(&body).unwrap();
        assert!(status.success);
        assert_eq!(status.data.len(), 1);
        assert_eq!(status.data[0].rule_type, "pnl");
        assert!(!status.data[0].on);
    }
}
