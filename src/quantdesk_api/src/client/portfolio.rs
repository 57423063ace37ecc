use anyhow::Result;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{ApiResponse, QuantDeskClient};

/// One `{base, quote}` position opened with a new portfolio. The platform
/// identifies currencies by numeric id but deserializes them from strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPosition {
    pub base_currency_id: String,
    pub quote_currency_id: String,
}

/// Body of `POST portfolio`. Every scalar is sent as a string, which is what
/// the backend deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPortfolio {
    pub name: String,
    pub amount: String,
    pub currency_id: String,
    pub portfolio_type: String,
    pub position: Vec<NewPosition>,
}

impl QuantDeskClient {
    pub async fn create_portfolio(&self, portfolio: &NewPortfolio) -> Result<ApiResponse> {
        self.send(Method::POST, self.api_url("portfolio"), Some(portfolio), &[])
            .await
    }

    /// Update the balance of an existing portfolio. Unlike creation, `amount`
    /// is a plain integer here.
    pub async fn update_portfolio(&self, name: &str, amount: i64) -> Result<ApiResponse> {
        let payload = json!({ "name": name, "amount": amount });
        self.send(Method::PUT, self.api_url("portfolio"), Some(&payload), &[])
            .await
    }

    pub async fn remove_portfolio(&self, name: &str) -> Result<ApiResponse> {
        let payload = json!({ "name": name });
        self.send(Method::DELETE, self.api_url("portfolio"), Some(&payload), &[])
            .await
    }

    /// List portfolio names with their balances. Legacy route, mounted at the
    /// host root rather than under `/api`.
    pub async fn list_portfolios(&self) -> Result<ApiResponse> {
        self.send::<()>(Method::GET, self.root_url("get_portfolio_names"), None, &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_portfolio_payload_shape() {
        let portfolio = NewPortfolio {
            name: "test6".to_string(),
            amount: "5000".to_string(),
            currency_id: "1".to_string(),
            portfolio_type: "0".to_string(),
            position: vec![NewPosition {
                base_currency_id: "1".to_string(),
                quote_currency_id: "2".to_string(),
            }],
        };
        assert_eq!(
            serde_json::to_value(&portfolio).unwrap(),
            json!({
                "name": "test6",
                "amount": "5000",
                "currency_id": "1",
                "portfolio_type": "0",
                "position": [
                    {"base_currency_id": "1", "quote_currency_id": "2"}
                ]
            })
        );
    }
}
