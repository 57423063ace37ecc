use anyhow::{Context, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::OrderSide;

use super::{ApiResponse, QuantDeskClient};

/// Body of `POST order`. The backend deserializes price and quantity from
/// strings and matches `order_type` against `"buy"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTicket {
    pub base: String,
    pub quote: String,
    pub order_type: OrderSide,
    pub price: String,
    pub quantity: String,
}

/// Query parameters of `GET order`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderQuery {
    /// Portfolio id whose orders are listed.
    pub portfolio_id: i32,
    /// Offset into the result set.
    pub start: i32,
    /// Maximum number of records returned.
    pub len: i32,
    pub filter: String,
}

/// One record of the order listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: i32,
    pub buyin: bool,
    /// "pending", "success", "fail" or "unknown".
    pub state: String,
    pub base: String,
    pub quote: String,
    pub qty: i64,
    pub price: i64,
}

impl QuantDeskClient {
    pub async fn place_order(&self, ticket: &OrderTicket) -> Result<ApiResponse> {
        self.send(Method::POST, self.api_url("order"), Some(ticket), &[])
            .await
    }

    pub async fn list_orders(&self, query: &OrderQuery) -> Result<ApiResponse> {
        let params = [
            ("id", query.portfolio_id.to_string()),
            ("st", query.start.to_string()),
            ("len", query.len.to_string()),
            ("filter", query.filter.clone()),
        ];
        self.send::<()>(Method::GET, self.api_url("order"), None, &params)
            .await
    }
}

/// Decode the records of an order listing. The backend nests them as a
/// string-encoded JSON array under `data`.
pub fn decode_orders(body: &Value) -> Result<Vec<OrderRecord>> {
    let data = body
        .get("data")
        .and_then(Value::as_str)
        .context("Order listing has no string `data` field")?;
    serde_json::from_str(data).with_context(|| format!("Malformed order records: {}", data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_ticket_payload_shape() {
        let ticket = OrderTicket {
            base: "BTC".to_string(),
            quote: "USDT".to_string(),
            order_type: OrderSide::Buy,
            price: "100".to_string(),
            quantity: "2".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&ticket).unwrap(),
            json!({
                "base": "BTC",
                "quote": "USDT",
                "order_type": "buy",
                "price": "100",
                "quantity": "2"
            })
        );
    }

    #[test]
    fn test_decode_orders_unwraps_nested_document() {
        let body = json!({
            "status": "successful",
            "data": r#"[{"id":7,"buyin":true,"state":"pending","base":"BTC","quote":"USDT","qty":2,"price":100}]"#,
            "len": 1
        });
        let orders = decode_orders(&body).unwrap();
        assert_eq!(
            orders,
            vec![OrderRecord {
                id: 7,
                buyin: true,
                state: "pending".to_string(),
                base: "BTC".to_string(),
                quote: "USDT".to_string(),
                qty: 2,
                price: 100,
            }]
        );
    }

    #[test]
    fn test_decode_orders_rejects_missing_data() {
        assert!(decode_orders(&json!({"status": "successful"})).is_err());
        // `data` must be the string-encoded form, not a plain array
        assert!(decode_orders(&json!({"data": []})).is_err());
    }
}
