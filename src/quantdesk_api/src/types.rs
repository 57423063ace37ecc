use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValueError {
    #[error("invalid username: must be 1-64 characters without whitespace")]
    Username,
    #[error("invalid password: must be a non-empty string")]
    Password,
    #[error("invalid email address")]
    Email,
    #[error("invalid portfolio name: must be 1-64 characters")]
    PortfolioName,
    #[error("invalid quantity: must be a positive, non-zero integer")]
    Quantity,
    #[error("invalid currency pair: must be <base_currency_id>:<quote_currency_id>")]
    CurrencyPair,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);
impl Username {
    pub fn new(s: &str) -> Result<Self, ValueError> {
        let t = s.trim();
        if (1..=64).contains(&t.len()) && !t.chars().any(|c| c.is_whitespace()) {
            Ok(Self(t.into()))
        } else {
            Err(ValueError::Username)
        }
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl FromStr for Username {
    type Err = ValueError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Password(String);
impl Password {
    pub fn new(s: &str) -> Result<Self, ValueError> {
        let t = s.trim();
        if t.is_empty() {
            Err(ValueError::Password)
        } else {
            Ok(Self(t.into()))
        }
    }
}
impl FromStr for Password {
    type Err = ValueError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
// Keep passwords out of debug output and logs.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);
impl Email {
    pub fn new(s: &str) -> Result<Self, ValueError> {
        let t = s.trim();
        let valid = match t.split_once('@') {
            Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
            None => false,
        };
        if valid {
            Ok(Self(t.into()))
        } else {
            Err(ValueError::Email)
        }
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl FromStr for Email {
    type Err = ValueError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PortfolioName(String);
impl PortfolioName {
    pub fn new(s: &str) -> Result<Self, ValueError> {
        let t = s.trim();
        if (1..=64).contains(&t.len()) {
            Ok(Self(t.into()))
        } else {
            Err(ValueError::PortfolioName)
        }
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl FromStr for PortfolioName {
    type Err = ValueError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
impl AsRef<str> for PortfolioName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantity(u64);
impl Quantity {
    pub fn new(v: u64) -> Result<Self, ValueError> {
        if v >= 1 {
            Ok(Self(v))
        } else {
            Err(ValueError::Quantity)
        }
    }
    pub fn get(self) -> u64 {
        self.0
    }
}
impl FromStr for Quantity {
    type Err = ValueError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v: u64 = s.parse().map_err(|_| ValueError::Quantity)?;
        Self::new(v)
    }
}

/// A `<base_currency_id>:<quote_currency_id>` pair, as the platform identifies
/// currencies by their numeric ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    pub base: u32,
    pub quote: u32,
}
impl FromStr for CurrencyPair {
    type Err = ValueError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, quote) = s.split_once(':').ok_or(ValueError::CurrencyPair)?;
        Ok(Self {
            base: base.trim().parse().map_err(|_| ValueError::CurrencyPair)?,
            quote: quote.trim().parse().map_err(|_| ValueError::CurrencyPair)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    #[default]
    Buy,
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "buy"),
            OrderSide::Sell => write!(f, "sell"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rejects_whitespace() {
        assert!(Username::new("admin").is_ok());
        assert!(Username::new("ad min").is_err());
        assert!(Username::new("").is_err());
    }

    #[test]
    fn test_email_requires_local_and_domain() {
        assert!(Email::new("admin@localhost").is_ok());
        assert!(Email::new("@localhost").is_err());
        assert!(Email::new("admin@").is_err());
        assert!(Email::new("admin").is_err());
    }

    #[test]
    fn test_quantity_rejects_zero() {
        assert!(Quantity::new(0).is_err());
        assert_eq!("3".parse::<Quantity>().unwrap().get(), 3);
    }

    #[test]
    fn test_currency_pair_parsing() {
        let pair: CurrencyPair = "1:2".parse().unwrap();
        assert_eq!(pair.base, 1);
        assert_eq!(pair.quote, 2);
        assert!("1".parse::<CurrencyPair>().is_err());
        assert!("a:b".parse::<CurrencyPair>().is_err());
    }

    #[test]
    fn test_order_side_wire_format() {
        assert_eq!(serde_json::to_string(&OrderSide::Buy).unwrap(), r#""buy""#);
        assert_eq!(
            serde_json::to_string(&OrderSide::Sell).unwrap(),
            r#""sell""#
        );
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("123456").unwrap();
        assert_eq!(format!("{:?}", password), "Password(***)");
    }
}
