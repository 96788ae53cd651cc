//! Currency records normalized from `GET /currencies`.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::error::CoinbaseError;
use crate::types::CurrencyCodes;
use crate::types::accessors::{safe_decimal, safe_str};

/// A lower/upper bound pair. Unknown bounds are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MinMax {
    /// Lower bound.
    pub min: Option<Decimal>,
    /// Upper bound.
    pub max: Option<Decimal>,
}

/// Limits attached to a currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CurrencyLimits {
    /// Order amount limits.
    pub amount: MinMax,
    /// Price limits.
    pub price: MinMax,
    /// Order cost limits.
    pub cost: MinMax,
    /// Withdrawal limits.
    pub withdraw: MinMax,
}

/// A currency supported by Coinbase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Currency {
    /// Exchange currency id.
    pub id: String,
    /// Common currency code.
    pub code: String,
    /// Display name.
    pub name: Option<String>,
    /// Whether the currency is usable. Coinbase only lists active currencies.
    pub active: bool,
    /// Status string, always `"ok"` for listed currencies.
    pub status: String,
    /// Withdrawal fee, not reported by this endpoint.
    pub fee: Option<Decimal>,
    /// Amount precision, not reported by this endpoint.
    pub precision: Option<u32>,
    /// Amount, price, cost and withdrawal limits.
    pub limits: CurrencyLimits,
    /// The raw currency item.
    pub info: Value,
}

impl Currency {
    /// Normalize one item of the currency list.
    pub fn from_item(item: &Value, codes: &CurrencyCodes) -> Result<Self, CoinbaseError> {
        let id = safe_str(item, "id").ok_or_else(|| {
            CoinbaseError::MalformedResponse(format!("currency without an id: {item}"))
        })?;

        let limits = CurrencyLimits {
            amount: MinMax {
                min: safe_decimal(item, "min_size"),
                max: None,
            },
            ..CurrencyLimits::default()
        };

        Ok(Self {
            id: id.to_string(),
            code: codes.common_code(id),
            name: safe_str(item, "name").map(str::to_string),
            active: true,
            status: "ok".to_string(),
            fee: None,
            precision: None,
            limits,
            info: item.clone(),
        })
    }

    /// Minimum order amount, if known.
    pub fn min_amount(&self) -> Option<Decimal> {
        self.limits.amount.min
    }
}

/// Normalize the unwrapped currency list into records keyed by common code.
pub fn parse_currencies(
    data: &Value,
    codes: &CurrencyCodes,
) -> Result<HashMap<String, Currency>, CoinbaseError> {
    let items = data.as_array().ok_or_else(|| {
        CoinbaseError::MalformedResponse(format!("expected a currency list, got {data}"))
    })?;

    items
        .iter()
        .map(|item| Currency::from_item(item, codes).map(|c| (c.code.clone(), c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_bitcoin() {
        let data = json!([{"id": "BTC", "name": "Bitcoin", "min_size": "0.0001"}]);
        let currencies = parse_currencies(&data, &CurrencyCodes::default()).unwrap();

        let btc = &currencies["BTC"];
        assert_eq!(btc.id, "BTC");
        assert_eq!(btc.code, "BTC");
        assert_eq!(btc.name.as_deref(), Some("Bitcoin"));
        assert!(btc.active);
        assert_eq!(btc.min_amount(), Some(Decimal::new(1, 4)));
        assert_eq!(btc.limits.amount.max, None);
        assert_eq!(btc.limits.price, MinMax::default());
        assert_eq!(btc.info, data[0]);
    }

    #[test]
    fn test_code_is_canonicalized() {
        let data = json!([{"id": "XBT", "name": "Bitcoin"}]);
        let currencies = parse_currencies(&data, &CurrencyCodes::default()).unwrap();
        assert_eq!(currencies["BTC"].id, "XBT");
    }

    #[test]
    fn test_bad_min_size_is_absent() {
        let data = json!([
            {"id": "USD", "name": "US Dollar", "min_size": "n/a"},
            {"id": "EUR"}
        ]);
        let currencies = parse_currencies(&data, &CurrencyCodes::default()).unwrap();
        assert_eq!(currencies["USD"].min_amount(), None);
        assert_eq!(currencies["EUR"].min_amount(), None);
        assert_eq!(currencies["EUR"].name, None);
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let data = json!([{"id": "BTC", "name": "Bitcoin", "min_size": "0.0001"}]);
        let currencies = parse_currencies(&data, &CurrencyCodes::default()).unwrap();
        let value = serde_json::to_value(&currencies["BTC"]).unwrap();
        assert!(value["limits"]["amount"]["max"].is_null());
        assert!(value["limits"]["withdraw"].get("min").is_some());
        assert!(value["fee"].is_null());
    }

    #[test]
    fn test_item_without_id_is_rejected() {
        let data = json!([{"name": "Nameless"}]);
        let err = parse_currencies(&data, &CurrencyCodes::default()).unwrap_err();
        assert!(matches!(err, CoinbaseError::MalformedResponse(_)));
    }
}
