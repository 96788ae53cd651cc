//! Balances normalized from `GET /accounts`.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::error::CoinbaseError;
use crate::types::CurrencyCodes;
use crate::types::accessors::{safe_str, to_decimal};

/// Balance of a single currency.
///
/// `free + used == total` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Balance {
    /// Common currency code.
    pub code: String,
    /// Amount available for use.
    pub free: Decimal,
    /// Amount on hold. Coinbase does not report holds, so this stays zero.
    pub used: Decimal,
    /// Total amount.
    pub total: Decimal,
}

impl Balance {
    /// An all-free balance.
    pub fn free_only(code: impl Into<String>, total: Decimal) -> Self {
        Self {
            code: code.into(),
            free: total,
            used: Decimal::ZERO,
            total,
        }
    }

    fn absorb(&mut self, other: &Balance) {
        self.free += other.free;
        self.used += other.used;
        self.total += other.total;
    }
}

/// All balances of an account, keyed by common currency code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Balances {
    /// Per-currency balances.
    pub balances: HashMap<String, Balance>,
    /// The raw account list.
    pub info: Value,
}

impl Balances {
    /// Balance of one currency.
    pub fn get(&self, code: &str) -> Option<&Balance> {
        self.balances.get(code)
    }

    /// Free amount per currency.
    pub fn free(&self) -> HashMap<String, Decimal> {
        self.view(|b| b.free)
    }

    /// Used amount per currency.
    pub fn used(&self) -> HashMap<String, Decimal> {
        self.view(|b| b.used)
    }

    /// Total amount per currency.
    pub fn total(&self) -> HashMap<String, Decimal> {
        self.view(|b| b.total)
    }

    fn view(&self, field: impl Fn(&Balance) -> Decimal) -> HashMap<String, Decimal> {
        self.balances
            .iter()
            .map(|(code, balance)| (code.clone(), field(balance)))
            .collect()
    }
}

/// Normalize the unwrapped account list.
///
/// Each account contributes `balance.amount` in `balance.currency`. Accounts
/// that share a currency code are summed.
pub fn parse_balances(data: &Value, codes: &CurrencyCodes) -> Result<Balances, CoinbaseError> {
    let accounts = data.as_array().ok_or_else(|| {
        CoinbaseError::MalformedResponse(format!("expected an account list, got {data}"))
    })?;

    let mut balances: HashMap<String, Balance> = HashMap::new();
    for account in accounts {
        let balance = &account["balance"];
        let currency = safe_str(balance, "currency").ok_or_else(|| {
            CoinbaseError::MalformedResponse(format!("account without a currency: {account}"))
        })?;
        let total = balance.get("amount").and_then(to_decimal).ok_or_else(|| {
            CoinbaseError::MalformedResponse(format!("account without an amount: {account}"))
        })?;

        let entry = Balance::free_only(codes.common_code(currency), total);
        match balances.get_mut(&entry.code) {
            Some(existing) => existing.absorb(&entry),
            None => {
                balances.insert(entry.code.clone(), entry);
            }
        }
    }

    Ok(Balances {
        balances,
        info: data.clone(),
    })
}
