//! Mapping of exchange currency identifiers to common codes.

use std::collections::HashMap;

/// Table mapping Coinbase currency ids to common currency codes.
///
/// Ids without an entry map to themselves.
#[derive(Debug, Clone)]
pub struct CurrencyCodes {
    substitutions: HashMap<String, String>,
}

impl CurrencyCodes {
    /// An empty table: every id maps to itself.
    pub fn identity() -> Self {
        Self {
            substitutions: HashMap::new(),
        }
    }

    /// Add or replace a substitution.
    pub fn with(mut self, id: impl Into<String>, code: impl Into<String>) -> Self {
        self.substitutions.insert(id.into(), code.into());
        self
    }

    /// The common code for an exchange currency id.
    pub fn common_code(&self, id: &str) -> String {
        self.substitutions
            .get(id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }
}

impl Default for CurrencyCodes {
    fn default() -> Self {
        Self::identity()
            .with("XBT", "BTC")
            .with("BCC", "BCH")
            .with("DRK", "DASH")
    }
}
