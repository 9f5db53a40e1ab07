//! Domain suggestion value.

use super::tld::Tld;

/// Minimum TLD priority for a suggestion to be flagged as recommended.
pub const RECOMMENDED_PRIORITY: i32 = 90;

/// A purchasable domain candidate. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainSuggestion {
    /// Full domain, e.g. `"schreinerei-muller.de"`.
    pub domain: String,
    pub tld: String,
    /// Unknown until checked against the registrar.
    pub available: Option<bool>,
    pub price: f64,
    /// Inherited from the TLD.
    pub priority: i32,
    pub recommended: bool,
}

impl DomainSuggestion {
    /// Builds a suggestion for `token` on `tld`.
    ///
    /// The suggestion is recommended only when `token` is the unmodified
    /// normalized base and the TLD priority reaches [`RECOMMENDED_PRIORITY`].
    pub fn new(token: &str, base: &str, tld: &Tld) -> Self {
        Self {
            domain: format!("{}.{}", token, tld.name),
            tld: tld.name.clone(),
            available: None,
            price: tld.sell_price,
            priority: tld.priority,
            recommended: token == base && tld.is_high_priority(),
        }
    }
}
