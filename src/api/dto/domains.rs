//! DTOs for domain suggestion, availability check and registration.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::sync::LazyLock;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::registration::RegistrationItem;
use crate::application::services::DomainCheck;
use crate::domain::entities::DomainSuggestion;

/// ISO 3166-1 alpha-2 country code.
static COUNTRY_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}$").expect("valid country code regex"));

fn default_max_suggestions() -> usize {
    10
}

/// Request for `POST /domains/suggest`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRequest {
    /// Business name as entered by the customer.
    #[validate(length(min = 1, max = 255, message = "baseName must be 1-255 characters"))]
    pub base_name: String,

    #[validate(regex(path = *COUNTRY_CODE_REGEX, message = "countryCode must be a 2-letter code"))]
    pub country_code: String,

    /// Industry sector, e.g. `handwerker`, `haendler`, `dienstleister`.
    pub sector: Option<String>,

    #[serde(default = "default_max_suggestions")]
    #[validate(range(min = 1, max = 50, message = "maxSuggestions must be between 1 and 50"))]
    pub max_suggestions: usize,
}

#[derive(Debug, Serialize)]
pub struct SuggestionItem {
    pub domain: String,
    pub tld: String,
    /// `null` until checked against the registrar.
    pub available: Option<bool>,
    pub price: f64,
    pub priority: i32,
    pub recommended: bool,
}

impl From<DomainSuggestion> for SuggestionItem {
    fn from(s: DomainSuggestion) -> Self {
        Self {
            domain: s.domain,
            tld: s.tld,
            available: s.available,
            price: s.price,
            priority: s.priority,
            recommended: s.recommended,
        }
    }
}

/// Ordered suggestions plus the echoed base name.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestResponse {
    pub suggestions: Vec<SuggestionItem>,
    pub base_name: String,
    pub normalized_base: String,
}

/// Request for `POST /domains/check`.
#[derive(Debug, Deserialize, Validate)]
pub struct CheckRequest {
    #[validate(length(min = 1, max = 100, message = "domains must contain 1-100 entries"))]
    pub domains: Vec<String>,
}

/// Availability of one domain. `price` and `error` are omitted when unknown.
#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct CheckResultItem {
    pub domain: String,
    pub available: bool,
    pub price: Option<f64>,
    pub error: Option<String>,
}

impl From<DomainCheck> for CheckResultItem {
    fn from(c: DomainCheck) -> Self {
        Self {
            domain: c.domain,
            available: c.available,
            price: c.price,
            error: c.error,
        }
    }
}

/// Per-domain results in input order.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub results: Vec<CheckResultItem>,
}

/// Request for `POST /domains/register`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub customer_id: Uuid,

    /// Full domain including TLD, e.g. `shop.de`.
    #[validate(length(min = 1, max = 253, message = "domain must be 1-253 characters"))]
    pub domain: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub registration: Option<RegistrationItem>,
    pub error: Option<String>,
}
