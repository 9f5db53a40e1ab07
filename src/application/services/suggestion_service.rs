//! Domain suggestion engine.

use std::cmp::Reverse;
use std::sync::Arc;

use crate::domain::entities::{DomainSuggestion, Tld};
use crate::domain::repositories::TldRepository;
use crate::error::AppError;
use crate::utils::domain_name::{expand, normalize};
use serde_json::json;

/// Upper bound for `max_suggestions`.
pub const MAX_SUGGESTIONS: usize = 50;

/// Only the first candidate tokens take part in ranking.
pub const MAX_CANDIDATE_TOKENS: usize = 5;

/// Number of TLDs fetched per suggestion request.
pub const TLD_FETCH_LIMIT: i64 = 10;

/// Result of a suggestion request.
#[derive(Debug, Clone)]
pub struct SuggestionList {
    /// Normalized form of the requested base name.
    pub normalized_base: String,
    pub suggestions: Vec<DomainSuggestion>,
}

/// Turns a business name into a ranked list of purchasable domains.
pub struct SuggestionService {
    tld_repository: Arc<dyn TldRepository>,
}

impl SuggestionService {
    pub fn new(tld_repository: Arc<dyn TldRepository>) -> Self {
        Self { tld_repository }
    }

    /// Generates up to `max_suggestions` suggestions for `base_name`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - `max_suggestions` is outside `1..=50`
    /// - the base name normalizes to an empty token
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn suggest(
        &self,
        base_name: &str,
        country: &str,
        sector: Option<&str>,
        max_suggestions: usize,
    ) -> Result<SuggestionList, AppError> {
        if !(1..=MAX_SUGGESTIONS).contains(&max_suggestions) {
            return Err(AppError::bad_request(
                "maxSuggestions must be between 1 and 50",
                json!({ "max_suggestions": max_suggestions }),
            ));
        }

        let base = normalize(base_name);
        if base.is_empty() {
            return Err(AppError::bad_request(
                "Base name contains no usable characters",
                json!({ "base_name": base_name }),
            ));
        }

        let tokens = expand(&base, sector);
        let tlds = self
            .tld_repository
            .recommended_for_country(country, TLD_FETCH_LIMIT)
            .await?;

        tracing::debug!(
            base = %base,
            country,
            tokens = tokens.len(),
            tlds = tlds.len(),
            "Ranking domain suggestions"
        );

        Ok(SuggestionList {
            suggestions: rank(&base, &tokens, &tlds, max_suggestions),
            normalized_base: base,
        })
    }
}

/// Combines tokens with TLDs and orders the result.
///
/// Tokens form the outer loop and TLDs the inner one; combination stops once
/// `max` suggestions exist. The output is sorted recommended first, then by
/// priority descending. The sort is stable, so creation order breaks ties.
pub fn rank(base: &str, tokens: &[String], tlds: &[Tld], max: usize) -> Vec<DomainSuggestion> {
    let mut suggestions: Vec<DomainSuggestion> = tokens
        .iter()
        .take(MAX_CANDIDATE_TOKENS)
        .flat_map(|token| tlds.iter().map(move |tld| (token, tld)))
        .take(max)
        .map(|(token, tld)| DomainSuggestion::new(token, base, tld))
        .collect();

    suggestions.sort_by_key(|s| (!s.recommended, Reverse(s.priority)));
    suggestions
}
