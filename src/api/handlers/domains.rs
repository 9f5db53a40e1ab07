//! Handlers for domain suggestion, availability check and registration.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::domains::{
    CheckRequest, CheckResponse, RegisterRequest, RegisterResponse, SuggestRequest,
    SuggestResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Generates ranked domain suggestions for a business name.
///
/// # Endpoint
///
/// `POST /domains/suggest`
///
/// # Request Body
///
/// ```json
/// {
///   "baseName": "Schreinerei Müller GmbH",
///   "countryCode": "DE",
///   "sector": "handwerker",
///   "maxSuggestions": 5
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "suggestions": [
///     {
///       "domain": "schreinerei-muller.de",
///       "tld": "de",
///       "available": null,
///       "price": 9.9,
///       "priority": 100,
///       "recommended": true
///     }
///   ],
///   "baseName": "Schreinerei Müller GmbH",
///   "normalizedBase": "schreinerei-muller"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if validation fails or the base name has no usable characters.
pub async fn suggest_handler(
    State(state): State<AppState>,
    Json(payload): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, AppError> {
    payload.validate()?;

    let list = state
        .suggestion_service
        .suggest(
            &payload.base_name,
            &payload.country_code,
            payload.sector.as_deref(),
            payload.max_suggestions,
        )
        .await?;

    Ok(Json(SuggestResponse {
        suggestions: list.suggestions.into_iter().map(Into::into).collect(),
        base_name: payload.base_name,
        normalized_base: list.normalized_base,
    }))
}

/// Checks availability of one or more domains.
///
/// # Endpoint
///
/// `POST /domains/check`
///
/// # Batch Processing
///
/// Domains are checked one after another in a single registrar session.
/// A failing domain gets `available: false` and an `error` message; the
/// remaining domains are still checked. Results keep the input order.
///
/// # Response
///
/// ```json
/// {
///   "results": [
///     { "domain": "free.de", "available": true, "price": 10.0 },
///     { "domain": "taken.de", "available": false }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if the list is empty or has more than 100 entries.
/// Returns 502 if no registrar session can be established.
pub async fn check_handler(
    State(state): State<AppState>,
    Json(payload): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, AppError> {
    payload.validate()?;

    let results = state.domain_service.check_domains(&payload.domains).await?;

    Ok(Json(CheckResponse {
        results: results.into_iter().map(Into::into).collect(),
    }))
}

/// Registers a domain for a customer.
///
/// # Endpoint
///
/// `POST /domains/register`
///
/// # Errors
///
/// Returns 400 if the domain has no TLD or the TLD is not offered.
/// Returns 404 if the customer does not exist.
/// Returns 502 if no registrar session can be established.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    payload.validate()?;

    let result = state
        .domain_service
        .register_domain(payload.customer_id, &payload.domain)
        .await?;

    Ok(Json(RegisterResponse {
        success: result.success,
        registration: Some(result.registration.into()),
        error: result.error,
    }))
}
