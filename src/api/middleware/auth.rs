//! Client token authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Header carrying the client token.
pub const CLIENT_TOKEN_HEADER: &str = "x-client-token";

/// Tenant key resolved from the client token.
///
/// Inserted into request extensions by [`layer`]; handlers read it with
/// `Extension<Tenant>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant(pub String);

/// Authenticates requests using the `X-Client-Token` header.
///
/// # Header Format
///
/// ```text
/// X-Client-Token: <token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract token from `X-Client-Token` header
/// 2. Resolve the tenant key for the token
/// 3. Store [`Tenant`] in request extensions
/// 4. Continue to next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` with a `WWW-Authenticate` header if the header
/// is missing, not valid UTF-8, or the token is unknown.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::post, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/domains/check", post(check_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(CLIENT_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "X-Client-Token header is missing or invalid"}),
            )
        })?;

    let tenant = st.auth_service.authenticate(token)?;
    tracing::debug!(tenant = %tenant, "Client authenticated");

    req.extensions_mut().insert(Tenant(tenant));

    Ok(next.run(req).await)
}
