//! Client token authentication.
//!
//! This is a placeholder scheme: every partner frontend presents a static
//! token in `X-Client-Token`, and the token maps to a tenant key. A signed
//! token naming the tenant can replace it behind the same
//! [`AuthService::authenticate`] contract.

use sha2::{Digest, Sha256};

use crate::error::AppError;
use serde_json::json;

type TokenDigest = [u8; 32];

/// Maps presented client tokens to tenant keys.
///
/// Only SHA-256 digests of the configured tokens are kept. Presented tokens
/// are hashed and compared in constant time against every entry.
pub struct AuthService {
    tokens: Vec<(TokenDigest, String)>,
}

impl AuthService {
    /// Creates the service from the primary token and additional pairs.
    ///
    /// # Arguments
    ///
    /// - `client_token` - primary token, resolved to `default_tenant_key`
    /// - `token_tenants` - extra `(token, tenant_key)` pairs
    pub fn new(
        client_token: &str,
        default_tenant_key: &str,
        token_tenants: &[(String, String)],
    ) -> Self {
        let tokens = std::iter::once((client_token, default_tenant_key))
            .chain(
                token_tenants
                    .iter()
                    .map(|(token, tenant)| (token.as_str(), tenant.as_str())),
            )
            .map(|(token, tenant)| (digest(token), tenant.to_string()))
            .collect();

        Self { tokens }
    }

    /// Returns the tenant key the token belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is unknown.
    pub fn authenticate(&self, token: &str) -> Result<String, AppError> {
        let presented = digest(token);

        // Every entry is compared so timing does not depend on the match position.
        let tenant = self.tokens.iter().fold(None, |found, (expected, tenant)| {
            if constant_time_eq(&presented, expected) && found.is_none() {
                Some(tenant)
            } else {
                found
            }
        });

        tenant.cloned().ok_or_else(|| {
            AppError::unauthorized(
                "Invalid authentication token",
                json!({ "reason": "X-Client-Token is unknown" }),
            )
        })
    }
}

fn digest(token: &str) -> TokenDigest {
    Sha256::digest(token.as_bytes()).into()
}

fn constant_time_eq(a: &TokenDigest, b: &TokenDigest) -> bool {
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> AuthService {
        AuthService::new(
            "dev-token-123",
            "handelshelfer",
            &[
                (
                    "token_handwerker24_dev_456".to_string(),
                    "handwerker24".to_string(),
                ),
                ("dev-token-123".to_string(), "shadowed".to_string()),
            ],
        )
    }

    #[test]
    fn test_primary_token_maps_to_default_tenant() {
        let tenant = test_service().authenticate("dev-token-123").unwrap();

        assert_eq!(tenant, "handelshelfer");
    }

    #[test]
    fn test_additional_token_maps_to_its_tenant() {
        let tenant = test_service()
            .authenticate("token_handwerker24_dev_456")
            .unwrap();

        assert_eq!(tenant, "handwerker24");
    }

    #[test]
    fn test_unknown_token_is_unauthorized() {
        let service = test_service();

        for token in ["", "dev-token-12", "dev-token-1234", "DEV-TOKEN-123"] {
            let err = service.authenticate(token).unwrap_err();
            assert!(matches!(err, AppError::Unauthorized { .. }), "{token}");
        }
    }

    #[test]
    fn test_constant_time_eq() {
        let a = digest("a");
        let b = digest("b");

        assert!(constant_time_eq(&a, &a));
        assert!(!constant_time_eq(&a, &b));
    }
}
