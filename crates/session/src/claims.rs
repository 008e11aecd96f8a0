use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crmpro_core::TenantId;

use crate::roles::Role;
use crate::token::TokenError;

/// Decoded bearer-token payload (display and gating claims only).
///
/// Every field is optional: the console renders fallback text rather than
/// rejecting a token that is missing display claims, and unknown claims are
/// ignored. This is the set the views actually read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    /// Subject (username) the token was issued to.
    pub sub: Option<String>,

    /// Tenant context for the token.
    pub tenant_id: Option<TenantId>,

    /// Roles granted within the tenant context.
    #[serde(default)]
    pub roles: Vec<Role>,

    /// Expiration as unix seconds, if the backend set one.
    pub exp: Option<i64>,
}

/// Deterministically validate decoded claims.
///
/// Only expiry is checked here: a token without `exp` passes, one at or past
/// `now` does not. Signature verification is intentionally outside this
/// crate.
pub fn validate_claims(claims: &SessionClaims, now: DateTime<Utc>) -> Result<(), TokenError> {
    if let Some(exp) = claims.exp {
        if now.timestamp() >= exp {
            return Err(TokenError::Expired);
        }
    }
    Ok(())
}
