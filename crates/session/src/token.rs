//! Bearer-token payload decoding.
//!
//! The console needs claims for display and menu gating only, so this does
//! what the browser always did with a compact JWT: split on `'.'` and decode
//! the payload segment. The signature is the backend's business.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::claims::{SessionClaims, validate_claims};

/// Why a token could not be turned into a live session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is not a three-part JWT")]
    Malformed,

    #[error("token payload is not valid base64url: {0}")]
    Encoding(String),

    #[error("token payload is not valid claims JSON: {0}")]
    Payload(String),

    #[error("token has expired")]
    Expired,
}

/// Decode the claims from a compact JWT without verifying its signature.
pub fn decode_claims(token: &str) -> Result<SessionClaims, TokenError> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::Malformed);
    };

    // Tolerate padded emitters; the JWT alphabet itself is unpadded base64url.
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| TokenError::Encoding(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| TokenError::Payload(e.to_string()))
}

/// Decode and validate in one step; the session derives its state from this.
pub fn derive_claims(token: &str, now: DateTime<Utc>) -> Result<SessionClaims, TokenError> {
    let claims = decode_claims(token)?;
    validate_claims(&claims, now)?;
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mint(payload: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        format!("{header}.{body}.signature")
    }

    #[test]
    fn decodes_payload_claims() {
        let token = mint(&json!({
            "sub": "alice",
            "tenantId": 4,
            "roles": ["ADMIN"],
            "exp": 4_000_000_000i64,
        }));

        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("alice"));
        assert!(claims.roles.iter().any(|r| r.as_str() == "ADMIN"));
    }

    #[test]
    fn rejects_token_without_three_parts() {
        assert_eq!(decode_claims("not-a-jwt"), Err(TokenError::Malformed));
        assert_eq!(decode_claims("one.two"), Err(TokenError::Malformed));
        assert_eq!(decode_claims("a.b.c.d"), Err(TokenError::Malformed));
    }

    #[test]
    fn rejects_payload_that_is_not_base64url() {
        let err = decode_claims("header.!!!.sig").unwrap_err();
        assert!(matches!(err, TokenError::Encoding(_)));
    }

    #[test]
    fn rejects_payload_that_is_not_claims_json() {
        let body = URL_SAFE_NO_PAD.encode(b"plain text");
        let err = decode_claims(&format!("h.{body}.s")).unwrap_err();
        assert!(matches!(err, TokenError::Payload(_)));
    }

    #[test]
    fn tolerates_padded_payload_segments() {
        use base64::engine::general_purpose::URL_SAFE;

        let body = URL_SAFE.encode(br#"{"sub":"padded"}"#);
        assert!(body.ends_with('='), "fixture should exercise padding");

        let claims = decode_claims(&format!("h.{body}.s")).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("padded"));
    }

    #[test]
    fn derive_rejects_expired_tokens() {
        let token = mint(&json!({ "sub": "old", "exp": 1_000 }));
        let err = derive_claims(&token, Utc::now()).unwrap_err();
        assert_eq!(err, TokenError::Expired);
    }
}
