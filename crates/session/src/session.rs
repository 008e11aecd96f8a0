//! The session holder every view reads.

use chrono::Utc;

use crate::claims::SessionClaims;
use crate::store::TokenStore;
use crate::token::{TokenError, derive_claims};

/// Client-side session state derived from the persisted bearer token.
///
/// Single writer (login/logout), many readers (every view). Cloning shares
/// only the store handle; the derived claims are plain data.
#[derive(Debug, Clone)]
pub struct Session<S: TokenStore> {
    store: S,
    claims: Option<SessionClaims>,
}

impl<S: TokenStore> Session<S> {
    /// Restore the session from whatever token the store holds.
    ///
    /// A stored token that no longer decodes or validates is removed from
    /// the store and the session starts unauthenticated.
    pub fn load(store: S) -> Self {
        let mut session = Self {
            store,
            claims: None,
        };
        if let Some(token) = session.store.get() {
            if let Err(err) = session.derive(&token) {
                tracing::warn!(%err, "discarding unusable stored token");
                session.store.remove();
            }
        }
        session
    }

    /// Persist a freshly issued token and re-derive the claims.
    ///
    /// On failure the store is cleared and the reason is returned; the
    /// session ends up unauthenticated either way.
    pub fn set_token(&mut self, token: &str) -> Result<(), TokenError> {
        self.store.set(token);
        match self.derive(token) {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::warn!(%err, "rejecting token that does not decode");
                self.store.remove();
                Err(err)
            }
        }
    }

    fn derive(&mut self, token: &str) -> Result<(), TokenError> {
        match derive_claims(token, Utc::now()) {
            Ok(claims) => {
                self.claims = Some(claims);
                Ok(())
            }
            Err(err) => {
                self.claims = None;
                Err(err)
            }
        }
    }

    /// The raw bearer token, if one is persisted.
    pub fn token(&self) -> Option<String> {
        self.store.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.claims.is_some()
    }

    /// Exact-match membership against the decoded role list.
    pub fn has_role(&self, role: &str) -> bool {
        self.claims
            .as_ref()
            .is_some_and(|c| c.roles.iter().any(|r| r.as_str() == role))
    }

    /// Tenant display string; `"CRM App"` when no tenant claim is present.
    pub fn tenant_name(&self) -> String {
        match self.claims.as_ref().and_then(|c| c.tenant_id) {
            Some(tenant_id) => format!("Tenant {tenant_id}"),
            None => "CRM App".to_string(),
        }
    }

    /// Subject display string; `"User"` when no subject claim is present.
    pub fn user_name(&self) -> String {
        self.claims
            .as_ref()
            .and_then(|c| c.sub.clone())
            .unwrap_or_else(|| "User".to_string())
    }

    /// Drop the persisted token and all derived state (logout).
    pub fn clear(&mut self) {
        self.store.remove();
        self.claims = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles;
    use crate::store::MemoryStore;
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use serde_json::json;

    fn mint(payload: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        format!("{header}.{body}.signature")
    }

    fn far_future() -> i64 {
        Utc::now().timestamp() + 3_600
    }

    #[test]
    fn decodable_token_authenticates_and_exposes_roles() {
        let store = MemoryStore::new();
        let mut session = Session::load(store.clone());
        assert!(!session.is_authenticated());

        let token = mint(json!({
            "sub": "alice",
            "tenantId": 4,
            "roles": ["ADMIN", "USER"],
            "exp": far_future(),
        }));
        session.set_token(&token).unwrap();

        assert!(session.is_authenticated());
        assert!(session.has_role(roles::ADMIN));
        assert!(session.has_role("USER"));
        assert!(!session.has_role("MANAGER"));
        assert_eq!(session.tenant_name(), "Tenant 4");
        assert_eq!(session.user_name(), "alice");
        assert_eq!(store.get().as_deref(), Some(token.as_str()));
    }

    #[test]
    fn undecodable_stored_token_is_cleared_on_load() {
        let store = MemoryStore::new();
        store.set("not-a-jwt");

        let session = Session::load(store.clone());

        assert!(!session.is_authenticated());
        assert_eq!(store.get(), None, "storage must be cleared");
        assert_eq!(session.token(), None);
    }

    #[test]
    fn set_token_failure_reports_the_reason_and_clears() {
        let store = MemoryStore::new();
        let mut session = Session::load(store.clone());

        let err = session.set_token("garbage").unwrap_err();
        assert_eq!(err, TokenError::Malformed);
        assert!(!session.is_authenticated());
        assert_eq!(store.get(), None);
    }

    #[test]
    fn expired_stored_token_counts_as_no_session() {
        let store = MemoryStore::new();
        store.set(&mint(json!({ "sub": "old", "exp": 1_000 })));

        let session = Session::load(store.clone());

        assert!(!session.is_authenticated());
        assert_eq!(store.get(), None);
    }

    #[test]
    fn clear_drops_token_and_derived_state() {
        let store = MemoryStore::new();
        let mut session = Session::load(store.clone());
        session
            .set_token(&mint(json!({ "sub": "alice", "exp": far_future() })))
            .unwrap();
        assert!(session.is_authenticated());

        session.clear();

        assert!(!session.is_authenticated());
        assert!(!session.has_role(roles::ADMIN));
        assert_eq!(store.get(), None);
    }

    #[test]
    fn display_names_fall_back_when_claims_are_sparse() {
        let store = MemoryStore::new();
        let mut session = Session::load(store.clone());
        session.set_token(&mint(json!({}))).unwrap();

        // A decodable token with no display claims still authenticates.
        assert!(session.is_authenticated());
        assert_eq!(session.tenant_name(), "CRM App");
        assert_eq!(session.user_name(), "User");
        assert!(!session.has_role(roles::ADMIN));
    }
}
