use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role name carried in the session claims.
///
/// Roles are intentionally opaque strings at this layer; the backend decides
/// what they mean. The console only ever checks membership, for gating the
/// navigation it renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

/// The one role name the console gates navigation on.
pub const ADMIN: &str = "ADMIN";

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
