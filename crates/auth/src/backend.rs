//! Concrete authentication backend
//!
//! Wraps `AuthConfig` and owns token validation. Identity tokens are
//! self-contained (id, name, role), so authentication never touches the
//! database.

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::jwt::verify_token;

/// Concrete authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Authenticate a bearer token into a verified identity.
    pub fn authenticate(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = verify_token(token, &self.config)?;
        AuthContext::from_claims(&claims)
    }
}
