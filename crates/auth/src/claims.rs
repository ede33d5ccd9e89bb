//! Identity token claims

use serde::{Deserialize, Serialize};

use crate::types::Role;

/// Claims carried by a JobStack identity token.
///
/// The token is self-contained: verifying it yields the full identity
/// (id, name, role) without any server-side session state.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Display name
    pub name: String,
    /// Role at registration time
    pub role: Role,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
}
