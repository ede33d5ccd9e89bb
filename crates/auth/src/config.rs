//! Authentication configuration

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret used to sign and verify identity tokens (HS256)
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub expiry_seconds: i64,
}
