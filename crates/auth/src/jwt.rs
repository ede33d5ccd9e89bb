//! Identity token issuance and validation

use axum::http::HeaderValue;
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use uuid::Uuid;

use crate::claims::Claims;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::types::Role;

/// Issue a signed identity token binding {user id, name, role}.
///
/// The token expires `config.expiry_seconds` after issuance.
pub fn issue_token(
    user_id: Uuid,
    name: &str,
    role: Role,
    config: &AuthConfig,
) -> Result<String, AuthError> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        name: name.to_string(),
        role,
        iat: now as u64,
        exp: (now + config.expiry_seconds) as u64,
    };

    let header = Header::new(Algorithm::HS256);
    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());
    encode(&header, &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, "Failed to sign identity token");
        AuthError::TokenIssuance
    })
}

/// Validate an identity token.
///
/// Returns `ExpiredToken` when the token is past its expiry and
/// `InvalidToken` for any other decode or signature failure.
pub fn verify_token(token: &str, config: &AuthConfig) -> Result<Claims, AuthError> {
    let validation = Validation::new(Algorithm::HS256);
    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<Claims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "Token validation failed");
        match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            _ => AuthError::InvalidToken,
        }
    })?;

    Ok(token_data.claims)
}

/// Extract bearer token from Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    if let Some(token) = header_str.strip_prefix("Bearer ") {
        Ok(token.to_string())
    } else {
        Err(AuthError::InvalidAuthorizationFormat)
    }
}
