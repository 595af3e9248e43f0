//! Staff access-token validation.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;
#[cfg(test)]
use serde::Serialize;
use uuid::Uuid;

/// Staff identity extracted from a validated access token.
#[derive(Debug, Clone)]
pub struct StaffTokenInfo {
    pub staff_id: Uuid,
    pub staff_role: u8,
    pub token_exp: u64,
}

/// Errors returned by [`validate_staff_token`].
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

/// JWT claims carried by the staff-session cookie.
///
/// `sub` is the staff user id (UUID string), `role` the staff role wire value,
/// `exp` seconds since the UNIX epoch. The portal never signs these —
/// `Serialize` exists only so tests can mint tokens.
#[derive(Debug, Deserialize)]
#[cfg_attr(test, derive(Serialize))]
pub struct StaffClaims {
    pub sub: String,
    pub role: u8,
    pub exp: u64,
}

/// Decode and validate a staff JWT (HS256, exp checked, `exp` + `sub` required).
/// Default leeway of 60s tolerates clock skew against the identity service.
pub fn validate_staff_token(
    cookie_value: &str,
    secret: &str,
) -> Result<StaffTokenInfo, SessionError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<StaffClaims>(
        cookie_value,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature
        | jsonwebtoken::errors::ErrorKind::InvalidEcdsaKey
        | jsonwebtoken::errors::ErrorKind::InvalidRsaKey(_) => SessionError::InvalidSignature,
        _ => SessionError::Malformed,
    })?;

    let staff_id = data
        .claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| SessionError::Malformed)?;

    Ok(StaffTokenInfo {
        staff_id,
        staff_role: data.claims.role,
        token_exp: data.claims.exp,
    })
}
