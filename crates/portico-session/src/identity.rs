//! Staff identity extractor for staff-only routes.

use axum::extract::FromRequestParts;
use axum_extra::extract::CookieJar;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

use crate::token::validate_staff_token;

/// Cookie carrying the staff-session JWT, set by the identity service.
pub const STAFF_TOKEN_COOKIE: &str = "portico_staff_token";

/// Gives the extractor access to the JWT secret held in service state.
pub trait SessionSecret {
    fn jwt_secret(&self) -> &str;
}

/// Staff identity extracted from the `portico_staff_token` cookie.
///
/// Returns 401 if the cookie is absent or the token fails validation.
/// Role enforcement (403) is done by handlers after extraction.
#[derive(Debug, Clone)]
pub struct StaffIdentity {
    pub staff_id: Uuid,
    pub staff_role: u8,
}

impl<S> FromRequestParts<S> for StaffIdentity
where
    S: SessionSecret + Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let jar = CookieJar::from_headers(&parts.headers);
        let result = jar
            .get(STAFF_TOKEN_COOKIE)
            .ok_or(StatusCode::UNAUTHORIZED)
            .and_then(|cookie| {
                validate_staff_token(cookie.value(), state.jwt_secret())
                    .map_err(|_| StatusCode::UNAUTHORIZED)
            })
            .map(|info| Self {
                staff_id: info.staff_id,
                staff_role: info.staff_role,
            });

        async move { result }
    }
}
