use axum::http::StatusCode;

/// `GET /healthz` — process is up.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /readyz` — ready to take traffic. Services that need a deeper
/// check (database ping etc.) register their own handler instead.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
