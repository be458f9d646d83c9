use axum::http::StatusCode;

/// Handler for `GET /healthz`, the liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz`. Readiness currently mirrors liveness; a service
/// that needs a deeper probe registers its own handler instead.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
