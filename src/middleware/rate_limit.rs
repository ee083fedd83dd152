//! Rate limiting middleware

use axum::{
    body::Body,
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use redis::AsyncCommands;
use std::net::SocketAddr;

use crate::{constants, state::AppState};

/// Rate limit middleware: fixed window per client IP and path bucket
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, impl IntoResponse> {
    let ip = addr.ip().to_string();
    let path = request.uri().path().to_string();

    let (limit, window) = get_rate_limit(&path);

    let key = format!("rate_limit:{}:{}", ip, path_bucket(&path));
    let mut redis = state.redis();

    let count: i64 = redis.incr(&key, 1).await.unwrap_or(0);

    if count == 1 {
        // Set expiry on first request
        let _: () = redis.expire(&key, window).await.unwrap_or(());
    }

    if count > limit {
        return Err((
            StatusCode::TOO_MANY_REQUESTS,
            format!("Rate limit exceeded. Try again in {} seconds.", window),
        ));
    }

    Ok(next.run(request).await)
}

/// Get rate limit for a path
fn get_rate_limit(path: &str) -> (i64, i64) {
    if path.starts_with("/api/auth") {
        (
            constants::rate_limits::AUTH_MAX_REQUESTS,
            constants::rate_limits::AUTH_WINDOW_SECS,
        )
    } else {
        (
            constants::rate_limits::GENERAL_MAX_REQUESTS,
            constants::rate_limits::GENERAL_WINDOW_SECS,
        )
    }
}

/// Get bucket for path (for grouping similar endpoints)
fn path_bucket(path: &str) -> &str {
    if path.starts_with("/api/auth") {
        "auth"
    } else if path.starts_with("/api/bookings") {
        "bookings"
    } else if path.starts_with("/api/payment") {
        "payment"
    } else {
        "general"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_paths_get_tight_limit() {
        let (limit, _) = get_rate_limit("/api/auth/login");
        assert_eq!(limit, constants::rate_limits::AUTH_MAX_REQUESTS);

        let (limit, _) = get_rate_limit("/api/facilities");
        assert_eq!(limit, constants::rate_limits::GENERAL_MAX_REQUESTS);
    }

    #[test]
    fn test_path_bucket() {
        assert_eq!(path_bucket("/api/auth/register"), "auth");
        assert_eq!(path_bucket("/api/bookings/search"), "bookings");
        assert_eq!(path_bucket("/api/payment/status/T1"), "payment");
        assert_eq!(path_bucket("/api/facilities/3"), "general");
    }
}
