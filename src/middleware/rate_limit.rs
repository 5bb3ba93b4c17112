//! Rate limiting middleware

use axum::{
    body::Body,
    extract::{ConnectInfo, Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;

use crate::{error::AppError, state::AppState};

/// Rate limit middleware
///
/// Counts requests per client address in the in-memory limiter and rejects
/// the request with 429 once the window is used up.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let key = client_key(&request);
    let decision = state.rate_limiter().check(&key);

    if !decision.allowed {
        tracing::debug!(client = %key, "Rate limit exceeded");
        return Err(AppError::TooManyRequests {
            retry_after_secs: decision.reset_after.as_secs().max(1),
        });
    }

    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert("x-ratelimit-limit", HeaderValue::from(decision.limit));
    headers.insert("x-ratelimit-remaining", HeaderValue::from(decision.remaining));
    headers.insert(
        "x-ratelimit-reset",
        HeaderValue::from(decision.reset_after.as_secs()),
    );

    Ok(response)
}

/// Peer address when served with connect info, else the first forwarded hop
fn client_key(request: &Request<Body>) -> String {
    if let Some(ConnectInfo(addr)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
        return addr.ip().to_string();
    }

    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{http::StatusCode, middleware, routing::get, Router};
    use tower::ServiceExt;

    use super::*;
    use crate::{
        config::{
            CompetitionConfig, Config, DatabaseConfig, LogFormat, RateLimitConfig, ServerConfig,
        },
        db::MockCompetitionBackend,
    };

    fn app(max_requests: u32) -> Router {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "info".to_string(),
                log_format: LogFormat::Pretty,
            },
            database: DatabaseConfig {
                url: "postgres://localhost/test".to_string(),
                max_connections: 1,
            },
            competition: CompetitionConfig::default(),
            rate_limit: RateLimitConfig {
                max_requests,
                window_secs: 60,
                cleanup_threshold: 100,
            },
        };
        let state = AppState::new(Arc::new(MockCompetitionBackend::new()), config);

        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                rate_limit_middleware,
            ))
            .with_state(state)
    }

    fn request_from(ip: &str) -> Request<Body> {
        axum::http::Request::builder()
            .uri("/ping")
            .header("x-forwarded-for", ip)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_limits_per_client() {
        let app = app(1);

        let first = app.clone().oneshot(request_from("10.0.0.1")).await.unwrap();
        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(first.headers().get("x-ratelimit-remaining").unwrap(), "0");

        let second = app.clone().oneshot(request_from("10.0.0.1")).await.unwrap();
        assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(second.headers().contains_key("retry-after"));

        let other = app.oneshot(request_from("10.0.0.2, 172.16.0.1")).await.unwrap();
        assert_eq!(other.status(), StatusCode::OK);
    }

    #[test]
    fn test_client_key_fallback() {
        let request = axum::http::Request::builder().uri("/").body(Body::empty()).unwrap();
        assert_eq!(client_key(&request), "unknown");
    }
}
