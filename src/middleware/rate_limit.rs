//! Rate limiting middleware using actix-governor.
//!
//! Every endpoint either charges a card or calls the paid reseller API, so
//! each client IP gets its own token bucket.

use actix_governor::governor::middleware::NoOpMiddleware;
use actix_governor::{Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor};

/// Type alias for the rate limiter configuration.
pub type RateLimiterConfig = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Type alias for the rate limiter.
pub type RateLimiter = Governor<PeerIpKeyExtractor, NoOpMiddleware>;

/// Seconds between replenished requests for one IP
const SECONDS_PER_REQUEST: u64 = 2;

/// Requests one IP may make back to back
const BURST_SIZE: u32 = 30;

/// Builds the rate limiter configuration: one request every two seconds
/// per IP with bursts of up to 30.
pub fn rate_limiter_config() -> RateLimiterConfig {
    GovernorConfigBuilder::default()
        .seconds_per_request(SECONDS_PER_REQUEST)
        .burst_size(BURST_SIZE)
        .finish()
        .expect("rate limiter period and burst size are non-zero constants")
}

/// Creates the per-IP rate limiter middleware.
///
/// # Example
///
/// ```ignore
/// use relay_web_apis::middleware::create_rate_limiter;
///
/// HttpServer::new(move || {
///     App::new()
///         .wrap(create_rate_limiter())
///         .route("/domain-availability", web::get().to(domain_availability))
/// })
/// ```
pub fn create_rate_limiter() -> RateLimiter {
    Governor::new(&rate_limiter_config())
}
