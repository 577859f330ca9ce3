//! Middleware for the relay-web-apis application.
//!
//! This module contains:
//! - `rate_limit` - Rate limiting middleware using Governor

pub mod rate_limit;

// Re-export commonly used types
pub use rate_limit::{create_rate_limiter, RateLimiter, RateLimiterConfig};
