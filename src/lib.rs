//! relay-web-apis - Payment and domain-reseller relay API
//!
//! This crate relays storefront requests to Stripe for card payments and to a
//! domain reseller for availability checks and domain registration.
//!
//! # Modules
//!
//! - [`config`] - Application configuration from environment variables
//! - [`error`] - Unified error handling
//! - [`models`] - Registrant profile, email plans and domain helpers
//! - [`services`] - Reseller client, request signing, registration flow, Stripe
//! - [`handlers`] - HTTP route handlers
//! - [`middleware`] - Rate limiting middleware
//!
//! # Quick Start
//!
//! ```ignore
//! use relay_web_apis::{Config, ResellerClient, StripeClientService};
//! use relay_web_apis::handlers::{create_payment_intent, domain_availability, register_domain};
//! use relay_web_apis::middleware::create_rate_limiter;
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

// Re-export commonly used types at the crate root
pub use config::{Config, ConfigError};
pub use error::{AppError, AppResult};
pub use models::{EmailPlanTier, RegistrantProfile, UserDetails};
pub use services::{
    CustomerId, DomainRegistrationOutcome, PaymentProcessor, RegistrationReceipt, ResellerApi,
    ResellerClient, SignedRequest, StripeClientService,
};
