//! HTTP handlers for the relay-web-apis application.
//!
//! This module contains all the route handlers:
//! - `domains` - Domain availability and registration handlers
//! - `health` - Health check endpoint
//! - `payment` - Card payment handler

pub mod domains;
pub mod health;
pub mod payment;

// Re-export commonly used types
pub use domains::{
    domain_availability, register_domain, AvailabilityQuery, AvailabilityResponse,
    RegisterDomainRequest,
};
pub use health::{health_check, HealthResponse};
pub use payment::{create_payment_intent, CreatePaymentRequest, PaymentIntentResponse};
