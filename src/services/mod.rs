//! Services module - business logic and external service integrations.
//!
//! This module contains:
//! - `signer`: Request id and signature generation for reseller calls
//! - `reseller`: Domain reseller API client
//! - `registration`: Customer, domain and email-hosting registration flow
//! - `stripe_client`: Stripe payment processing

pub mod registration;
pub mod reseller;
pub mod signer;
pub mod stripe_client;

// Re-export commonly used types for convenience
pub use registration::{
    CustomerId, CustomerRegistrationError, DomainRegistrationOutcome, RegistrationError,
    RegistrationFailureKind, RegistrationReceipt,
};
pub use reseller::{ResellerApi, ResellerClient, ResellerError, ResellerResponse};
pub use signer::SignedRequest;
pub use stripe_client::{PaymentError, PaymentProcessor, StripeClientService};
