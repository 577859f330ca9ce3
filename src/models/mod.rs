//! Data models for the relay-web-apis application.
//!
//! - [`RegistrantProfile`] - Customer record sent to the reseller
//! - [`EmailPlanTier`] - Hosted-email plan requested with a domain
//! - [`domain`] - Supported suffixes and domain name helpers

pub mod domain;
pub mod email_plan;
pub mod registrant;

pub use email_plan::EmailPlanTier;
pub use registrant::{ApplicantAddress, RegistrantProfile, UserDetails};
