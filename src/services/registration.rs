//! Customer, domain and email-hosting registration against the reseller.
//!
//! Registration is strictly sequential: a customer record is created first,
//! its id is then used to register the domain, and an email-hosting plan is
//! only provisioned once the domain is active or pending. The customer id is
//! returned from each step and passed to the next; nothing is shared between
//! requests.

use serde::Serialize;
use thiserror::Error;

use crate::models::{EmailPlanTier, RegistrantProfile, UserDetails};
use crate::services::reseller::{
    DomainRegistrationRequest, EmailHostingRequest, ResellerApi, ResellerError,
    REGISTRATION_PERIOD_MONTHS,
};

/// Identifier the reseller assigned to a newly registered customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CustomerId(pub i64);

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum CustomerRegistrationError {
    /// The reseller answered but refused to create the customer
    #[error("Failed to register customer: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),

    /// The reseller reported success without a customer id
    #[error("Failed to register customer: no customer id in response")]
    MissingCustomerId,

    #[error("Failed to register customer: {0}")]
    Upstream(#[from] ResellerError),
}

/// Which step of the domain pipeline failed, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationFailureKind {
    /// Domain call answered with a non-success status or status id
    DomainRejected,
    /// Domain call failed in transport or returned an unreadable body
    DomainRequestFailed,
    /// Hosting call succeeded but the plan is neither active nor pending
    HostingNotActive,
    /// Hosting call answered with a non-success status
    HostingRejected,
    /// Hosting call failed in transport or returned an unreadable body
    HostingRequestFailed,
}

/// A failed domain or email-hosting registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationError {
    pub kind: RegistrationFailureKind,
    pub upstream_message: Option<String>,
}

impl RegistrationError {
    pub fn new(kind: RegistrationFailureKind) -> Self {
        Self {
            kind,
            upstream_message: None,
        }
    }

    pub fn with_upstream(kind: RegistrationFailureKind, message: Option<String>) -> Self {
        Self {
            kind,
            upstream_message: message.filter(|m| !m.trim().is_empty()),
        }
    }

    /// True when the domain itself was registered and only hosting failed.
    pub fn domain_registered(&self) -> bool {
        matches!(
            self.kind,
            RegistrationFailureKind::HostingNotActive
                | RegistrationFailureKind::HostingRejected
                | RegistrationFailureKind::HostingRequestFailed
        )
    }
}

impl std::fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use RegistrationFailureKind::*;

        let summary = match self.kind {
            DomainRejected => "The reseller declined to register the domain and email hosting.",
            DomainRequestFailed => "Failed to register domain and email hosting.",
            HostingNotActive => {
                "Registration of domain succeeded but email hosting failed. \
                 Please confirm the information provided."
            }
            HostingRejected | HostingRequestFailed => {
                "Registration of domain succeeded but email hosting failed."
            }
        };

        match &self.upstream_message {
            Some(message) => write!(f, "{} {}", summary, message),
            None => f.write_str(summary),
        }
    }
}

impl std::error::Error for RegistrationError {}

/// Client-visible result of the domain and email-hosting steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainRegistrationOutcome {
    pub success: bool,
    pub error: String,
}

impl From<Result<(), RegistrationError>> for DomainRegistrationOutcome {
    fn from(result: Result<(), RegistrationError>) -> Self {
        match result {
            Ok(()) => Self {
                success: true,
                error: String::new(),
            },
            Err(e) => Self {
                success: false,
                error: e.to_string(),
            },
        }
    }
}

/// Response body of `/register-domain`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationReceipt {
    pub response: DomainRegistrationOutcome,
    pub customer_id: CustomerId,
}

/// Creates the customer record and returns the id the reseller assigned.
pub async fn register_customer(
    reseller: &dyn ResellerApi,
    profile: &RegistrantProfile,
) -> Result<CustomerId, CustomerRegistrationError> {
    let response = reseller.register_customer(profile).await.map_err(|e| {
        tracing::error!("Error registering customer: {}", e);
        CustomerRegistrationError::Upstream(e)
    })?;

    if !response.status {
        tracing::warn!(
            "Customer registration rejected: {}",
            response.error_message.as_deref().unwrap_or("no reason given")
        );
        return Err(CustomerRegistrationError::Rejected(response.error_message));
    }

    let customer_id = response
        .data
        .and_then(|data| data.id)
        .map(CustomerId)
        .ok_or(CustomerRegistrationError::MissingCustomerId)?;

    tracing::info!("Customer {} registered", customer_id);
    Ok(customer_id)
}

/// Registers `domain` for `customer_id` and, when `plan` carries a product
/// id, provisions the email-hosting plan for it.
pub async fn register_domain(
    reseller: &dyn ResellerApi,
    domain: &str,
    plan: EmailPlanTier,
    customer_id: CustomerId,
) -> Result<(), RegistrationError> {
    use RegistrationFailureKind::*;

    let request = DomainRegistrationRequest {
        domain_name: domain.to_string(),
        customer_id: customer_id.0,
        period: REGISTRATION_PERIOD_MONTHS,
    };

    let response = reseller.register_domain(&request).await.map_err(|e| {
        tracing::error!("Error registering domain {}: {}", domain, e);
        RegistrationError::new(DomainRequestFailed)
    })?;

    if !response.is_registered() {
        tracing::warn!("Domain {} was not registered", domain);
        return Err(RegistrationError::with_upstream(
            DomainRejected,
            response.error_message,
        ));
    }

    let Some(plan_id) = plan.plan_id() else {
        return Ok(());
    };

    let request = EmailHostingRequest {
        domain_name: domain.to_string(),
        plan_id,
        customer_id: customer_id.0,
        period: REGISTRATION_PERIOD_MONTHS,
    };

    let response = reseller.register_email_hosting(&request).await.map_err(|e| {
        tracing::error!("Error registering email hosting for {}: {}", domain, e);
        RegistrationError::new(HostingRequestFailed)
    })?;

    if !response.status {
        return Err(RegistrationError::with_upstream(
            HostingRejected,
            response.error_message,
        ));
    }
    if !response.is_registered() {
        return Err(RegistrationError::new(HostingNotActive));
    }

    tracing::info!("Domain {} registered with email plan {}", domain, plan_id);
    Ok(())
}

/// Runs the whole pipeline: customer, then domain, then email hosting.
///
/// Only a customer failure is returned as an error; domain and hosting
/// failures are reported inside the receipt.
pub async fn register_domain_for_applicant(
    reseller: &dyn ResellerApi,
    domain: &str,
    plan: EmailPlanTier,
    details: &UserDetails,
) -> Result<RegistrationReceipt, CustomerRegistrationError> {
    let profile = RegistrantProfile::from(details);
    let customer_id = register_customer(reseller, &profile).await?;

    let result = register_domain(reseller, domain, plan, customer_id).await;
    if let Err(e) = &result {
        tracing::warn!(
            "Registration of {} for customer {} failed: {:?}",
            domain,
            customer_id,
            e.kind
        );
    }

    Ok(RegistrationReceipt {
        response: result.into(),
        customer_id,
    })
}
