//! Stripe API client service for card payments.
//!
//! This module provides the [`PaymentProcessor`] seam used by the payment
//! handler and its Stripe implementation built on the Stripe Rust SDK.

use async_trait::async_trait;
use stripe::{
    Client, CreatePaymentIntent, CreatePaymentIntentAutomaticPaymentMethods,
    CreatePaymentIntentAutomaticPaymentMethodsAllowRedirects, Currency, PaymentIntent,
    PaymentIntentStatus, PaymentMethodId,
};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum PaymentError {
    #[error("Invalid payment method: {0}")]
    InvalidPaymentMethod(String),

    #[error("{0}")]
    Processor(String),
}

/// A charge to confirm immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeRequest {
    /// Amount in minor units (pence)
    pub amount_minor: i64,
    pub payment_method_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChargeStatus {
    /// The customer must complete an extra step, such as 3-D Secure
    RequiresAction,
    Succeeded,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeOutcome {
    pub transaction_id: String,
    pub status: ChargeStatus,
    pub client_secret: Option<String>,
}

#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn create_charge(&self, charge: ChargeRequest) -> Result<ChargeOutcome, PaymentError>;
}

/// Stripe client service for managing payment operations
#[derive(Clone)]
pub struct StripeClientService {
    client: Client,
}

impl StripeClientService {
    /// Create a new Stripe client service with the provided API key
    pub fn new(api_key: String) -> Self {
        let client = Client::new(api_key);
        Self { client }
    }

    /// Get a reference to the underlying Stripe client
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl PaymentProcessor for StripeClientService {
    async fn create_charge(&self, charge: ChargeRequest) -> Result<ChargeOutcome, PaymentError> {
        let payment_method: PaymentMethodId = charge
            .payment_method_id
            .parse()
            .map_err(|_| PaymentError::InvalidPaymentMethod(charge.payment_method_id.clone()))?;

        let mut params = CreatePaymentIntent::new(charge.amount_minor, Currency::GBP);
        params.payment_method = Some(payment_method);
        params.confirm = Some(true);
        params.metadata = Some(
            vec![("country".to_string(), "GB".to_string())]
                .into_iter()
                .collect(),
        );
        // Cards only: no payment methods that leave the page
        params.automatic_payment_methods = Some(CreatePaymentIntentAutomaticPaymentMethods {
            enabled: true,
            allow_redirects: Some(CreatePaymentIntentAutomaticPaymentMethodsAllowRedirects::Never),
        });

        let intent = PaymentIntent::create(self.client(), params)
            .await
            .map_err(|e| PaymentError::Processor(e.to_string()))?;

        tracing::info!("Payment intent {} is {}", intent.id, intent.status.as_str());

        let status = match intent.status {
            PaymentIntentStatus::RequiresAction => ChargeStatus::RequiresAction,
            PaymentIntentStatus::Succeeded => ChargeStatus::Succeeded,
            other => ChargeStatus::Other(other.as_str().to_string()),
        };

        Ok(ChargeOutcome {
            transaction_id: intent.id.to_string(),
            status,
            client_secret: intent.client_secret,
        })
    }
}
