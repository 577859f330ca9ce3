//! In-memory doubles for the reseller API and the payment processor.

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use relay_web_apis::models::RegistrantProfile;
use relay_web_apis::services::reseller::{
    CustomerData, DomainRegistrationRequest, EmailHostingRequest, RegistrationStatus,
};
use relay_web_apis::services::stripe_client::{
    ChargeOutcome, ChargeRequest, ChargeStatus, PaymentError, PaymentProcessor,
};
use relay_web_apis::services::{ResellerApi, ResellerError, ResellerResponse};

/// One recorded call to the reseller
#[derive(Debug, Clone)]
pub enum ResellerCall {
    Availability { domain_names: Vec<String>, currency: String },
    Customer(RegistrantProfile),
    Domain(DomainRegistrationRequest),
    EmailHosting(EmailHostingRequest),
}

/// Scripted answer for one reseller endpoint
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Respond(ResellerResponse<T>),
    /// Simulates a transport or parse failure
    Fail,
}

impl<T: Clone> Reply<T> {
    fn resolve(&self) -> Result<ResellerResponse<T>, ResellerError> {
        match self {
            Reply::Respond(response) => Ok(response.clone()),
            Reply::Fail => Err(ResellerError::InvalidResponse),
        }
    }
}

pub fn registered(status_id: i64) -> Reply<RegistrationStatus> {
    Reply::Respond(ResellerResponse::success(
        RegistrationStatus::with_status_id(status_id),
    ))
}

pub fn rejected<T>(message: &str) -> Reply<T> {
    Reply::Respond(ResellerResponse::failure(message))
}

/// Reseller double that answers from a script and records every call.
pub struct MockReseller {
    availability: Option<Vec<serde_json::Value>>,
    customer: Reply<CustomerData>,
    domain: Reply<RegistrationStatus>,
    hosting: Reply<RegistrationStatus>,
    next_customer_id: Option<AtomicI64>,
    calls: Mutex<Vec<ResellerCall>>,
}

impl MockReseller {
    /// Every call succeeds: customer 1001, domain and hosting active.
    pub fn new() -> Self {
        Self {
            availability: Some(Vec::new()),
            customer: Reply::Respond(ResellerResponse::success(CustomerData { id: Some(1001) })),
            domain: registered(1),
            hosting: registered(1),
            next_customer_id: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_availability(mut self, entries: Vec<serde_json::Value>) -> Self {
        self.availability = Some(entries);
        self
    }

    pub fn failing_availability(mut self) -> Self {
        self.availability = None;
        self
    }

    pub fn with_customer(mut self, reply: Reply<CustomerData>) -> Self {
        self.customer = reply;
        self
    }

    pub fn with_customer_id(self, id: i64) -> Self {
        self.with_customer(Reply::Respond(ResellerResponse::success(CustomerData {
            id: Some(id),
        })))
    }

    /// Each customer registration gets the next id, starting at `first`.
    pub fn with_sequential_customer_ids(mut self, first: i64) -> Self {
        self.next_customer_id = Some(AtomicI64::new(first));
        self
    }

    pub fn with_domain(mut self, reply: Reply<RegistrationStatus>) -> Self {
        self.domain = reply;
        self
    }

    pub fn with_hosting(mut self, reply: Reply<RegistrationStatus>) -> Self {
        self.hosting = reply;
        self
    }

    pub fn calls(&self) -> Vec<ResellerCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn domain_calls(&self) -> Vec<DomainRegistrationRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ResellerCall::Domain(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    pub fn hosting_calls(&self) -> Vec<EmailHostingRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ResellerCall::EmailHosting(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ResellerCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ResellerApi for MockReseller {
    async fn check_availability(
        &self,
        domain_names: &[String],
        currency: &str,
    ) -> Result<Vec<serde_json::Value>, ResellerError> {
        self.record(ResellerCall::Availability {
            domain_names: domain_names.to_vec(),
            currency: currency.to_string(),
        });
        self.availability
            .clone()
            .ok_or(ResellerError::InvalidResponse)
    }

    async fn register_customer(
        &self,
        profile: &RegistrantProfile,
    ) -> Result<ResellerResponse<CustomerData>, ResellerError> {
        self.record(ResellerCall::Customer(profile.clone()));
        if let Some(counter) = &self.next_customer_id {
            let id = counter.fetch_add(1, Ordering::SeqCst);
            // Yield so concurrent registrations interleave
            tokio::task::yield_now().await;
            return Ok(ResellerResponse::success(CustomerData { id: Some(id) }));
        }
        self.customer.resolve()
    }

    async fn register_domain(
        &self,
        request: &DomainRegistrationRequest,
    ) -> Result<ResellerResponse<RegistrationStatus>, ResellerError> {
        self.record(ResellerCall::Domain(request.clone()));
        tokio::task::yield_now().await;
        self.domain.resolve()
    }

    async fn register_email_hosting(
        &self,
        request: &EmailHostingRequest,
    ) -> Result<ResellerResponse<RegistrationStatus>, ResellerError> {
        self.record(ResellerCall::EmailHosting(request.clone()));
        self.hosting.resolve()
    }
}

/// Payment processor double that answers from a script and records charges.
pub struct MockProcessor {
    outcome: Result<ChargeOutcome, PaymentError>,
    charges: Mutex<Vec<ChargeRequest>>,
}

impl MockProcessor {
    pub fn with_status(status: ChargeStatus) -> Self {
        let client_secret = match status {
            ChargeStatus::RequiresAction => Some("pi_test_123_secret_abc".to_string()),
            _ => None,
        };
        Self::with_outcome(Ok(ChargeOutcome {
            transaction_id: "pi_test_123".to_string(),
            status,
            client_secret,
        }))
    }

    pub fn with_outcome(outcome: Result<ChargeOutcome, PaymentError>) -> Self {
        Self {
            outcome,
            charges: Mutex::new(Vec::new()),
        }
    }

    pub fn charges(&self) -> Vec<ChargeRequest> {
        self.charges.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentProcessor for MockProcessor {
    async fn create_charge(&self, charge: ChargeRequest) -> Result<ChargeOutcome, PaymentError> {
        self.charges.lock().unwrap().push(charge);
        self.outcome.clone()
    }
}

pub fn reseller_data(mock: &Arc<MockReseller>) -> web::Data<dyn ResellerApi> {
    let reseller: Arc<dyn ResellerApi> = mock.clone();
    web::Data::from(reseller)
}

pub fn processor_data(mock: &Arc<MockProcessor>) -> web::Data<dyn PaymentProcessor> {
    let processor: Arc<dyn PaymentProcessor> = mock.clone();
    web::Data::from(processor)
}
