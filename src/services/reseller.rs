//! Domain reseller API client.
//!
//! This module provides a client for the reseller API used to check domain
//! availability, create customers, register domains and provision hosted
//! email. Every call is signed with a fresh [`SignedRequest`].

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::models::RegistrantProfile;
use crate::services::signer::{
    SignedRequest, REQUEST_ID_HEADER, RESELLER_ID_HEADER, SIGNATURE_HEADER,
};

const AVAILABILITY_PATH: &str = "/domains/availability";
const CUSTOMERS_PATH: &str = "/customers";
const DOMAINS_PATH: &str = "/domains";
const EMAIL_HOSTINGS_PATH: &str = "/products/email-hostings";

/// Currency used for availability pricing
pub const PRICING_CURRENCY: &str = "GBP";

/// Registration period, in months, for domains and email hosting
pub const REGISTRATION_PERIOD_MONTHS: u32 = 12;

/// Reseller status id for an active registration
pub const STATUS_ACTIVE: i64 = 1;

/// Reseller status id for a pending registration
pub const STATUS_PENDING: i64 = 2;

#[derive(Debug, Error)]
pub enum ResellerError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid response from reseller API")]
    InvalidResponse,
}

/// Envelope wrapping every reseller API response.
///
/// Rejections may carry `data` of any shape; it becomes `None` so that
/// `error_message` still reaches the caller.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct ResellerResponse<T> {
    #[serde(default)]
    pub status: bool,
    #[serde(default, deserialize_with = "lenient_data")]
    pub data: Option<T>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl<T> ResellerResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: true,
            data: Some(data),
            error_message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: false,
            data: None,
            error_message: Some(message.into()),
        }
    }
}

/// `data` of a successful customer registration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerData {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<i64>,
}

/// `data` of a domain or email-hosting registration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationStatus {
    #[serde(default, deserialize_with = "lenient_id")]
    pub status_id: Option<i64>,
}

impl RegistrationStatus {
    pub fn with_status_id(status_id: i64) -> Self {
        Self {
            status_id: Some(status_id),
        }
    }

    /// Active and pending both count as a successful registration.
    pub fn is_active_or_pending(&self) -> bool {
        matches!(self.status_id, Some(STATUS_ACTIVE) | Some(STATUS_PENDING))
    }
}

impl ResellerResponse<RegistrationStatus> {
    /// True when the envelope reports success and the registration is
    /// active or pending.
    pub fn is_registered(&self) -> bool {
        self.status
            && self
                .data
                .as_ref()
                .is_some_and(RegistrationStatus::is_active_or_pending)
    }
}

/// Parses `data` as `T`, or `None` when it has some other shape.
fn lenient_data<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(Option::<serde_json::Value>::deserialize(deserializer)?
        .and_then(|value| serde_json::from_value(value).ok()))
}

/// Accepts ids sent as integers, whole-number floats or numeric strings.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::Number(n)) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

// Request types

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainRegistrationRequest {
    pub domain_name: String,
    pub customer_id: i64,
    pub period: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailHostingRequest {
    pub domain_name: String,
    pub plan_id: u32,
    pub customer_id: i64,
    pub period: u32,
}

/// Query pairs for one availability lookup: a `domain_names[]` term per
/// candidate followed by the pricing currency.
pub fn availability_query(domain_names: &[String], currency: &str) -> Vec<(&'static str, String)> {
    domain_names
        .iter()
        .map(|name| ("domain_names[]", name.clone()))
        .chain(std::iter::once(("currency", currency.to_string())))
        .collect()
}

/// Operations the relay needs from the domain reseller.
#[async_trait]
pub trait ResellerApi: Send + Sync {
    /// Looks up availability for every candidate name in a single call and
    /// returns the per-domain entries as-is. An unexpected response shape
    /// yields an empty list.
    async fn check_availability(
        &self,
        domain_names: &[String],
        currency: &str,
    ) -> Result<Vec<serde_json::Value>, ResellerError>;

    async fn register_customer(
        &self,
        profile: &RegistrantProfile,
    ) -> Result<ResellerResponse<CustomerData>, ResellerError>;

    async fn register_domain(
        &self,
        request: &DomainRegistrationRequest,
    ) -> Result<ResellerResponse<RegistrationStatus>, ResellerError>;

    async fn register_email_hosting(
        &self,
        request: &EmailHostingRequest,
    ) -> Result<ResellerResponse<RegistrationStatus>, ResellerError>;
}

/// Reseller API client
#[derive(Clone)]
pub struct ResellerClient {
    client: Client,
    base_url: String,
    api_key: String,
    reseller_id: String,
}

impl ResellerClient {
    /// Create a new reseller API client
    pub fn new(client: Client, base_url: String, api_key: String, reseller_id: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            reseller_id,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach a freshly generated signature to an outbound request
    fn signed(&self, builder: RequestBuilder) -> RequestBuilder {
        let signed = SignedRequest::generate(&self.api_key);
        builder
            .header(REQUEST_ID_HEADER, signed.request_id)
            .header(SIGNATURE_HEADER, signed.signature)
            .header(RESELLER_ID_HEADER, &self.reseller_id)
            .header(ACCEPT, "application/json")
    }

    /// Send a signed request and parse the JSON body.
    ///
    /// The reseller reports logical failures inside the envelope, so the
    /// body is parsed whatever the HTTP status.
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ResellerError> {
        let response = self.signed(builder).send().await?;
        tracing::debug!("Reseller API responded with HTTP {}", response.status());

        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse reseller response: {}", e);
            ResellerError::InvalidResponse
        })
    }

    /// Make a signed POST request to the reseller API
    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ResellerError> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }
}

#[async_trait]
impl ResellerApi for ResellerClient {
    async fn check_availability(
        &self,
        domain_names: &[String],
        currency: &str,
    ) -> Result<Vec<serde_json::Value>, ResellerError> {
        let query = availability_query(domain_names, currency);
        let body: serde_json::Value = self
            .send(self.client.get(self.url(AVAILABILITY_PATH)).query(&query))
            .await?;

        Ok(match body.get("data") {
            Some(serde_json::Value::Array(entries)) => entries.clone(),
            _ => {
                tracing::warn!("Unexpected availability response shape, returning no entries");
                Vec::new()
            }
        })
    }

    async fn register_customer(
        &self,
        profile: &RegistrantProfile,
    ) -> Result<ResellerResponse<CustomerData>, ResellerError> {
        self.post(CUSTOMERS_PATH, profile).await
    }

    async fn register_domain(
        &self,
        request: &DomainRegistrationRequest,
    ) -> Result<ResellerResponse<RegistrationStatus>, ResellerError> {
        tracing::info!("Registering domain: {}", request.domain_name);
        self.post(DOMAINS_PATH, request).await
    }

    async fn register_email_hosting(
        &self,
        request: &EmailHostingRequest,
    ) -> Result<ResellerResponse<RegistrationStatus>, ResellerError> {
        tracing::info!(
            "Registering email hosting plan {} for {}",
            request.plan_id,
            request.domain_name
        );
        self.post(EMAIL_HOSTINGS_PATH, request).await
    }
}
