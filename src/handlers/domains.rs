//! Domain handlers backed by the reseller API.
//!
//! This module provides the following endpoints:
//! - `GET /domain-availability` - Check a name across the supported suffixes
//! - `POST /register-domain` - Register customer, domain and email hosting

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::domain::{base_label, candidate_domains};
use crate::models::{EmailPlanTier, UserDetails};
use crate::services::registration::register_domain_for_applicant;
use crate::services::reseller::{ResellerApi, PRICING_CURRENCY};

const DOMAIN_REQUIRED: &str = "Domain name is required";

/// Query parameters for `/domain-availability`
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub domain: Option<String>,
}

/// Response for availability checks
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub data: Vec<serde_json::Value>,
}

/// Request body for `/register-domain`
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterDomainRequest {
    pub domain: Option<String>,
    pub email_plan: Option<String>,
    pub user_details: Option<UserDetails>,
}

/// Check availability of a name across every supported suffix
///
/// GET /domain-availability?domain=example
pub async fn domain_availability(
    reseller: web::Data<dyn ResellerApi>,
    query: web::Query<AvailabilityQuery>,
) -> AppResult<HttpResponse> {
    let label = query
        .domain
        .as_deref()
        .and_then(base_label)
        .ok_or_else(|| AppError::BadRequest(DOMAIN_REQUIRED.to_string()))?;

    let names = candidate_domains(&label);
    let data = reseller
        .check_availability(&names, PRICING_CURRENCY)
        .await
        .map_err(|e| {
            tracing::error!("Availability lookup for {} failed: {}", label, e);
            AppError::Upstream("Failed to fetch domain availability".to_string())
        })?;

    Ok(HttpResponse::Ok().json(AvailabilityResponse { data }))
}

/// Register a customer, then the domain, then the requested email plan
///
/// POST /register-domain
pub async fn register_domain(
    reseller: web::Data<dyn ResellerApi>,
    req: web::Json<RegisterDomainRequest>,
) -> AppResult<HttpResponse> {
    let req = req.into_inner();

    let domain = req
        .domain
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::BadRequest(DOMAIN_REQUIRED.to_string()))?;
    let plan = req
        .email_plan
        .as_deref()
        .map(EmailPlanTier::from_name)
        .unwrap_or_default();
    let details = req.user_details.unwrap_or_default();

    let receipt =
        register_domain_for_applicant(reseller.get_ref(), domain, plan, &details).await?;

    Ok(HttpResponse::Ok().json(receipt))
}
