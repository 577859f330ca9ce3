//! Card payment handler.
//!
//! `POST /create-payment-intent` charges the submitted payment method for the
//! order total and tells the storefront whether the card needs an extra
//! authentication step.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::services::stripe_client::{ChargeRequest, ChargeStatus, PaymentProcessor};

/// Request to create and confirm a payment
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    /// Order total in pounds
    pub total_price: f64,
    /// Stripe payment method id (e.g., "pm_...")
    pub payment_method_id: String,
}

/// Response for payment creation
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PaymentIntentResponse {
    /// The card needs further customer action; the storefront finishes it
    /// with the client secret
    RequiresAction {
        #[serde(rename = "clientSecret")]
        client_secret: String,
        #[serde(rename = "transactionId")]
        transaction_id: String,
    },
    Succeeded {
        payment_succeed: bool,
        #[serde(rename = "transactionId")]
        transaction_id: String,
    },
    Failed {
        error: String,
    },
}

/// Converts an amount in pounds to pence.
pub fn to_minor_units(total_price: f64) -> AppResult<i64> {
    if !total_price.is_finite() || total_price <= 0.0 {
        return Err(AppError::BadRequest(
            "totalPrice must be a positive amount".to_string(),
        ));
    }
    Ok((total_price * 100.0).round() as i64)
}

/// Create and confirm a payment for the order total
///
/// POST /create-payment-intent
pub async fn create_payment_intent(
    processor: web::Data<dyn PaymentProcessor>,
    req: web::Json<CreatePaymentRequest>,
) -> AppResult<HttpResponse> {
    let req = req.into_inner();

    let amount_minor = to_minor_units(req.total_price)?;
    if req.payment_method_id.trim().is_empty() {
        return Err(AppError::BadRequest(
            "paymentMethodId is required".to_string(),
        ));
    }

    let outcome = processor
        .create_charge(ChargeRequest {
            amount_minor,
            payment_method_id: req.payment_method_id,
        })
        .await
        .map_err(|e| {
            tracing::error!("Payment failed: {}", e);
            AppError::Payment(e)
        })?;

    let response = match outcome.status {
        ChargeStatus::RequiresAction => {
            let client_secret = outcome.client_secret.ok_or_else(|| {
                AppError::Internal("No client secret for payment requiring action".to_string())
            })?;
            PaymentIntentResponse::RequiresAction {
                client_secret,
                transaction_id: outcome.transaction_id,
            }
        }
        ChargeStatus::Succeeded => PaymentIntentResponse::Succeeded {
            payment_succeed: true,
            transaction_id: outcome.transaction_id,
        },
        ChargeStatus::Other(status) => {
            tracing::warn!(
                "Payment {} ended in status {}",
                outcome.transaction_id,
                status
            );
            PaymentIntentResponse::Failed {
                error: "Payment intent failed.".to_string(),
            }
        }
    };

    Ok(HttpResponse::Ok().json(response))
}
