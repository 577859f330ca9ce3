//! Health check endpoint for load balancers and uptime probes.

use actix_web::{HttpResponse, Responder};
use serde::Serialize;

/// Health check response structure.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint. Does not touch the reseller or Stripe.
///
/// GET /health -> `{"status": "healthy"}`
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "healthy" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().route("/health", web::get().to(health_check))).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, serde_json::json!({"status": "healthy"}));
    }
}
