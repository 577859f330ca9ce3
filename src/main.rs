//! relay-web-apis - Main application entry point
//!
//! Serves the storefront's payment, domain availability and domain
//! registration endpoints.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use relay_web_apis::config::Config;
use relay_web_apis::error::{json_error_handler, query_error_handler};
use relay_web_apis::handlers::{
    create_payment_intent, domain_availability, health_check, register_domain,
};
use relay_web_apis::middleware::create_rate_limiter;
use relay_web_apis::services::{
    PaymentProcessor, ResellerApi, ResellerClient, StripeClientService,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing subscriber for structured logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relay_web_apis=info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Loading configuration...");

    // Load configuration from environment variables
    let config = Config::from_env().expect("Failed to load configuration");
    let server_addr = config.server_addr();

    // Create HTTP client for reseller API calls
    let http_client = reqwest::Client::builder()
        .user_agent("relay-web-apis")
        .build()
        .expect("Failed to create HTTP client");

    let reseller: Arc<dyn ResellerApi> = Arc::new(ResellerClient::new(
        http_client,
        config.reseller_api_base.clone(),
        config.reseller_api_key.clone(),
        config.reseller_id.clone(),
    ));
    let reseller = web::Data::from(reseller);
    tracing::info!("Reseller API client configured for {}", config.reseller_api_base);

    // Create Stripe client if secret key is configured
    let payment_processor = config.stripe_secret_key.as_ref().map(|key| {
        tracing::info!("Stripe payment client configured");
        let processor: Arc<dyn PaymentProcessor> = Arc::new(StripeClientService::new(key.clone()));
        web::Data::from(processor)
    });
    if payment_processor.is_none() {
        tracing::warn!("Stripe not configured - /create-payment-intent is disabled");
    }

    tracing::info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        // Create rate limiter for each worker (Governor doesn't implement Clone)
        let rate_limiter = create_rate_limiter();

        let mut app = App::new()
            .app_data(reseller.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            // Request logging
            .wrap(Logger::default())
            // Distributed tracing
            .wrap(tracing_actix_web::TracingLogger::default())
            // Rate limiting
            .wrap(rate_limiter)
            // Storefront is served from another origin
            .wrap(Cors::permissive())
            // Health check endpoint
            .route("/health", web::get().to(health_check))
            // Domain routes
            .route("/domain-availability", web::get().to(domain_availability))
            .route("/register-domain", web::post().to(register_domain));

        // Add payment route if Stripe is configured
        if let Some(ref processor) = payment_processor {
            app = app
                .app_data(processor.clone())
                .route("/create-payment-intent", web::post().to(create_payment_intent));
        }

        app
    })
    .bind(&server_addr)?
    .run()
    .await
}
