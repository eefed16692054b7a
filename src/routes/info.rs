use actix_web::{web, HttpResponse, Responder};
use std::collections::BTreeMap;

use crate::models::{HealthResponse, IndexResponse};

pub const SERVICE_NAME: &str = "Solid Calculator API";

/// Endpoints advertised by the index route
pub const ENDPOINTS: [(&str, &str); 4] = [
    ("/api/calculate", "POST - Perform basic calculations"),
    ("/api/special", "POST - Perform special operations"),
    ("/api/evaluate", "POST - Evaluate an arithmetic expression"),
    ("/api/health", "GET - Service health check"),
];

/// Configure informational routes under `/api`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Service description
pub async fn index() -> impl Responder {
    let endpoints: BTreeMap<String, String> = ENDPOINTS
        .iter()
        .map(|(path, description)| (path.to_string(), description.to_string()))
        .collect();

    HttpResponse::Ok().json(IndexResponse {
        message: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        message: "Calculator API is running".to_string(),
    })
}
