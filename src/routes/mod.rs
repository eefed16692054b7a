// Route exports
pub mod calculator;
pub mod info;

use actix_web::web;

use crate::error::{handle_expression_payload_error, handle_json_payload_error};

pub use calculator::AppState;

/// Largest request body accepted, in bytes
pub const JSON_BODY_LIMIT: usize = 16 * 1024;

/// JSON extractor settings shared by every route unless overridden
///
/// Bodies are parsed as JSON whatever their `Content-Type`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .content_type_required(false)
        .error_handler(handle_json_payload_error)
}

/// JSON extractor settings for `/api/evaluate`, whose body errors are
/// reported as invalid expressions
pub fn expression_json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .content_type_required(false)
        .error_handler(handle_expression_payload_error)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(info::index))
        .service(
            web::scope("/api")
                .configure(info::configure)
                .configure(calculator::configure),
        );
}
