pub mod auth_handler;
pub mod health_handler;
pub mod quiz_handler;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::{auth::AuthMiddleware, errors::AppError, middleware::get_request_id};

pub use health_handler::health_check;

/// Malformed JSON bodies come back in the same shape as every other error.
fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!(
        "[{}] Rejected JSON body on {}: {}",
        get_request_id(req).unwrap_or_default(),
        req.path(),
        err
    );
    AppError::ValidationError(err.to_string()).into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(health_check)
        .service(
            web::scope("/api/auth")
                .service(auth_handler::register)
                .service(auth_handler::login),
        )
        .service(
            web::scope("/api/quiz")
                .wrap(AuthMiddleware)
                .service(quiz_handler::catalog)
                .service(quiz_handler::generate_quiz)
                .service(quiz_handler::submit_quiz)
                .service(quiz_handler::get_history)
                .service(quiz_handler::get_quiz),
        );
}
