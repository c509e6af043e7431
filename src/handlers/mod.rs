pub mod admin_handler;
pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

use crate::{
    auth::{AdminMiddleware, AuthMiddleware},
    errors::AppError,
};

/// Registers every route and the extractor configs that turn malformed input
/// into `{message}` 400 responses.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    )
    .service(health_handler::health_check)
    .service(health_handler::health_check_ready)
    .service(quiz_handler::get_topics)
    .service(quiz_handler::get_questions_by_topic)
    .service(quiz_handler::submit_quiz)
    .service(quiz_handler::get_progress)
    .service(
        web::scope("/api/admin")
            .wrap(AdminMiddleware)
            .wrap(AuthMiddleware)
            .service(admin_handler::list_questions)
            .service(admin_handler::create_question)
            .service(admin_handler::update_question)
            .service(admin_handler::delete_question),
    );
}
