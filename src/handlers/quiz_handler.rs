use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{AuthMiddleware, AuthenticatedUser},
    errors::AppError,
    models::dto::request::SubmitQuizRequest,
};

#[get("/api/quiz/topics")]
pub async fn get_topics(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.quiz_service.topics())
}

#[get("/api/quiz/questions/{topic}", wrap = "AuthMiddleware")]
pub async fn get_questions_by_topic(
    state: web::Data<AppState>,
    topic: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let questions = state.quiz_service.questions_for_topic(&topic).await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[post("/api/quiz/submit", wrap = "AuthMiddleware")]
pub async fn submit_quiz(
    state: web::Data<AppState>,
    request: web::Json<SubmitQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let result = state.quiz_service.submit(&auth.0, request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[get("/api/quiz/progress", wrap = "AuthMiddleware")]
pub async fn get_progress(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let progress = state.quiz_service.progress(&auth.0).await?;
    Ok(HttpResponse::Ok().json(progress))
}
