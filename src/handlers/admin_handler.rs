use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::request::QuestionRequest};

// Mounted under the `/api/admin` scope, which carries the auth and admin gates.

#[get("/questions")]
pub async fn list_questions(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let questions = state.question_service.list_questions().await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[post("/questions")]
pub async fn create_question(
    state: web::Data<AppState>,
    request: web::Json<QuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let question = state
        .question_service
        .create_question(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(question))
}

#[put("/questions/{id}")]
pub async fn update_question(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<QuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let question = state
        .question_service
        .update_question(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(question))
}

#[delete("/questions/{id}")]
pub async fn delete_question(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = state.question_service.delete_question(&id).await?;
    Ok(HttpResponse::Ok().json(response))
}
