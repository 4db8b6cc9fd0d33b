use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{
        request::{GenerateQuizRequest, SubmitAnswersRequest},
        response::HistoryResponse,
    },
};

#[get("/catalog")]
pub async fn catalog(state: web::Data<Arc<AppState>>) -> HttpResponse {
    HttpResponse::Ok().json(state.quiz_service.catalog())
}

#[post("/generate")]
pub async fn generate_quiz(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerateQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .generate(auth.username(), &request)
        .await?;
    Ok(HttpResponse::Created().json(quiz))
}

#[get("")]
pub async fn get_quiz(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.active_quiz(auth.username()).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/submit")]
pub async fn submit_quiz(
    state: web::Data<Arc<AppState>>,
    request: web::Json<SubmitAnswersRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = state
        .quiz_service
        .submit(auth.username(), &request.raw_answers())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/history")]
pub async fn get_history(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let history = state.quiz_service.history(auth.username()).await?;
    Ok(HttpResponse::Ok().json(HistoryResponse { history }))
}
