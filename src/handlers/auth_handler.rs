use std::sync::Arc;

use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{LoginRequest, RegisterRequest},
};

#[post("/register")]
pub async fn register(
    state: web::Data<Arc<AppState>>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.user_service.register(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[post("/login")]
pub async fn login(
    state: web::Data<Arc<AppState>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.user_service.login(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
