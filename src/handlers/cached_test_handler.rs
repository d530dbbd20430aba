use std::sync::Arc;

use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState, auth::AuthenticatedUser, errors::AppError,
    models::dto::response::CachedTestSummary,
};

#[get("/api/cached-tests")]
pub async fn list_cached_tests(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser, // Require authentication
) -> Result<HttpResponse, AppError> {
    let tests = state.question_set_service.list_cached_tests(&auth.0.sub).await;

    let summaries: Vec<CachedTestSummary> = tests.iter().map(CachedTestSummary::from).collect();
    Ok(HttpResponse::Ok().json(summaries))
}

#[get("/api/cached-tests/{id}")]
pub async fn get_cached_test(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    auth: AuthenticatedUser, // Require authentication
) -> Result<HttpResponse, AppError> {
    let test = state
        .question_set_service
        .get_cached_test(&auth.0.sub, &id)
        .await?;

    Ok(HttpResponse::Ok().json(test))
}

#[actix_web::delete("/api/cached-tests/{id}")]
pub async fn delete_cached_test(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    auth: AuthenticatedUser, // Require authentication
) -> Result<HttpResponse, AppError> {
    state
        .question_set_service
        .delete_cached_test(&auth.0.sub, &id)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
