use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::SubmitExamRequest,
    models::dto::response::ExamResultResponse,
};

#[post("/api/question-sets/{id}/submit")]
pub async fn submit_exam(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    request: web::Json<SubmitExamRequest>,
    auth: AuthenticatedUser, // Require authentication
) -> Result<HttpResponse, AppError> {
    let result = state
        .exam_service
        .submit_exam(&auth.0.sub, &id, request.into_inner().answers)
        .await?;

    Ok(HttpResponse::Created().json(ExamResultResponse::from(&result)))
}

#[get("/api/question-sets/{id}/result")]
pub async fn get_exam_result(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    auth: AuthenticatedUser, // Require authentication
) -> Result<HttpResponse, AppError> {
    let review = state
        .exam_service
        .latest_result_review(&auth.0.sub, &id)
        .await?;

    Ok(HttpResponse::Ok().json(review))
}
