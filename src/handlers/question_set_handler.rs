use std::sync::Arc;

use actix_multipart::{Field, Multipart};
use actix_web::{get, post, web, HttpResponse};
use futures::TryStreamExt;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::{AppError, AppResult},
    models::domain::question_set::Difficulty,
    models::dto::request::{GenerationParams, PaginationParams},
    models::dto::response::{QuestionSetListResponse, QuestionSetSummary},
    services::UploadedDocument,
};

#[post("/api/question-sets")]
pub async fn generate_question_set(
    state: web::Data<Arc<AppState>>,
    payload: Multipart,
    auth: AuthenticatedUser, // Require authentication
) -> Result<HttpResponse, AppError> {
    let (document, params) = read_generation_form(payload).await?;

    let set = state
        .question_set_service
        .generate_for_user(&auth.0.sub, document, params)
        .await?;

    Ok(HttpResponse::Created().json(set))
}

#[get("/api/question-sets")]
pub async fn list_question_sets(
    state: web::Data<Arc<AppState>>,
    query: web::Query<PaginationParams>,
    auth: AuthenticatedUser, // Require authentication
) -> Result<HttpResponse, AppError> {
    let pagination = query.into_inner();
    let (sets, total) = state
        .question_set_service
        .list_for_user(&auth.0.sub, &pagination)
        .await?;

    Ok(HttpResponse::Ok().json(QuestionSetListResponse {
        question_sets: sets.iter().map(QuestionSetSummary::from).collect(),
        total,
        offset: pagination.offset(),
        limit: pagination.limit(),
    }))
}

#[get("/api/question-sets/{id}")]
pub async fn get_question_set(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    auth: AuthenticatedUser, // Require authentication
) -> Result<HttpResponse, AppError> {
    let set = state
        .question_set_service
        .get_for_user(&auth.0.sub, &id)
        .await?;

    Ok(HttpResponse::Ok().json(set))
}

/// Pulls the uploaded document and generation parameters out of the
/// multipart form. Unrecognized fields are drained and ignored; any
/// parameter not present keeps its default.
async fn read_generation_form(
    mut payload: Multipart,
) -> AppResult<(UploadedDocument, GenerationParams)> {
    let mut document: Option<UploadedDocument> = None;
    let mut params = GenerationParams::default();

    while let Some(mut field) = payload.try_next().await? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "file" => {
                let file_name = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .unwrap_or("document.pdf")
                    .to_string();

                let mut bytes = Vec::new();
                while let Some(chunk) = field.try_next().await? {
                    bytes.extend_from_slice(&chunk);
                }
                if bytes.is_empty() {
                    return Err(AppError::ValidationError(
                        "Uploaded file is empty".to_string(),
                    ));
                }

                document = Some(UploadedDocument {
                    name: file_name,
                    bytes,
                });
            }
            "num_mcqs" => params.num_mcqs = read_count_field(&mut field, "num_mcqs").await?,
            "num_short" => params.num_short = read_count_field(&mut field, "num_short").await?,
            "num_medium" => params.num_medium = read_count_field(&mut field, "num_medium").await?,
            "num_long" => params.num_long = read_count_field(&mut field, "num_long").await?,
            "subject" => params.subject = read_text_field(&mut field).await?,
            "difficulty" => {
                let label = read_text_field(&mut field).await?;
                params.difficulty = Difficulty::parse_label(&label)?;
            }
            _ => {
                // Drain so the stream can advance to the next field.
                while field.try_next().await?.is_some() {}
            }
        }
    }

    let document = document
        .ok_or_else(|| AppError::ValidationError("A 'file' field is required".to_string()))?;

    Ok((document, params))
}

async fn read_text_field(field: &mut Field) -> AppResult<String> {
    let mut data = Vec::new();
    while let Some(chunk) = field.try_next().await? {
        data.extend_from_slice(&chunk);
    }
    String::from_utf8(data)
        .map_err(|_| AppError::ValidationError("Form field is not valid UTF-8".to_string()))
}

async fn read_count_field(field: &mut Field, name: &str) -> AppResult<u32> {
    let text = read_text_field(field).await?;
    text.trim()
        .parse()
        .map_err(|_| AppError::ValidationError(format!("Invalid value for '{}': {}", name, text)))
}
