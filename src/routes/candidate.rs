use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use validator::Validate;

use crate::dto::candidate_dto::CandidateForm;
use crate::dto::file_dto::FileDto;
use crate::error::{Error, Result};
use crate::models::candidate::Candidate;
use crate::AppState;

async fn read_candidate_form(multipart: &mut Multipart) -> Result<(CandidateForm, FileDto)> {
    let mut form = CandidateForm::default();
    let mut file = FileDto::default();

    while let Some(field) = multipart.next_field().await.map_err(Error::Multipart)? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "name" => form.name = field.text().await.map_err(Error::Multipart)?,
            "description" => form.description = field.text().await.map_err(Error::Multipart)?,
            "city_id" => {
                let raw = field.text().await.map_err(Error::Multipart)?;
                form.city_id = raw
                    .parse()
                    .map_err(|_| Error::BadRequest(format!("invalid city_id: {}", raw)))?;
            }
            "file" => {
                file.name = field.file_name().unwrap_or_default().to_string();
                file.content = field.bytes().await.map_err(Error::Multipart)?.to_vec();
            }
            _ => {}
        }
    }

    form.validate()?;
    Ok((form, file))
}

#[axum::debug_handler]
pub async fn list_candidates(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let candidates = state.candidate_service.find_all().await?;
    Ok(Json(candidates))
}

#[axum::debug_handler]
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let candidate = state
        .candidate_service
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("candidate {} not found", id)))?;
    Ok(Json(candidate))
}

#[axum::debug_handler]
pub async fn create_candidate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let (form, file) = read_candidate_form(&mut multipart).await?;
    let candidate = Candidate {
        id: 0,
        name: form.name,
        description: form.description,
        creation_date: Utc::now(),
        city_id: form.city_id,
        file_id: 0,
    };

    let saved = state.candidate_service.save(candidate, file).await?;
    tracing::info!(id = saved.id, "candidate created");
    Ok((StatusCode::CREATED, Json(saved)))
}

#[axum::debug_handler]
pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let existing = state
        .candidate_service
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("candidate {} not found", id)))?;

    let (form, file) = read_candidate_form(&mut multipart).await?;
    let candidate = Candidate {
        id,
        name: form.name,
        description: form.description,
        creation_date: existing.creation_date,
        city_id: form.city_id,
        file_id: existing.file_id,
    };

    if !state.candidate_service.update(candidate, file).await? {
        return Err(Error::NotFound(format!("candidate {} not found", id)));
    }
    let current = state
        .candidate_service
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("candidate {} not found", id)))?;
    Ok(Json(current))
}

#[axum::debug_handler]
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    if state.candidate_service.find_by_id(id).await?.is_none() {
        return Err(Error::NotFound(format!("candidate {} not found", id)));
    }
    state.candidate_service.delete_by_id(id).await?;
    tracing::info!(id, "candidate deleted");
    Ok(StatusCode::NO_CONTENT)
}
