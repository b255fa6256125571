use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use validator::Validate;

use crate::dto::file_dto::FileDto;
use crate::dto::vacancy_dto::VacancyForm;
use crate::error::{Error, Result};
use crate::models::vacancy::Vacancy;
use crate::AppState;

async fn read_vacancy_form(multipart: &mut Multipart) -> Result<(VacancyForm, FileDto)> {
    let mut form = VacancyForm::default();
    let mut file = FileDto::default();

    while let Some(field) = multipart.next_field().await.map_err(Error::Multipart)? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "title" => form.title = field.text().await.map_err(Error::Multipart)?,
            "description" => form.description = field.text().await.map_err(Error::Multipart)?,
            "visible" => {
                let raw = field.text().await.map_err(Error::Multipart)?;
                form.visible = matches!(raw.as_str(), "true" | "on" | "1");
            }
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
pub async fn list_vacancies(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let vacancies = state.vacancy_service.find_all().await?;
    Ok(Json(vacancies))
}

#[axum::debug_handler]
pub async fn get_vacancy(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let vacancy = state
        .vacancy_service
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("vacancy {} not found", id)))?;
    Ok(Json(vacancy))
}

#[axum::debug_handler]
pub async fn create_vacancy(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let (form, file) = read_vacancy_form(&mut multipart).await?;
    let vacancy = Vacancy {
        id: 0,
        title: form.title,
        description: form.description,
        creation_date: Utc::now(),
        visible: form.visible,
        city_id: form.city_id,
        file_id: 0,
    };

    let saved = state.vacancy_service.save(vacancy, file).await?;
    tracing::info!(id = saved.id, "vacancy created");
    Ok((StatusCode::CREATED, Json(saved)))
}

#[axum::debug_handler]
pub async fn update_vacancy(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let existing = state
        .vacancy_service
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("vacancy {} not found", id)))?;

    let (form, file) = read_vacancy_form(&mut multipart).await?;
    let vacancy = Vacancy {
        id,
        title: form.title,
        description: form.description,
        creation_date: existing.creation_date,
        visible: form.visible,
        city_id: form.city_id,
        file_id: existing.file_id,
    };

    if !state.vacancy_service.update(vacancy, file).await? {
        return Err(Error::NotFound(format!("vacancy {} not found", id)));
    }
    let current = state
        .vacancy_service
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("vacancy {} not found", id)))?;
    Ok(Json(current))
}

#[axum::debug_handler]
pub async fn delete_vacancy(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    if state.vacancy_service.find_by_id(id).await?.is_none() {
        return Err(Error::NotFound(format!("vacancy {} not found", id)));
    }
    state.vacancy_service.delete_by_id(id).await?;
    tracing::info!(id, "vacancy deleted");
    Ok(StatusCode::NO_CONTENT)
}
