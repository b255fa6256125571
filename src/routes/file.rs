use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use crate::error::{Error, Result};
use crate::AppState;

#[axum::debug_handler]
pub async fn get_file(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let record = state
        .file_service
        .get_file_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("file {} not found", id)))?;

    Ok((
        [(header::CONTENT_TYPE, "application/octet-stream")],
        record.content,
    ))
}
