use axum::{extract::State, response::IntoResponse, Json};

use crate::error::Result;
use crate::AppState;

#[axum::debug_handler]
pub async fn list_cities(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let cities = state.city_service.find_all().await?;
    Ok(Json(cities))
}
