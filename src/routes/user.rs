use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::dto::user_dto::{LoginPayload, RegisterPayload, UserResponse};
use crate::error::{Error, Result};
use crate::middleware::session::{session_token_from_headers, SESSION_COOKIE};
use crate::models::user::User;
use crate::AppState;

#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = User {
        id: 0,
        email: payload.email,
        name: payload.name,
        password: payload.password,
    };

    match state.user_service.save(user).await? {
        Some(saved) => Ok((StatusCode::CREATED, Json(UserResponse::from(saved)))),
        None => Err(Error::Conflict(
            "a user with this email already exists".to_string(),
        )),
    }
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    let user = state
        .user_service
        .find_by_email_and_password(&payload.email, &payload.password)
        .await?
        .ok_or_else(|| Error::Unauthorized("wrong email or password".to_string()))?;

    let token = state.session_service.create(user.clone());
    let cookie = format!("{}={}; HttpOnly; Path=/", SESSION_COOKIE, token);
    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(UserResponse::from(user)),
    ))
}

#[axum::debug_handler]
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = session_token_from_headers(&headers) {
        state.session_service.remove(&token);
    }
    let cookie = format!("{}=; Max-Age=0; HttpOnly; Path=/", SESSION_COOKIE);
    ([(header::SET_COOKIE, cookie)], StatusCode::NO_CONTENT)
}
