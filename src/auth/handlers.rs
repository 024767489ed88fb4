use axum::{
    extract::{rejection::JsonRejection, FromRef, State},
    Json,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse},
        jwt::JwtKeys,
        password,
    },
    error::ApiError,
    state::AppState,
};

/// POST /login. Looks the user up by id, compares password digests and
/// issues an access/refresh token pair.
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::Decode)?;

    let user = state
        .store
        .find_by_id(&payload.id)
        .await
        .map_err(ApiError::Internal)?
        .ok_or(ApiError::NotFound)?;

    if !password::verify(&payload.password, &user.password) {
        warn!(id = %payload.id, "wrong password");
        return Err(ApiError::AuthMismatch);
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign_access(&user.id).map_err(ApiError::Internal)?;
    let refresh_token = keys.sign_refresh(&user.id).map_err(ApiError::Internal)?;

    info!(id = %user.id, "user logged in");
    Ok(Json(LoginResponse {
        status: 200,
        access_token,
        refresh_token,
    }))
}
