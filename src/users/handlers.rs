use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};

use crate::{
    auth::password,
    error::ApiError,
    state::AppState,
    users::{
        dto::SignupRequest,
        store::{default_provider, User},
    },
};

/// POST /signup. Rejects duplicate ids, stores the password digest.
#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::Decode)?;

    if state
        .store
        .find_by_id(&payload.id)
        .await
        .map_err(ApiError::Internal)?
        .is_some()
    {
        return Err(ApiError::DuplicateId);
    }

    let user = User {
        id: payload.id,
        password: password::hash(&payload.password),
        provider: if payload.provider.is_empty() {
            default_provider()
        } else {
            payload.provider
        },
    };

    state.store.create(&user).await.map_err(ApiError::Persistence)?;

    info!(id = %user.id, provider = %user.provider, "user created");
    Ok(StatusCode::CREATED)
}

/// PUT /update. Full-row update keyed by id; the incoming password is
/// hashed before it is written.
#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    payload: Result<Json<User>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(mut user) = payload.map_err(|_| ApiError::Decode)?;

    user.password = password::hash(&user.password);
    if user.provider.is_empty() {
        user.provider = default_provider();
    }

    state.store.update(&user).await.map_err(ApiError::Persistence)?;

    info!(id = %user.id, "user updated");
    Ok(StatusCode::CREATED)
}

/// DELETE /dropout/:id.
#[instrument(skip(state))]
pub async fn dropout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let user = state
        .store
        .find_by_id(&id)
        .await
        .map_err(ApiError::Internal)?
        .ok_or(ApiError::NotFound)?;

    state
        .store
        .delete_by_id(&user.id)
        .await
        .map_err(ApiError::Persistence)?;

    info!(id = %user.id, "user deleted");
    Ok(StatusCode::OK)
}
