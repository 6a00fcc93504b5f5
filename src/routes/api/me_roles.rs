use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
};
use uuid::Uuid;

use crate::{
    middleware::AuthUser,
    payloads::user_role::{UserRoleCreateRequest, UserRoleRead, UserRoleUpdateRequest},
    response::{ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/me/roles", get(list).post(create))
        .route("/me/roles/{id}", patch(update))
        .with_state(state)
}

async fn list(
    State(state): State<Arc<AppState>>,
    caller: AuthUser,
) -> ApiResult<Vec<UserRoleRead>> {
    let rows = ServiceContext::from_state(state.as_ref())
        .user_role()
        .list_for_user(&caller.id)
        .await?;
    JsonApiResponse::ok(rows.into_iter().map(Into::into).collect())
}

async fn create(
    State(state): State<Arc<AppState>>,
    caller: AuthUser,
    Json(body): Json<UserRoleCreateRequest>,
) -> ApiResult<UserRoleRead> {
    let row = ServiceContext::from_state(state.as_ref())
        .user_role()
        .create(&caller.id, body)
        .await?;
    JsonApiResponse::with_status(StatusCode::CREATED, "created", row.into())
}

async fn update(
    State(state): State<Arc<AppState>>,
    caller: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UserRoleUpdateRequest>,
) -> ApiResult<UserRoleRead> {
    let row = ServiceContext::from_state(state.as_ref())
        .user_role()
        .update(&caller.id, &id, body)
        .await?;
    JsonApiResponse::ok(row.into())
}
