use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};

use crate::{
    middleware::AuthUser,
    payloads::{
        me::MeRead,
        membership::UserMembershipRead,
        user::{UserRead, UserUpdateRequest},
    },
    response::{ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/me", get(me).patch(update_me))
        .route("/me/membership", get(membership))
        .with_state(state)
}

async fn me(State(state): State<Arc<AppState>>, caller: AuthUser) -> ApiResult<MeRead> {
    let me = ServiceContext::from_state(state.as_ref())
        .user()
        .me(&caller.id)
        .await?;
    JsonApiResponse::ok(me)
}

async fn update_me(
    State(state): State<Arc<AppState>>,
    caller: AuthUser,
    Json(body): Json<UserUpdateRequest>,
) -> ApiResult<UserRead> {
    let user = ServiceContext::from_state(state.as_ref())
        .user()
        .update_profile(&caller.id, body)
        .await?;
    JsonApiResponse::ok(user.into())
}

async fn membership(
    State(state): State<Arc<AppState>>,
    caller: AuthUser,
) -> ApiResult<Option<UserMembershipRead>> {
    let row = ServiceContext::from_state(state.as_ref())
        .user_membership()
        .find_for_user(&caller.id)
        .await?;
    JsonApiResponse::ok(row.map(Into::into))
}
