use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

use super::{auth, health, me, me_departments, me_roles, users};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health::router())
        .merge(auth::router(state.clone()))
        .merge(users::router(state.clone()))
        .merge(me::router(state.clone()))
        .merge(me_roles::router(state.clone()))
        .merge(me_departments::router(state))
}
