use axum::Router;

use crate::state::AppState;

pub(crate) mod dto;
pub mod handlers;
mod repo;
pub(crate) mod repo_types;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::public_routes())
        .merge(handlers::protected_routes())
}
