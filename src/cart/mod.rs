use axum::Router;

use crate::state::AppState;

mod dto;
pub mod handlers;
mod repo;
pub(crate) mod repo_types;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
