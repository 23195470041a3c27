use axum::Router;

use crate::state::AppState;

mod claims;
mod dto;
pub(crate) mod extractors;
pub mod handlers;
pub mod jwt;
mod password;
mod repo;
pub(crate) mod repo_types;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
