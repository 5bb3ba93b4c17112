//! Competition handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Competition routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // Draft validation
        .route("/validate", post(handler::validate_competition))
        // Views
        .route("/{id}", get(handler::get_competition))
        .route("/{id}/leaderboard", get(handler::get_leaderboard))
        .route("/{id}/result", get(handler::get_result_preview))
        // Membership
        .route("/{id}/permissions", get(handler::get_permissions))
}
