//! Web layer for the campus navigator.
//!
//! Provides HTTP endpoints for listing stored networks and planning routes.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
