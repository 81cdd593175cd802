//! Web layer for the commute server.
//!
//! Provides the trains, local info and health endpoints.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
