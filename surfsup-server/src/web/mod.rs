//! Web layer for the climate API.
//!
//! Read-only JSON endpoints over the observation store, plus an HTML index.

mod dto;
mod routes;
mod state;
pub mod templates;


pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::{API_ROUTES, ApiRoute, IndexTemplate};
