//! GeoPlant HTTP presentation layer
//!
//! This crate provides the HTTP API for GeoPlant.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use middleware::{REQUEST_ID_HEADER, RequestId};
pub use routes::create_router;
pub use server::serve_with_graceful_shutdown;
pub use state::AppState;
