//! Application layer - Use cases and orchestration
//!
//! Contains the plant lookup use case and the port it drives. Adapters in
//! the infrastructure layer implement the port.

pub mod error;
pub mod lookup_request;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use lookup_request::LookupRequest;
pub use ports::*;
pub use services::*;
