//! Domain layer for GeoPlant
//!
//! Contains the plant lookup vocabulary: coordinates, hemispheres, plant
//! candidates and the summary returned to clients. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
