//! Value Objects - Immutable, identity-less domain primitives

mod coordinates;
mod hemisphere;

pub use coordinates::{Coordinates, ZeroCoordinatePolicy};
pub use hemisphere::Hemisphere;
