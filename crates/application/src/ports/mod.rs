//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod plant_identification_port;

#[cfg(test)]
pub use plant_identification_port::MockPlantIdentificationPort;
pub use plant_identification_port::{IdentificationQuery, PlantIdentificationPort};
