//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod plant_id_adapter;

pub use plant_id_adapter::{MISSING_API_KEY_MESSAGE, PlantIdAdapter};
