//! Incoming lookup request

use serde::Serialize;
use serde_json::Value;

/// Raw coordinates as submitted by a client
///
/// Fields keep their JSON form; presence and type checks happen in
/// [`domain::Coordinates::from_fields`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LookupRequest {
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
}

impl LookupRequest {
    /// Request with numeric coordinates
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(Value::from(latitude)),
            longitude: Some(Value::from(longitude)),
        }
    }
}

impl From<Value> for LookupRequest {
    /// Pick `latitude` and `longitude` out of a JSON body; any non-object body
    /// yields an empty request
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut map) => Self {
                latitude: map.remove("latitude").filter(|v| !v.is_null()),
                longitude: map.remove("longitude").filter(|v| !v.is_null()),
            },
            _ => Self::default(),
        }
    }
}
