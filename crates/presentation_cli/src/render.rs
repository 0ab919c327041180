//! Terminal rendering of lookup results

use std::fmt::Write;

use domain::{LookupResult, PlantCandidate};
use serde_json::Value;

/// Prefix of every failed lookup message
pub const ERROR_PREFIX: &str = "Error fetching plantation information";

const MISSING: &str = "-";

/// Human-readable summary of a lookup result
pub fn render_result(result: &LookupResult) -> String {
    let mut out = String::from("🌿 Plant Information\n");

    if result.common_plants.is_empty() {
        out.push_str("  (no plants identified)\n");
    }
    for plant in &result.common_plants {
        render_plant(&mut out, plant);
    }

    let env = &result.environment;
    out.push_str("\n🌍 Environmental Information\n");
    let _ = writeln!(out, "  Soil Type: {}", env.soil_type);
    let _ = writeln!(out, "  Average Rainfall: {}", env.average_rainfall);
    let _ = writeln!(out, "  Growing Season: {}", env.growing_season);
    out
}

fn render_plant(out: &mut String, plant: &PlantCandidate) {
    let _ = writeln!(out, "  {}", plant.name);
    let _ = writeln!(
        out,
        "    Scientific Name: {}",
        plant.scientific_name.as_deref().unwrap_or(MISSING)
    );
    let _ = writeln!(out, "    Family: {}", plant.family.as_deref().unwrap_or(MISSING));
    let _ = writeln!(out, "    Genus: {}", plant.genus.as_deref().unwrap_or(MISSING));
}

/// Message shown when the server rejects a lookup
///
/// Uses the `error` field of a JSON body, falling back to the status line.
pub fn render_error(status: reqwest::StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| status.to_string());
    format!("{ERROR_PREFIX}: {detail}")
}
