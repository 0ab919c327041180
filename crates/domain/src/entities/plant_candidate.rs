//! Plant candidate entity

use serde::{Deserialize, Serialize};

/// A candidate species returned by the identification service
///
/// Optional fields serialize as `null` so clients always see the same keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantCandidate {
    /// Display name of the suggestion
    pub name: String,
    /// Scientific (binomial) name
    #[serde(default)]
    pub scientific_name: Option<String>,
    /// Taxonomic family
    #[serde(default)]
    pub family: Option<String>,
    /// Taxonomic genus
    #[serde(default)]
    pub genus: Option<String>,
    /// URL of a representative image
    #[serde(default)]
    pub image: Option<String>,
}

impl PlantCandidate {
    /// Create a candidate with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scientific_name: None,
            family: None,
            genus: None,
            image: None,
        }
    }

    #[must_use]
    pub fn with_scientific_name(mut self, scientific_name: impl Into<String>) -> Self {
        self.scientific_name = Some(scientific_name.into());
        self
    }

    #[must_use]
    pub fn with_taxonomy(mut self, family: impl Into<String>, genus: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self.genus = Some(genus.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}
