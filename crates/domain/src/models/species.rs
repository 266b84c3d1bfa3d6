//! Plant species reference data.

use serde::{Deserialize, Serialize};

/// A plant species with its care requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub id: i64,
    pub common_name: String,
    pub scientific_name: Option<String>,
    pub water_requirements: Option<String>,
    pub light_requirements: Option<String>,
    pub humidity_requirements: Option<String>,
}

/// Name shown when a plant has no species assigned.
pub const UNKNOWN_SPECIES: &str = "Unknown";

/// Folds a name for search: lowercase, without diacritics or whitespace.
///
/// Only Latin accents are folded; other characters pass through.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' | 'ã' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

impl Species {
    /// True when the folded query occurs in the common or scientific name.
    ///
    /// An empty query matches every species.
    pub fn matches(&self, normalized_query: &str) -> bool {
        if normalized_query.is_empty() {
            return true;
        }
        normalize_name(&self.common_name).contains(normalized_query)
            || self
                .scientific_name
                .as_deref()
                .map(|name| normalize_name(name).contains(normalized_query))
                .unwrap_or(false)
    }
}

/// Query string of the species search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeciesSearchQuery {
    #[serde(default)]
    pub q: String,
}
