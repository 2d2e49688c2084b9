//! Plant catalog
//!
//! The catalog is an immutable, ordered table of edible plant records. It is
//! loaded once at startup, either from the builtin table compiled into the
//! binary or from a user-provided JSON/TOML file, and shared by reference
//! with every screen afterwards.
//!
//! # File formats
//!
//! JSON catalogs may be a bare array of records or an object with a `plants`
//! array. TOML catalogs use `[[plants]]` tables:
//!
//! ```toml
//! [[plants]]
//! name = "Basil"
//! emoji = "🌿"
//! category = "herb"
//! season = "Summer"
//! ```

mod error;

pub use error::{CatalogError, Result};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Builtin table of common edible garden plants
const BUILTIN_CATALOG: &str = include_str!("../../data/plants.json");

/// A single plant in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantRecord {
    /// Unique display name
    pub name: String,
    /// Emoji glyph shown next to the name (may be empty)
    #[serde(default)]
    pub emoji: String,
    /// Category label such as "herb" or "root vegetable" (may be empty)
    #[serde(default)]
    pub category: String,
    /// Short growing note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Main growing season
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    /// Growing difficulty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

impl PlantRecord {
    /// Create a record with the required fields only
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        emoji: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            emoji: emoji.into(),
            category: category.into(),
            description: None,
            season: None,
            difficulty: None,
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the growing season
    #[must_use]
    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = Some(season.into());
        self
    }

    /// Set the difficulty
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }
}

/// Catalog file with a top-level `plants` array
#[derive(Deserialize)]
struct CatalogTable {
    plants: Vec<PlantRecord>,
}

/// Immutable, ordered plant table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    plants: Vec<PlantRecord>,
}

impl Catalog {
    /// Build a catalog from records, keeping their order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyName` if a record has a blank name and
    /// `CatalogError::DuplicateName` if two records share a name.
    pub fn new(plants: Vec<PlantRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(plants.len());
        for (index, plant) in plants.iter().enumerate() {
            if plant.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            if !seen.insert(plant.name.as_str()) {
                return Err(CatalogError::DuplicateName(plant.name.clone()));
            }
        }

        Ok(Self { plants })
    }

    /// Load the builtin catalog
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded table is malformed.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// Parse a catalog from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails validation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let plants = if json.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<PlantRecord>>(json)?
        } else {
            serde_json::from_str::<CatalogTable>(json)?.plants
        };
        Self::new(plants)
    }

    /// Parse a catalog from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or fails validation.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: CatalogTable = toml::from_str(text)?;
        Self::new(file.plants)
    }

    /// Load a catalog file, choosing the parser by extension
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension, or fails to parse or validate.
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let catalog = match extension.as_str() {
            "json" => Self::from_json_str(&fs::read_to_string(path)?)?,
            "toml" => Self::from_toml_str(&fs::read_to_string(path)?)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        };

        tracing::info!(
            path = %path.display(),
            plants = catalog.len(),
            "loaded plant catalog"
        );
        Ok(catalog)
    }

    /// All records in catalog order
    #[must_use]
    pub fn plants(&self) -> &[PlantRecord] {
        &self.plants
    }

    /// Iterate records in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, PlantRecord> {
        self.plants.iter()
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.plants.len()
    }

    /// Whether the catalog has no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Look up a record by exact name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&PlantRecord> {
        self.plants.iter().find(|plant| plant.name == name)
    }

    /// Whether a record with this exact name exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a PlantRecord;
    type IntoIter = std::slice::Iter<'a, PlantRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.plants.iter()
    }
}
