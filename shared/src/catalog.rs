//! Static label → scientific name / medicinal property tables.
//!
//! Loaded once at startup and handed to whoever needs a lookup; nothing here
//! mutates after construction.

use crate::error::CatalogError;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

const BUNDLED_CATALOG: &str = include_str!("../data/leaf_catalog.yaml");

/// Where a scientific name is being shown; decides the placeholder for
/// labels missing from the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameContext {
    Inline,
    Report,
}

impl NameContext {
    pub fn placeholder(self) -> &'static str {
        match self {
            NameContext::Inline => "Unknown",
            NameContext::Report => "N/A",
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    leaves: BTreeMap<String, LeafEntry>,
}

#[derive(Debug, Deserialize)]
struct LeafEntry {
    scientific_name: Option<String>,
    #[serde(default)]
    properties: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyCatalog {
    properties: HashMap<String, Vec<String>>,
    scientific_names: HashMap<String, String>,
}

impl PropertyCatalog {
    pub fn new(
        properties: HashMap<String, Vec<String>>,
        scientific_names: HashMap<String, String>,
    ) -> Self {
        Self {
            properties,
            scientific_names,
        }
    }

    /// The catalog compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUNDLED_CATALOG)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&raw)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(raw)?;
        let mut properties = HashMap::with_capacity(file.leaves.len());
        let mut scientific_names = HashMap::with_capacity(file.leaves.len());

        for (label, entry) in file.leaves {
            if let Some(name) = entry.scientific_name {
                scientific_names.insert(label.clone(), name);
            }
            properties.insert(label, entry.properties);
        }

        log::debug!(
            "Loaded catalog with {} property sets and {} scientific names",
            properties.len(),
            scientific_names.len()
        );
        Ok(Self::new(properties, scientific_names))
    }

    /// Ordered property list for `label`; empty when the label is unknown.
    pub fn resolve_properties(&self, label: &str) -> &[String] {
        self.properties
            .get(label)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn resolve_scientific_name(&self, label: &str, context: NameContext) -> &str {
        self.scientific_names
            .get(label)
            .map(String::as_str)
            .unwrap_or(context.placeholder())
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.scientific_names.is_empty()
    }
}
