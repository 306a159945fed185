use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing::debug;

use crate::errors::GenerationError;

/// Lookup table from two-letter state abbreviations to display names.
///
/// Backs both court-code resolution and lawyer document generation. The table
/// is immutable for the process lifetime and cached after the first load.
#[derive(Debug, Clone)]
pub struct RegionTable {
    names: BTreeMap<String, String>,
    abbreviations: Vec<String>,
}

impl RegionTable {
    /// Display name for an abbreviation, if mapped.
    pub fn name(&self, abbreviation: &str) -> Option<&str> {
        self.names.get(abbreviation).map(String::as_str)
    }

    /// All mapped abbreviations, sorted.
    pub fn abbreviations(&self) -> &[String] {
        &self.abbreviations
    }
}

/// Process-wide region table. A missing or malformed asset file is a fatal
/// configuration error surfaced on first access.
pub fn region_table() -> Result<&'static RegionTable, GenerationError> {
    static TABLE: OnceLock<Result<RegionTable, String>> = OnceLock::new();
    let entry = TABLE.get_or_init(|| {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/state_names.json");
        let contents = fs::read_to_string(&path)
            .map_err(|err| format!("failed to read region table {}: {}", path.display(), err))?;
        let names: BTreeMap<String, String> = serde_json::from_str(&contents)
            .map_err(|err| format!("invalid region table {}: {}", path.display(), err))?;
        if names.is_empty() {
            return Err(format!("region table {} is empty", path.display()));
        }
        let abbreviations = names.keys().cloned().collect();
        debug!(regions = names.len(), "region table loaded");
        Ok(RegionTable {
            names,
            abbreviations,
        })
    });
    match entry {
        Ok(table) => Ok(table),
        Err(message) => Err(GenerationError::Asset(message.clone())),
    }
}
