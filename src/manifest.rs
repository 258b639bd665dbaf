//! Metadata manifests written next to the generated assets.
//!
//! `aslDictionaryData.json` is read by the front end's searchable dictionary;
//! extraction manifests record what a chart crop run produced.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::catalog::dictionary::{Difficulty, SignEntry};
use crate::foundation::error::{SignError, SignResult};

/// Metadata record for one sign, as exposed to the front end.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignRecord {
    pub category: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub usage: String,
}

impl From<&SignEntry> for SignRecord {
    fn from(entry: &SignEntry) -> Self {
        Self {
            category: entry.category.to_string(),
            description: entry.description.to_string(),
            difficulty: entry.difficulty,
            usage: entry.usage.to_string(),
        }
    }
}

/// The dictionary metadata file, `aslDictionaryData.json`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DictionaryManifest {
    /// Word key -> record. BTreeMap keeps repeated runs byte-identical.
    pub signs: BTreeMap<String, SignRecord>,
    pub categories: Vec<String>,
    pub difficulty_levels: Vec<Difficulty>,
    pub total_signs: usize,
}

impl DictionaryManifest {
    /// Build a manifest from catalog entries.
    pub fn from_entries(entries: &[SignEntry]) -> Self {
        let mut signs = BTreeMap::new();
        for entry in entries {
            signs.insert(entry.word.to_string(), SignRecord::from(entry));
        }
        let categories: BTreeSet<String> =
            signs.values().map(|record| record.category.clone()).collect();
        Self {
            total_signs: signs.len(),
            categories: categories.into_iter().collect(),
            difficulty_levels: vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard],
            signs,
        }
    }

    pub fn validate(&self) -> SignResult<()> {
        if self.total_signs != self.signs.len() {
            return Err(SignError::validation(format!(
                "total_signs is {} but {} signs are listed",
                self.total_signs,
                self.signs.len()
            )));
        }
        for (word, record) in &self.signs {
            if word.is_empty() {
                return Err(SignError::validation("manifest contains an empty word key"));
            }
            if record.category.is_empty() || record.description.is_empty() || record.usage.is_empty()
            {
                return Err(SignError::validation(format!(
                    "sign '{word}' has incomplete metadata"
                )));
            }
            if !self.categories.iter().any(|c| c == &record.category) {
                return Err(SignError::validation(format!(
                    "sign '{word}' uses unlisted category '{}'",
                    record.category
                )));
            }
        }
        Ok(())
    }

    pub fn from_path(path: &Path) -> SignResult<Self> {
        let file =
            File::open(path).with_context(|| format!("open manifest '{}'", path.display()))?;
        let manifest: Self = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parse manifest JSON '{}'", path.display()))?;
        Ok(manifest)
    }

    pub fn write(&self, path: &Path) -> SignResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create manifest dir '{}'", parent.display()))?;
        }
        let file =
            File::create(path).with_context(|| format!("create manifest '{}'", path.display()))?;
        serde_json::to_writer_pretty(file, self)
            .with_context(|| format!("write manifest '{}'", path.display()))?;
        Ok(())
    }
}

/// One cropped sign in an extraction manifest.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExtractedSign {
    pub category: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub usage: String,
    pub source_image: String,
    /// `(col, row)` in the source chart grid.
    pub grid_position: (u32, u32),
}

/// Record of what one chart crop run produced.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExtractionManifest {
    pub chart: String,
    /// Cells the layout mapped.
    pub total_cells: usize,
    /// Cells that produced an output image.
    pub extracted: usize,
    pub categories: Vec<String>,
    /// Signs with catalog metadata; chart cells without metadata are cropped
    /// but not listed here.
    pub signs: BTreeMap<String, ExtractedSign>,
}

impl ExtractionManifest {
    pub fn write(&self, path: &Path) -> SignResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create manifest dir '{}'", parent.display()))?;
        }
        let file =
            File::create(path).with_context(|| format!("create manifest '{}'", path.display()))?;
        serde_json::to_writer_pretty(file, self)
            .with_context(|| format!("write manifest '{}'", path.display()))?;
        Ok(())
    }
}
