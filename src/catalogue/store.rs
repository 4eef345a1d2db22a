//! File-backed pattern catalogue
//!
//! Entries are kept in memory keyed by id and persisted as a single JSON
//! document. Patterns are stored as canonical grid text and decoded on every
//! lookup, so clients always receive origin-centred coordinates.

use crate::catalogue::search::{compare_names, matches};
use crate::codec::decode::deserialize_bounded;
use crate::codec::pattern::{PatternPackage, PatternRecord};
use crate::codec::reencode::{render_grid_text, to_grid_text};
use crate::codec::{deserialize, serialize};
use crate::io::configuration::FIRST_PATTERN_ID;
use crate::io::error::{LifecatError, Result, WithPath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One stored catalogue row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueEntry {
    /// Unique id, never reused
    #[serde(rename = "Pattern_id")]
    pub pattern_id: u64,
    /// Catalogue name
    #[serde(rename = "Name")]
    pub name: String,
    /// Submitting user
    #[serde(rename = "Username")]
    pub username: String,
    /// Free-form description
    #[serde(rename = "Comments")]
    pub comments: String,
    /// Canonical grid text
    #[serde(rename = "Pattern")]
    pub pattern: String,
}

/// Search result row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueReference {
    /// Id to pass to [`Catalogue::get`]
    #[serde(rename = "Pattern_id")]
    pub pattern_id: u64,
    /// Catalogue name
    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Serialize, Deserialize)]
struct CatalogueDocument {
    next_id: u64,
    entries: Vec<CatalogueEntry>,
}

/// Persistent collection of named patterns
#[derive(Debug, Clone)]
pub struct Catalogue {
    path: PathBuf,
    next_id: u64,
    entries: BTreeMap<u64, CatalogueEntry>,
}

impl Catalogue {
    /// Create an empty catalogue that will be saved to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            next_id: FIRST_PATTERN_ID,
            entries: BTreeMap::new(),
        }
    }

    /// Load the catalogue stored at `path`
    ///
    /// A missing file opens as an empty catalogue.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file contents are not a catalogue document
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            debug!(path = %path.display(), "catalogue file not found, starting empty");
            return Ok(Self::new(path));
        }

        let contents = std::fs::read_to_string(&path).with_path(&path, "read catalogue")?;
        let document: CatalogueDocument =
            serde_json::from_str(&contents).map_err(|source| LifecatError::CatalogueCorrupt {
                path: path.clone(),
                source,
            })?;

        let entries: BTreeMap<u64, CatalogueEntry> = document
            .entries
            .into_iter()
            .map(|entry| (entry.pattern_id, entry))
            .collect();
        // Never hand out an id already present, even if next_id was edited by hand
        let next_id = entries
            .keys()
            .next_back()
            .map_or(FIRST_PATTERN_ID, |last| last + 1)
            .max(document.next_id);

        debug!(path = %path.display(), entries = entries.len(), "catalogue loaded");
        Ok(Self {
            path,
            next_id,
            entries,
        })
    }

    /// Write the catalogue back to its path, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file cannot
    /// be written
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
        }

        let document = CatalogueDocument {
            next_id: self.next_id,
            entries: self.entries.values().cloned().collect(),
        };
        let json = serde_json::to_string_pretty(&document)?;
        std::fs::write(&self.path, json).with_path(&self.path, "write catalogue")?;

        debug!(path = %self.path.display(), entries = self.entries.len(), "catalogue saved");
        Ok(())
    }

    /// Store a submitted package and return its new id
    ///
    /// The pattern object is re-encoded before anything is stored, so a
    /// malformed pattern leaves the catalogue untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LifecatError::MalformedPattern`] if the pattern object cannot
    /// be re-encoded
    pub fn add(&mut self, package: &PatternPackage) -> Result<u64> {
        let pattern = to_grid_text(&package.pattern_object)?;
        Ok(self.insert(
            &package.name,
            &package.username,
            &package.comments,
            pattern,
        ))
    }

    /// Store raw grid text, normalised to its canonical form, and return its id
    ///
    /// # Errors
    ///
    /// Returns [`LifecatError::MalformedPattern`] if the text needs a board
    /// larger than [`crate::codec::decode::MAX_BOARD_SIDE`]
    pub fn add_grid_text(
        &mut self,
        name: &str,
        username: &str,
        comments: &str,
        text: &str,
    ) -> Result<u64> {
        let pattern = render_grid_text(&deserialize_bounded(text)?);
        Ok(self.insert(name, username, comments, pattern))
    }

    /// Look up an entry and decode its pattern
    ///
    /// # Errors
    ///
    /// Returns [`LifecatError::PatternNotFound`] if no entry has `pattern_id`
    pub fn get(&self, pattern_id: u64) -> Result<PatternRecord> {
        let entry = self.entry(pattern_id)?;
        Ok(PatternRecord {
            username: entry.username.clone(),
            comments: entry.comments.clone(),
            pattern_object: serialize(&deserialize(&entry.pattern)),
        })
    }

    /// Stored entry with the given id
    ///
    /// # Errors
    ///
    /// Returns [`LifecatError::PatternNotFound`] if no entry has `pattern_id`
    pub fn entry(&self, pattern_id: u64) -> Result<&CatalogueEntry> {
        self.entries
            .get(&pattern_id)
            .ok_or(LifecatError::PatternNotFound { pattern_id })
    }

    /// Entries whose names match `search`, ordered by name ignoring case, then id
    pub fn search(&self, search: &str) -> Vec<CatalogueReference> {
        let mut references: Vec<CatalogueReference> = self
            .entries
            .values()
            .filter(|entry| matches(&entry.name, search))
            .map(|entry| CatalogueReference {
                pattern_id: entry.pattern_id,
                name: entry.name.clone(),
            })
            .collect();
        references.sort_by(|a, b| {
            compare_names(&a.name, &b.name).then(a.pattern_id.cmp(&b.pattern_id))
        });

        debug!(search, results = references.len(), "catalogue searched");
        references
    }

    /// Delete an entry on behalf of the user who submitted it
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No entry has `pattern_id`
    /// - The entry was submitted under a different username
    pub fn remove(&mut self, pattern_id: u64, username: &str) -> Result<CatalogueEntry> {
        let owner = &self.entry(pattern_id)?.username;
        if owner != username {
            return Err(LifecatError::NotOwner {
                pattern_id,
                username: username.to_string(),
            });
        }

        let removed = self
            .entries
            .remove(&pattern_id)
            .ok_or(LifecatError::PatternNotFound { pattern_id })?;
        info!(pattern_id, name = %removed.name, "pattern removed");
        Ok(removed)
    }

    /// Path the catalogue is saved to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalogue has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, name: &str, username: &str, comments: &str, pattern: String) -> u64 {
        let pattern_id = self.next_id;
        self.next_id += 1;
        self.entries.insert(
            pattern_id,
            CatalogueEntry {
                pattern_id,
                name: name.to_string(),
                username: username.to_string(),
                comments: comments.to_string(),
                pattern,
            },
        );
        info!(pattern_id, name, username, "pattern added");
        pattern_id
    }
}
