use std::collections::HashMap;
use std::path::Path;

use venue_core::initials;

use crate::Result;

/// File name the speaker image mapping lives under in the data dir.
pub const IMAGES_FILE: &str = "speaker-images.json";

/// What to render for a speaker portrait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    /// Path or URL from the image mapping.
    Image(String),
    /// Generated monogram from the speaker's initials.
    Monogram(String),
}

/// Optional mapping from speaker slug to an image path/URL.
///
/// The mapping is produced by offline tooling and may be missing entirely;
/// every lookup degrades to a monogram so rendering never blocks on it.
#[derive(Debug, Clone, Default)]
pub struct ImageMap {
    entries: HashMap<String, String>,
}

impl ImageMap {
    /// Load the mapping; a missing file is an empty map.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let entries = serde_json::from_str(&raw)?;
        Ok(Self { entries })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn avatar(&self, slug: &str, display_name: &str) -> Avatar {
        match self.entries.get(slug) {
            Some(image) => Avatar::Image(image.clone()),
            None => Avatar::Monogram(initials(display_name)),
        }
    }
}
