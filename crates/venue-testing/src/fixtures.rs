//! Fixtures for sample data placement.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Sample file manager for test data.
///
/// Assumes samples are in `crates/venue-engine/tests/samples/`, the same
/// files the engine snapshot tests run against.
pub struct SampleFiles {
    samples_dir: PathBuf,
}

impl Default for SampleFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFiles {
    pub fn new() -> Self {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let samples_dir = manifest_dir
            .parent()
            .expect("testing crate lives under crates/")
            .join("venue-engine/tests/samples");

        Self { samples_dir }
    }

    /// Path of the standard sample program.
    pub fn program_path(&self) -> PathBuf {
        self.samples_dir.join("program.json")
    }

    /// Copy the sample program to a destination.
    pub fn copy_program_to(&self, dest: &Path) -> Result<()> {
        fs::copy(self.program_path(), dest)?;
        Ok(())
    }

    /// Write a minimal speaker image mapping next to a test's data.
    pub fn write_image_map(&self, dest: &Path) -> Result<()> {
        fs::write(dest, r#"{"jane-doe": "/images/speakers/jane-doe.jpg"}"#)?;
        Ok(())
    }
}
