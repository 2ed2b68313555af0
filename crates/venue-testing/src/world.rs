use anyhow::{ensure, Result};
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::fixtures::SampleFiles;

/// Access code the sample setups unlock with (the shipped default).
pub const TEST_ACCESS_CODE: &str = "CCOI2026";

/// Isolated environment for driving the `venue` binary.
///
/// Each fixture gets its own data directory; commands built through it
/// point there via `VENUE_PATH`, so tests never touch real user state.
pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    samples: SampleFiles,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".venue");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
            samples: SampleFiles::new(),
        }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn samples(&self) -> &SampleFiles {
        &self.samples
    }

    /// Command against this fixture's data directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("venue").expect("venue binary should build");
        cmd.env("VENUE_PATH", &self.data_dir);
        cmd
    }

    /// Install the sample program via `venue init`.
    pub fn install_sample_program(&self) -> Result<()> {
        let output = self
            .command()
            .arg("init")
            .arg("--program")
            .arg(self.samples.program_path())
            .output()?;
        ensure!(
            output.status.success(),
            "init failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        Ok(())
    }

    /// Pass the access gate with the shipped default code.
    pub fn unlock(&self) -> Result<()> {
        let output = self
            .command()
            .arg("unlock")
            .arg(TEST_ACCESS_CODE)
            .output()?;
        ensure!(
            output.status.success(),
            "unlock failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        Ok(())
    }

    /// Standard ready-to-browse setup: program installed, gate open.
    pub fn setup(&self) -> Result<()> {
        self.install_sample_program()?;
        self.unlock()
    }
}
