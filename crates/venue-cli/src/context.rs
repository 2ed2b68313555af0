use anyhow::{bail, Context as _, Result};
use std::path::{Path, PathBuf};

use venue_store::{AccessGate, Config, FileKvStore, ImageMap, KvStore, IMAGES_FILE, PROGRAM_FILE};
use venue_types::Program;

/// Resolved environment a command runs against: data directory plus the
/// configuration loaded from it.
pub struct ExecutionContext {
    data_dir: PathBuf,
    config: Config,
}

impl ExecutionContext {
    pub fn new(data_dir_flag: Option<&str>) -> Result<Self> {
        let data_dir = venue_core::resolve_workspace_path(data_dir_flag)?;
        let config = Config::load_from(&Config::path_in(&data_dir))?;
        Ok(Self { data_dir, config })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn program_path(&self) -> PathBuf {
        self.data_dir.join(PROGRAM_FILE)
    }

    pub fn images_path(&self) -> PathBuf {
        self.data_dir.join(IMAGES_FILE)
    }

    pub fn load_program(&self) -> Result<Program> {
        Ok(venue_store::load_program(&self.program_path())?)
    }

    pub fn image_map(&self) -> Result<ImageMap> {
        ImageMap::load(&self.images_path()).context("Failed to load speaker image mapping")
    }

    pub fn open_store(&self) -> Result<FileKvStore> {
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(FileKvStore::open(&self.data_dir)?)
    }

    pub fn gate(&self) -> AccessGate {
        AccessGate::new(self.config.access_code())
    }

    /// Data commands sit behind the shared access code, same as the app's
    /// login screen. Convenience only, not a security boundary.
    pub fn ensure_unlocked(&self, store: &dyn KvStore) -> Result<()> {
        if self.gate().is_unlocked(store) {
            return Ok(());
        }
        bail!("Locked. Enter the event access code with 'venue unlock <code>'")
    }
}
