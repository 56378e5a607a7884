// Snapshot persistence for the task list

use crate::task::Task;
use eyre::{Context, Result};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Storage surface for the task list.
///
/// The contract is whole-list: `save` overwrites the entire snapshot and
/// `load` returns the last one written. `load(save(tasks)) == tasks`
/// field-for-field for any valid list.
pub trait Snapshot {
    /// Read the last persisted snapshot.
    ///
    /// A missing or unparseable snapshot yields an empty list, not an error;
    /// only I/O failures on an existing file are reported.
    fn load(&self) -> Result<Vec<Task>>;

    /// Overwrite the persisted snapshot with the full list.
    fn save(&self, tasks: &[Task]) -> Result<()>;
}

/// Snapshot stored as a JSON array in a single file.
pub struct FileSnapshot {
    path: PathBuf,
}

impl FileSnapshot {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Snapshot for FileSnapshot {
    fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            debug!(path = ?self.path, "No snapshot file yet, starting empty");
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path).context("Failed to read snapshot file")?;

        match serde_json::from_str(&contents) {
            Ok(tasks) => Ok(tasks),
            Err(e) => {
                warn!(path = ?self.path, error = ?e, "Snapshot unparseable, starting empty");
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).context("Failed to create snapshot directory")?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)
            .context("Failed to open snapshot file for writing")?;

        // Exclusive lock while overwriting; released when file is dropped
        file.lock_exclusive().context("Failed to acquire file lock")?;

        let json = serde_json::to_string(tasks)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        debug!(path = ?self.path, count = tasks.len(), "Snapshot written");
        Ok(())
    }
}
