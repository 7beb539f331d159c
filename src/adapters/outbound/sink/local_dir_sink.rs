use crate::ports::outbound::ReportSink;
use crate::shared::error::ReportError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// LocalDirSink adapter writing the report into a local directory
///
/// Used for interactive runs; the destination defaults to the current
/// working directory.
pub struct LocalDirSink {
    directory: PathBuf,
}

impl LocalDirSink {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    pub fn current_dir() -> Self {
        Self::new(PathBuf::from("."))
    }
}

impl ReportSink for LocalDirSink {
    fn write(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = self.directory.join(file_name);

        // Overwriting a regular file is expected; following a planted
        // symlink out of the report directory is not.
        if path.exists() {
            validate_not_symlink(&path, "write")?;
        }

        fs::write(&path, content).map_err(|e| ReportError::ReportWriteError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        Ok(path)
    }

    fn announce(&self, path: &Path) {
        eprintln!("✅ Report written to {}", path.display());
    }

    fn complete(&self) {}
}
