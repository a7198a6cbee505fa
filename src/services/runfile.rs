//! Persistence of the resolved run command as a reusable shell script.

use crate::error::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The script a resolved run command is saved to (`.run` by default)
#[derive(Debug, Clone)]
pub struct RunFile {
    path: PathBuf,
}

impl RunFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if a command has already been resolved
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the command, replacing any previous one
    pub fn save(&self, command: &str) -> Result<()> {
        fs::write(&self.path, command)?;
        set_executable(&self.path)?;
        tracing::debug!("Saved run command to {:?}", self.path);
        Ok(())
    }

    /// Read the persisted command
    #[cfg(test)]
    pub fn load(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }

    /// Forget the persisted command; a missing file is not an error
    pub fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(unix)]
fn set_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o777))
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}
