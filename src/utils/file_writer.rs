use std::path::{Path, PathBuf};
use std::sync::Mutex;

use colored::Colorize;

use crate::error::{Result, ScaffoldError};
use crate::utils::output;

/// Abstraction for file system operations, enabling dry-run mode.
/// Implementations are shared across the concurrent write threads of a run.
pub trait FileWriter: Sync {
    /// Create a directory and all missing ancestors. Succeeds if it already exists.
    fn ensure_dir(&self, path: &Path) -> Result<()>;

    /// Write `content` plus one trailing newline. Empty content writes nothing.
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;

    /// Copy a binary asset verbatim
    fn copy_asset(&self, path: &Path, bytes: &[u8]) -> Result<()>;
}

/// Real file writer — actually writes to disk
pub struct RealWriter;

impl RealWriter {
    fn ensure_parent(&self, path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.ensure_dir(parent),
            _ => Ok(()),
        }
    }
}

impl FileWriter for RealWriter {
    fn ensure_dir(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path)
            .map_err(|e| ScaffoldError::filesystem("Failed to create directory", path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        if content.is_empty() {
            return Ok(());
        }
        self.ensure_parent(path)?;
        std::fs::write(path, format!("{}\n", content))
            .map_err(|e| ScaffoldError::filesystem("Failed to write", path, e))?;
        output::print_file_created(&path.display().to_string());
        Ok(())
    }

    fn copy_asset(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        self.ensure_parent(path)?;
        std::fs::write(path, bytes)
            .map_err(|e| ScaffoldError::filesystem("Failed to copy asset to", path, e))?;
        output::print_file_created(&path.display().to_string());
        Ok(())
    }
}

/// Dry-run writer — prints what would happen without writing
#[derive(Default)]
pub struct DryRunWriter {
    files_created: Mutex<Vec<PathBuf>>,
    dirs_created: Mutex<Vec<PathBuf>>,
}

impl DryRunWriter {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn files(&self) -> Vec<PathBuf> {
        lock(&self.files_created).clone()
    }

    #[cfg(test)]
    pub fn dirs(&self) -> Vec<PathBuf> {
        lock(&self.dirs_created).clone()
    }

    /// Print summary of what would be done
    pub fn print_summary(&self) {
        let created = lock(&self.files_created);
        let dirs = lock(&self.dirs_created);

        println!();
        if created.is_empty() && dirs.is_empty() {
            println!("  {}", "No changes would be made".dimmed());
            return;
        }
        println!(
            "  {} director(ies) and {} file(s) would be created",
            dirs.len().to_string().bold(),
            created.len().to_string().bold()
        );
    }
}

fn lock(list: &Mutex<Vec<PathBuf>>) -> std::sync::MutexGuard<'_, Vec<PathBuf>> {
    // A poisoned list is still a valid record of paths
    list.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl FileWriter for DryRunWriter {
    fn ensure_dir(&self, path: &Path) -> Result<()> {
        let mut dirs = lock(&self.dirs_created);
        if !dirs.iter().any(|d| d == path) {
            dirs.push(path.to_path_buf());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        if content.is_empty() {
            return Ok(());
        }
        println!("  {} {}", "Would create:".cyan(), path.display());
        lock(&self.files_created).push(path.to_path_buf());
        Ok(())
    }

    fn copy_asset(&self, path: &Path, _bytes: &[u8]) -> Result<()> {
        println!("  {} {}", "Would copy:".cyan(), path.display());
        lock(&self.files_created).push(path.to_path_buf());
        Ok(())
    }
}
