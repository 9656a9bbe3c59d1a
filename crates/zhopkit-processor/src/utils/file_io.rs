//! File I/O
//!
//! Reads a G-code file into memory as lines that keep their terminators,
//! and writes a rewritten program back in one step: the new content goes to
//! a temporary file in the same directory which then replaces the target,
//! so a failed write never leaves a truncated program behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use zhopkit_core::{Error, Result};

/// Files above this size get a warning before being read into memory
const LARGE_FILE_WARNING_BYTES: u64 = 500 * 1024 * 1024;

/// G-code file reader
pub struct GcodeFileReader {
    path: PathBuf,
    file_size: u64,
}

impl GcodeFileReader {
    /// Create a new G-code file reader
    ///
    /// # Errors
    /// Returns error if file does not exist or cannot be accessed
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            return Err(Error::other(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(Error::other(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        let file_size = fs::metadata(&path)?.len();

        Ok(Self { path, file_size })
    }

    /// Get file size in bytes
    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Read the whole file as lines, each keeping its line terminator
    pub fn read_lines(&self) -> Result<Vec<String>> {
        if self.file_size > LARGE_FILE_WARNING_BYTES {
            tracing::warn!(
                "Reading very large file ({}MB) into memory",
                self.file_size / (1024 * 1024)
            );
        }

        let content = fs::read_to_string(&self.path)?;
        let lines = split_lines(&content);
        tracing::debug!(
            "Read {} lines ({} bytes) from {}",
            lines.len(),
            self.file_size,
            self.path.display()
        );
        Ok(lines)
    }
}

/// Split text into lines, keeping each `\n`
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}

/// Replaces a G-code file with new content
pub struct GcodeFileWriter {
    path: PathBuf,
}

impl GcodeFileWriter {
    /// Writer targeting `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Write all lines, replacing the file only once everything is on disk
    pub fn write_lines<S: AsRef<str>>(&self, lines: &[S]) -> Result<()> {
        let directory = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut staging = tempfile::NamedTempFile::new_in(&directory)?;
        {
            let mut writer = std::io::BufWriter::new(staging.as_file_mut());
            for line in lines {
                writer.write_all(line.as_ref().as_bytes())?;
            }
            writer.flush()?;
        }
        staging.as_file().sync_all()?;
        if let Ok(metadata) = fs::metadata(&self.path) {
            fs::set_permissions(staging.path(), metadata.permissions())?;
        }
        staging.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Wrote {} lines to {}", lines.len(), self.path.display());
        Ok(())
    }
}
