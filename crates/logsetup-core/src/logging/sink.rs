//! Append-mode file sink

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::error::{ProvisioningError, ProvisioningResult};

/// Make sure the directory containing `log_file` exists.
///
/// Returns the directory that was ensured, or `None` when the path has no
/// directory component (the file lives in the working directory).
pub fn ensure_parent_dir(log_file: &Path) -> ProvisioningResult<Option<PathBuf>> {
    let parent = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => return Ok(None),
    };

    // create_dir_all tolerates the directory appearing concurrently
    fs::create_dir_all(parent).map_err(|source| ProvisioningError::CreateDirectory {
        path: parent.to_path_buf(),
        source,
    })?;

    Ok(Some(parent.to_path_buf()))
}

/// A log file opened for appending, kept open for the sink's lifetime
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    /// Open (or create) `path` in append mode. The directory must already exist.
    pub fn open(path: impl Into<PathBuf>) -> ProvisioningResult<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| ProvisioningError::OpenSink {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line. The whole line is written under the lock.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        let mut file = self.file.lock();
        file.write_all(buf.as_bytes())?;
        file.flush()
    }
}
