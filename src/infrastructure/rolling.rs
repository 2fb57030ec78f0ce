//! Size-rotated log file writer.
//!
//! Appends to a single file until the next write would push it past the size
//! threshold. The full file is then renamed with a timestamp suffix
//! (`kitegate.2026-01-31_09-15-02_123456.log`) and a fresh file is started.
//! Rotated files are kept; pruning them is left to the operator.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use parking_lot::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Log file that rotates once it reaches `max_bytes`.
#[derive(Debug)]
pub struct RollingFile {
    path: PathBuf,
    max_bytes: u64,
    state: Mutex<State>,
}

#[derive(Debug)]
struct State {
    file: File,
    written: u64,
}

impl RollingFile {
    /// Open (or create) the log file for appending.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its parent directory cannot be created.
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = open_append(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            path,
            max_bytes,
            state: Mutex::new(State { file, written }),
        })
    }

    /// Path of the active log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn rotate(&self, state: &mut State) -> io::Result<()> {
        state.file.flush()?;
        fs::rename(&self.path, rotated_path(&self.path, Local::now()))?;
        state.file = open_append(&self.path)?;
        state.written = 0;
        Ok(())
    }
}

impl Write for &RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.state.lock();
        // A single oversized record still lands in an empty file.
        if state.written > 0 && state.written + buf.len() as u64 > self.max_bytes {
            self.rotate(&mut state)?;
        }
        let n = state.file.write(buf)?;
        state.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.state.lock().file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingFile {
    type Writer = &'a RollingFile;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Name for a rotated copy of `path`: the timestamp goes between stem and
/// extension.
#[must_use]
pub fn rotated_path(path: &Path, at: DateTime<Local>) -> PathBuf {
    let stamp = at.format("%Y-%m-%d_%H-%M-%S_%6f");
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}.{stamp}.{}", ext.to_string_lossy()),
        None => format!("{stem}.{stamp}"),
    };
    path.with_file_name(name)
}
