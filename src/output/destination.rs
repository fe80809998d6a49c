use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{IoError, Result};

const STDOUT_NAME: &str = "<stdout>";

/// Where the formatted list is written. Dropping it releases the handle.
pub enum Destination {
    Stdout(io::Stdout),
    File {
        path: PathBuf,
        writer: BufWriter<File>,
    },
}

impl Destination {
    pub fn stdout() -> Self {
        Self::Stdout(io::stdout())
    }

    /// Creates or truncates `path`.
    pub fn file(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| IoError::write_error(display(path), e))?;
        Ok(Self::File {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::file(path),
            None => Ok(Self::stdout()),
        }
    }

    pub fn name(&self) -> String {
        match self {
            Self::Stdout(_) => STDOUT_NAME.to_string(),
            Self::File { path, .. } => display(path),
        }
    }

    /// Writes `text` and flushes, consuming the destination so the handle is
    /// closed whether or not the write succeeded.
    pub fn emit(mut self, text: &str) -> Result<()> {
        let result = match &mut self {
            Self::Stdout(stdout) => {
                let mut lock = stdout.lock();
                lock.write_all(text.as_bytes()).and_then(|_| lock.flush())
            }
            Self::File { writer, .. } => writer
                .write_all(text.as_bytes())
                .and_then(|_| writer.flush()),
        };

        result.map_err(|e| IoError::write_error(self.name(), e).into())
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
