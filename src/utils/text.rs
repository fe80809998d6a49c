use std::fs;
use std::path::Path;

use crate::error::{IoError, Result};

/// Reads a solution or project file as text. Bytes that are not valid UTF-8
/// (legacy ANSI-encoded files) become U+FFFD instead of failing the read.
pub fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| IoError::read_error(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
