//! Reads a `.sln` file and lists the project files it declares.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IoError, Result, SolutionError};
use crate::utils::path::{normalize, to_native_separators};
use crate::utils::text::read_lossy;

pub const PROJECT_LINE_PREFIX: &str = "Project(";
pub const PROJECT_FILE_EXTENSION: &str = ".csproj";

/// Extracts the relative project paths declared by `Project(` lines.
///
/// A declaration looks like
/// `Project("{TYPE}") = "Name", "..\Dir\Name.csproj", "{ID}"`; the second
/// comma-separated field holds the quoted path. Entries that are not
/// project files (solution folders, website projects) are dropped.
pub fn parse_project_references(content: &str, solution_path: &Path) -> Result<Vec<String>> {
    let mut references = Vec::new();

    for (index, line) in content.lines().enumerate() {
        if !line.trim_start().starts_with(PROJECT_LINE_PREFIX) {
            continue;
        }

        let reference = quoted_path_field(line).ok_or_else(|| {
            SolutionError::malformed_project_line(solution_path, index + 1, line.trim())
        })?;

        if reference.ends_with(PROJECT_FILE_EXTENSION) {
            references.push(reference.to_string());
        }
    }

    Ok(references)
}

fn quoted_path_field(line: &str) -> Option<&str> {
    let field = line.split(',').nth(1)?.trim_start();
    let rest = field.strip_prefix('"')?;
    let end = rest.find('"')?;
    Some(&rest[..end])
}

/// Returns the absolute paths of every project file referenced by the
/// solution that exists on disk, in declaration order.
///
/// `solution_path` is expected to be absolute; references are resolved
/// against its parent directory.
pub fn project_files(solution_path: &Path) -> Result<Vec<PathBuf>> {
    if !solution_path.is_file() {
        return Err(IoError::file_not_found(solution_path).into());
    }

    let content = read_lossy(solution_path)?;
    let solution_dir = solution_path.parent().unwrap_or_else(|| Path::new(""));

    let files = parse_project_references(&content, solution_path)?
        .into_iter()
        .map(|reference| normalize(&solution_dir.join(to_native_separators(&reference))))
        .filter(|path| {
            let exists = path.is_file();
            if !exists {
                debug!("Skipping missing project {}", path.display());
            }
            exists
        })
        .collect();

    Ok(files)
}
