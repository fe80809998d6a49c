//! Test-project recognition and build metadata extraction.
//!
//! Project files are scanned as plain lines: a project is a test project when
//! any line carries [`TEST_PROJECT_MARKER`], and tag values are captured from
//! the text between an opening tag and the next `</` on the same line.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::utils::text::read_lossy;

/// Project type GUID that MSBuild test projects list in `<ProjectTypeGuids>`.
pub const TEST_PROJECT_MARKER: &str = "3AC096D0-A1C2-E12C-1390-A8335801FDAB";

pub const OUTPUT_PATH_TAG: &str = "<OutputPath>";
pub const ASSEMBLY_NAME_TAG: &str = "<AssemblyName>";

const CLOSING_TAG_START: &str = "</";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub project_file: PathBuf,
    /// One entry per build configuration, in declaration order.
    pub output_paths: Vec<String>,
    /// Empty when the project declares no `<AssemblyName>`.
    pub assembly_name: String,
}

impl ProjectRecord {
    /// Builds a record from project file text, or `None` when the text does
    /// not belong to a test project.
    pub fn from_content(project_file: impl Into<PathBuf>, content: &str) -> Option<Self> {
        if !is_test_project(content) {
            return None;
        }

        let assembly_name = extract_tokens(content, ASSEMBLY_NAME_TAG)
            .into_iter()
            .next()
            .unwrap_or_default();

        Some(Self {
            project_file: project_file.into(),
            output_paths: extract_tokens(content, OUTPUT_PATH_TAG),
            assembly_name,
        })
    }

    pub fn project_dir(&self) -> &Path {
        self.project_file.parent().unwrap_or_else(|| Path::new(""))
    }
}

pub fn is_test_project(content: &str) -> bool {
    content
        .lines()
        .any(|line| line.contains(TEST_PROJECT_MARKER))
}

/// Captures the text following `tag` up to the next `</` on the same line.
pub fn capture_tag_value<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    let start = line.find(tag)? + tag.len();
    let rest = &line[start..];
    let end = rest.find(CLOSING_TAG_START)?;
    Some(&rest[..end])
}

/// Every captured value for `tag`, in line order, duplicates kept.
pub fn extract_tokens(content: &str, tag: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| line.contains(tag))
        .filter_map(|line| capture_tag_value(line, tag))
        .map(str::to_string)
        .collect()
}

/// Reads each project file and keeps the ones marked as test projects.
///
/// An unreadable project file aborts the whole run.
pub fn load_test_projects(project_files: &[PathBuf]) -> Result<Vec<ProjectRecord>> {
    let mut records = Vec::new();

    for project_file in project_files {
        let content = read_lossy(project_file)?;

        match ProjectRecord::from_content(project_file, &content) {
            Some(record) => {
                debug!(
                    "Test project {} ({} output paths, assembly '{}')",
                    project_file.display(),
                    record.output_paths.len(),
                    record.assembly_name
                );
                records.push(record);
            }
            None => debug!("Not a test project: {}", project_file.display()),
        }
    }

    Ok(records)
}
