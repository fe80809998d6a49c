use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolutionError {
    #[error("malformed project declaration in {} at line {line}: {content}", path.display())]
    MalformedProjectLine {
        path: PathBuf,
        line: usize,
        content: String,
    },
}

impl SolutionError {
    pub fn malformed_project_line(
        path: impl Into<PathBuf>,
        line: usize,
        content: impl Into<String>,
    ) -> Self {
        Self::MalformedProjectLine {
            path: path.into(),
            line,
            content: content.into(),
        }
    }
}
