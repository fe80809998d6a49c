//! Solution → test projects → candidate assemblies → formatted list.

use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::info;

use crate::compose::candidate_paths;
use crate::error::{IoError, Result};
use crate::output::{format_candidates, Destination};
use crate::project::{load_test_projects, ProjectRecord};
use crate::solution::project_files;
use crate::utils::path::full_path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub solution: PathBuf,
    pub output_file: Option<PathBuf>,
    pub filter: String,
    pub delimiter: String,
}

/// Everything up to, but not including, writing the result.
pub fn render(options: &Options) -> Result<String> {
    let solution =
        full_path(&options.solution).map_err(|e| IoError::read_error(&options.solution, e))?;

    let projects = project_files(&solution)?;
    info!(
        "Found {} project files in {}",
        projects.len(),
        solution.display()
    );

    let records = load_test_projects(&projects)?;
    info!("{} of them are test projects", records.len());
    log_output_paths(&records);

    let candidates = candidate_paths(&records);
    Ok(format_candidates(
        &candidates,
        &options.filter,
        &options.delimiter,
    ))
}

pub fn run(options: &Options) -> Result<()> {
    let text = render(options)?;
    Destination::open(options.output_file.as_deref())?.emit(&text)
}

fn log_output_paths(records: &[ProjectRecord]) {
    let unique: BTreeSet<&str> = records
        .iter()
        .flat_map(|record| record.output_paths.iter().map(String::as_str))
        .collect();

    for output_path in unique {
        info!("Output path: {output_path}");
    }
}
