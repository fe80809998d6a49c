use crate::project::ProjectRecord;

pub const ASSEMBLY_EXTENSION: &str = ".dll";

/// Expected assembly location for one output path of a project.
///
/// The output path token is appended as declared; it normally ends with a
/// separator already, so the assembly name is concatenated directly. An
/// empty token still yields a separator after the project directory.
pub fn candidate_path(record: &ProjectRecord, output_path: &str) -> String {
    let output_dir = record.project_dir().join(output_path);
    format!(
        "{}{}{}",
        output_dir.to_string_lossy(),
        record.assembly_name,
        ASSEMBLY_EXTENSION
    )
}

/// One candidate per (project, output path) pair, project order first.
pub fn candidate_paths(records: &[ProjectRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| {
            record
                .output_paths
                .iter()
                .map(move |output_path| candidate_path(record, output_path))
        })
        .collect()
}
