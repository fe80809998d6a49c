use std::path::PathBuf;

pub fn get_test_fixture_path(fixture_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(fixture_name)
}

pub fn sample_solution() -> PathBuf {
    get_test_fixture_path("sample").join("Sample.sln")
}

/// Candidate path the pipeline composes for a project in the sample fixture.
pub fn sample_candidate(project_dir: &[&str], output_path: &str, assembly: &str) -> String {
    let dir = project_dir
        .iter()
        .fold(get_test_fixture_path("sample"), |dir, part| dir.join(part));
    format!("{}{}.dll", dir.join(output_path).to_string_lossy(), assembly)
}
