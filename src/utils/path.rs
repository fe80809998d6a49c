use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// Converts the `\` separators used inside solution files to the host
/// separator so relative references resolve on every platform.
pub fn to_native_separators(path: &str) -> String {
    path.replace('\\', &MAIN_SEPARATOR.to_string())
}

/// Folds `.` and `..` components without touching the filesystem.
///
/// `..` at the root is dropped, the same way a shell `cd ..` at `/` stays put.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

/// Makes `path` absolute against the current directory and normalizes it.
pub fn full_path(path: &Path) -> std::io::Result<PathBuf> {
    Ok(normalize(&std::path::absolute(path)?))
}
