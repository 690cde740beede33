//! Locations of bundled resources and the default output folder.
//!
//! Resources ship in a `resources/` folder next to the executable. When run
//! from a build directory the folder is looked up in the current directory
//! instead.

use std::path::{Path, PathBuf};

/// Directory holding the executable, or `.` when it cannot be determined.
pub fn app_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// First of `roots` under which `relative` exists, else `relative` under the
/// first root.
pub fn resolve_in(roots: &[PathBuf], relative: &str) -> PathBuf {
    roots
        .iter()
        .map(|root| root.join(relative))
        .find(|candidate| candidate.exists())
        .unwrap_or_else(|| {
            roots
                .first()
                .map_or_else(|| PathBuf::from(relative), |root| root.join(relative))
        })
}

/// Path of a bundled resource.
pub fn resource_path(relative: &str) -> PathBuf {
    let mut roots = vec![app_root()];
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    resolve_in(&roots, relative)
}

/// Bundled faculty spreadsheet.
pub fn default_spreadsheet() -> PathBuf {
    resource_path("resources/dosen.xlsx")
}

/// Bundled template folder.
pub fn default_template_dir() -> PathBuf {
    resource_path("resources")
}

/// `output/` next to the executable.
pub fn default_output_root() -> PathBuf {
    app_root().join("output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_prefers_existing() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        std::fs::create_dir(second.path().join("resources")).unwrap();

        let roots = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        assert_eq!(
            resolve_in(&roots, "resources"),
            second.path().join("resources")
        );
    }

    #[test]
    fn test_resolve_falls_back_to_first_root() {
        let first = TempDir::new().unwrap();
        let roots = vec![first.path().to_path_buf()];
        assert_eq!(
            resolve_in(&roots, "resources/dosen.xlsx"),
            first.path().join("resources/dosen.xlsx")
        );
        assert_eq!(resolve_in(&[], "x"), PathBuf::from("x"));
    }
}
