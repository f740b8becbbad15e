//! Path utilities for vgp

use std::path::{Path, PathBuf};

use crate::config::{ProjectConfig, CONFIG_FILE_NAME};
use crate::error::VgpError;

/// Canonical project layout, derived once from the root and the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Directory containing vgp.toml
    pub root_path: PathBuf,
    /// `{root}/src`
    pub src_path: PathBuf,
    /// `{root}/dist`
    pub dist_path: PathBuf,
    /// `{root}/src/{package_name}`
    pub package_path: PathBuf,
    /// `{root}/dist/{out}`
    pub out_path: PathBuf,
}

impl ResolvedPaths {
    pub fn new(root: &Path, config: &ProjectConfig) -> Self {
        let src_path = root.join("src");
        let dist_path = root.join("dist");
        let package_path = src_path.join(&config.package_name);
        let out_path = dist_path.join(&config.out_name);

        Self {
            root_path: root.to_path_buf(),
            src_path,
            dist_path,
            package_path,
            out_path,
        }
    }

    /// Directory for generated editor settings
    pub fn vscode_path(&self) -> PathBuf {
        self.root_path.join(".vscode")
    }
}

/// Find the project root starting from a specific directory
///
/// `start` should be absolute; the search ends at the filesystem root.
pub fn find_project_root_from(start: &Path) -> Result<PathBuf, VgpError> {
    let mut dir = start;
    loop {
        if dir.join(CONFIG_FILE_NAME).is_file() {
            return Ok(dir.to_path_buf());
        }

        match dir.parent() {
            Some(parent) if parent != dir => dir = parent,
            _ => {
                return Err(VgpError::NotAProject {
                    marker: CONFIG_FILE_NAME,
                    start: start.to_path_buf(),
                })
            }
        }
    }
}

/// Ensure a directory exists
pub fn ensure_dir(path: &Path) -> Result<(), VgpError> {
    if !path.is_dir() {
        std::fs::create_dir_all(path).map_err(|e| VgpError::filesystem(path, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config(package_name: &str, out: &str) -> ProjectConfig {
        ProjectConfig {
            package_name: package_name.to_string(),
            out_name: out.to_string(),
            build_tool: "go".to_string(),
            dep_tool: "glide".to_string(),
            strip: true,
        }
    }

    #[test]
    fn test_resolved_paths_layout() {
        let paths = ResolvedPaths::new(Path::new("/work/proj"), &config("app", "app.bin"));

        assert_eq!(paths.root_path, PathBuf::from("/work/proj"));
        assert_eq!(paths.src_path, PathBuf::from("/work/proj/src"));
        assert_eq!(paths.dist_path, PathBuf::from("/work/proj/dist"));
        assert_eq!(paths.package_path, PathBuf::from("/work/proj/src/app"));
        assert_eq!(paths.out_path, PathBuf::from("/work/proj/dist/app.bin"));
        assert_eq!(paths.vscode_path(), PathBuf::from("/work/proj/.vscode"));
    }

    #[test]
    fn test_nested_package_name() {
        let paths = ResolvedPaths::new(
            Path::new("/work/proj"),
            &config("github.com/acme/tool", "tool"),
        );
        assert_eq!(
            paths.package_path,
            PathBuf::from("/work/proj/src/github.com/acme/tool")
        );
    }

    #[test]
    fn test_find_root_in_start_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "").unwrap();

        let root = find_project_root_from(temp_dir.path()).unwrap();
        assert_eq!(root, temp_dir.path());
    }

    #[test]
    fn test_find_root_from_deep_subdirectory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "").unwrap();
        let deep = temp_dir.path().join("src/app/internal/util");
        fs::create_dir_all(&deep).unwrap();

        let root = find_project_root_from(&deep).unwrap();
        assert_eq!(root, temp_dir.path());
    }

    #[test]
    fn test_nearest_marker_wins() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "").unwrap();
        let inner = temp_dir.path().join("vendor/other");
        fs::create_dir_all(&inner).unwrap();
        fs::write(inner.join(CONFIG_FILE_NAME), "").unwrap();

        let pkg = inner.join("pkg");
        fs::create_dir_all(&pkg).unwrap();

        let root = find_project_root_from(&pkg).unwrap();
        assert_eq!(root, inner);
    }

    #[test]
    fn test_directory_named_like_marker_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a");
        fs::create_dir_all(nested.join(CONFIG_FILE_NAME)).unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "").unwrap();

        let root = find_project_root_from(&nested).unwrap();
        assert_eq!(root, temp_dir.path());
    }

    #[test]
    fn test_search_terminates_at_filesystem_root() {
        let temp_dir = TempDir::new().unwrap();
        let deep = temp_dir.path().join("x/y/z");
        fs::create_dir_all(&deep).unwrap();

        // Only meaningful when no ancestor of the temp dir is itself a project.
        if find_project_root_from(temp_dir.path()).is_ok() {
            return;
        }

        let err = find_project_root_from(&deep).unwrap_err();
        assert!(matches!(err, VgpError::NotAProject { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_search_from_filesystem_root() {
        let root = Path::new("/");
        if root.join(CONFIG_FILE_NAME).exists() {
            return;
        }

        let err = find_project_root_from(root).unwrap_err();
        assert!(matches!(err, VgpError::NotAProject { .. }));
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let dist = temp_dir.path().join("dist/bin");

        ensure_dir(&dist).unwrap();
        assert!(dist.is_dir());
        ensure_dir(&dist).unwrap();
        assert!(dist.is_dir());
    }

    #[test]
    fn test_ensure_dir_fails_on_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("dist");
        fs::write(&blocker, "not a directory").unwrap();

        let err = ensure_dir(&blocker.join("bin")).unwrap_err();
        assert!(matches!(err, VgpError::Filesystem { .. }));
    }
}
