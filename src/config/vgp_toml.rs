//! vgp.toml configuration parsing
//!
//! The file is a flat list of top-level keys:
//!
//! ```toml
//! package_name = "github.com/you/app"
//! out = "app"
//!
//! # optional
//! build_tool = "go"
//! dep_tool = "glide"
//! strip = true
//! ```
//!
//! Unknown keys are ignored.
//!
//! `build_tool` and `dep_tool` are either bare names looked up in PATH or
//! paths. A relative path is taken from the project root (the directory
//! holding vgp.toml), not from where vgp was started.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::CONFIG_FILE_NAME;
use crate::error::VgpError;

const DEFAULT_BUILD_TOOL: &str = "go";
const DEFAULT_DEP_TOOL: &str = "glide";

/// Raw key/value view of vgp.toml
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    package_name: Option<String>,
    out: Option<String>,
    build_tool: Option<String>,
    dep_tool: Option<String>,
    strip: Option<bool>,
}

/// Validated project configuration, loaded once per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Import path of the package, relative to `src/`
    pub package_name: String,

    /// Artifact file name, relative to `dist/`
    pub out_name: String,

    /// Build tool that receives `build` and unrecognized subcommands
    pub build_tool: String,

    /// Dependency manager that receives `init` stages and dependency keywords
    pub dep_tool: String,

    /// Strip the artifact after a successful build
    pub strip: bool,
}

impl ProjectConfig {
    /// Load configuration from a specific path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        Ok(Self::parse(&content)?)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self, VgpError> {
        let raw: RawConfig = toml::from_str(content).map_err(|e| {
            VgpError::config_error(
                format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e.message()),
                "Values must be quoted strings, e.g. out = \"app\"",
            )
        })?;

        let package_name = required(raw.package_name, "package_name")?;
        let out_name = required(raw.out, "out")?;

        let build_tool = optional_tool(raw.build_tool, "build_tool", DEFAULT_BUILD_TOOL)?;
        let dep_tool = optional_tool(raw.dep_tool, "dep_tool", DEFAULT_DEP_TOOL)?;

        Ok(Self {
            package_name,
            out_name,
            build_tool,
            dep_tool,
            strip: raw.strip.unwrap_or(true),
        })
    }
}

fn required(value: Option<String>, key: &str) -> Result<String, VgpError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(VgpError::missing_key(key)),
    }
}

fn optional_tool(value: Option<String>, key: &str, default: &str) -> Result<String, VgpError> {
    match value {
        None => Ok(default.to_string()),
        Some(v) if v.trim().is_empty() => Err(VgpError::config_error(
            format!("{} must not be empty", key),
            format!("Remove `{}` from {} to use `{}`", key, CONFIG_FILE_NAME, default),
        )),
        Some(v) => Ok(v.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
package_name = "app"
out = "app.bin"
"#;

        let config = ProjectConfig::parse(toml).unwrap();
        assert_eq!(config.package_name, "app");
        assert_eq!(config.out_name, "app.bin");
        assert_eq!(config.build_tool, "go");
        assert_eq!(config.dep_tool, "glide");
        assert!(config.strip);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
package_name = "github.com/acme/tool"
out = "tool"
build_tool = "/usr/local/go/bin/go"
dep_tool = "dep"
strip = false
"#;

        let config = ProjectConfig::parse(toml).unwrap();
        assert_eq!(config.package_name, "github.com/acme/tool");
        assert_eq!(config.build_tool, "/usr/local/go/bin/go");
        assert_eq!(config.dep_tool, "dep");
        assert!(!config.strip);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let toml = r#"
package_name = "app"
out = "app"
maintainer = "someone"
"#;

        assert!(ProjectConfig::parse(toml).is_ok());
    }

    #[test]
    fn test_missing_package_name() {
        let err = ProjectConfig::parse("out = \"app\"").unwrap_err();
        match err {
            VgpError::Config { key, .. } => assert_eq!(key.as_deref(), Some("package_name")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_out() {
        let err = ProjectConfig::parse("package_name = \"app\"").unwrap_err();
        assert!(err.to_string().contains("out is required"));
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let toml = r#"
package_name = "   "
out = "app"
"#;

        let err = ProjectConfig::parse(toml).unwrap_err();
        assert!(err.to_string().contains("package_name is required"));
    }

    #[test]
    fn test_empty_tool_override_rejected() {
        let toml = r#"
package_name = "app"
out = "app"
build_tool = ""
"#;

        let err = ProjectConfig::parse(toml).unwrap_err();
        assert!(err.to_string().contains("build_tool must not be empty"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = ProjectConfig::parse("package_name = app").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error: Failed to parse vgp.toml"));
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "package_name = \"app\"\nout = \"app\"\n").unwrap();

        let config = ProjectConfig::load_from_path(&path).unwrap();
        assert_eq!(config.out_name, "app");
    }

    #[test]
    fn test_load_missing_key_is_downcastable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "out = \"app\"\n").unwrap();

        let err = ProjectConfig::load_from_path(&path).unwrap_err();
        assert!(err.downcast_ref::<VgpError>().is_some());
    }
}
