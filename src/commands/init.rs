//! Init command implementation
//!
//! Bootstraps a project: creates the package directory, writes VS Code
//! settings pointing the Go extension at the project workspace, then runs the
//! dependency manager's `create` and `install` stages.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use super::proxy::{forward, WORKSPACE_ENV};
use crate::error::VgpError;
use crate::exec::Pipeline;
use crate::project::Project;
use crate::utils::paths::ensure_dir;
use crate::utils::terminal;

const SETTINGS_FILE_NAME: &str = "settings.json";

/// Contents of `.vscode/settings.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorSettings {
    #[serde(rename = "go.path")]
    pub go_path: String,

    /// The user's own GOPATH, where editor tooling is installed
    #[serde(rename = "go.toolsGopath")]
    pub tools_gopath: String,
}

impl EditorSettings {
    pub fn new(tools_gopath: Option<String>) -> Self {
        Self {
            go_path: "${workspaceRoot}".to_string(),
            tools_gopath: tools_gopath.unwrap_or_default(),
        }
    }

    /// Build settings from the inherited workspace variable
    pub fn from_env() -> Self {
        Self::new(std::env::var(WORKSPACE_ENV).ok())
    }

    /// Write settings as pretty JSON, replacing any existing file
    pub fn write(&self, path: &Path) -> Result<(), VgpError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| VgpError::filesystem(path, e.into()))?;
        std::fs::write(path, content).map_err(|e| VgpError::filesystem(path, e))
    }
}

/// Everything `vgp init` does, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitPlan {
    pub package_path: PathBuf,
    pub settings_dir: PathBuf,
    pub settings: EditorSettings,
    pub pipeline: Pipeline,
}

impl InitPlan {
    pub fn new(project: &Project, settings: EditorSettings) -> Self {
        let paths = &project.paths;
        let dep_tool = &project.config.dep_tool;

        let stages = vec![
            forward(
                dep_tool,
                vec![
                    "create".to_string(),
                    "--skip-import".to_string(),
                    "--non-interactive".to_string(),
                ],
                paths,
            ),
            forward(
                dep_tool,
                vec![
                    "install".to_string(),
                    "--skip-test".to_string(),
                    "--strip-vendor".to_string(),
                ],
                paths,
            ),
        ];

        Self {
            package_path: paths.package_path.clone(),
            settings_dir: paths.vscode_path(),
            settings,
            pipeline: Pipeline::new(stages),
        }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.settings_dir.join(SETTINGS_FILE_NAME)
    }

    /// Create directories and write editor settings
    pub fn prepare(&self) -> Result<(), VgpError> {
        ensure_dir(&self.package_path)?;
        ensure_dir(&self.settings_dir)?;

        if self.settings.tools_gopath.is_empty() {
            terminal::print_warning(&format!(
                "{} is not set; go.toolsGopath will be empty",
                WORKSPACE_ENV
            ));
        }
        self.settings.write(&self.settings_path())
    }

    pub fn execute(&self, verbose: bool) -> Result<()> {
        self.prepare()?;
        self.pipeline.run(verbose)?;

        terminal::print_success(&format!(
            "Initialized package at {}",
            self.package_path.display()
        ));
        Ok(())
    }
}
