//! Project discovery
//!
//! A project is the nearest directory, walking up from the current one, that
//! contains vgp.toml. Its configuration and layout are resolved once and
//! passed by reference to every command.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{ProjectConfig, CONFIG_FILE_NAME};
use crate::utils::paths::{find_project_root_from, ResolvedPaths};

#[derive(Debug, Clone)]
pub struct Project {
    pub config: ProjectConfig,
    pub paths: ResolvedPaths,
}

impl Project {
    /// Resolve the project containing the current directory
    pub fn resolve() -> Result<Self> {
        let current_dir = std::env::current_dir().context("Failed to get current directory")?;
        Self::resolve_from(&current_dir)
    }

    /// Resolve the project containing `start`
    pub fn resolve_from(start: &Path) -> Result<Self> {
        let root = find_project_root_from(start)?;
        Self::load(&root)
    }

    /// Load a project from its root directory
    pub fn load(root: &Path) -> Result<Self> {
        let config = ProjectConfig::load_from_path(root.join(CONFIG_FILE_NAME))?;
        let paths = ResolvedPaths::new(root, &config);

        Ok(Self { config, paths })
    }
}
