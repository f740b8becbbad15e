//! Project configuration
//!
//! A vgp project is marked by a `vgp.toml` file at its root.

mod vgp_toml;

pub use vgp_toml::ProjectConfig;

/// Name of the marker configuration file
pub const CONFIG_FILE_NAME: &str = "vgp.toml";
