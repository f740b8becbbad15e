//! Error types and helpers for user-friendly error messages
//!
//! Every failure vgp can hit is fatal for the current invocation. The variants
//! here only decide how the failure is reported and which exit code is used.

use std::path::PathBuf;

use thiserror::Error;

/// Custom error types with helpful context and suggestions
#[derive(Error, Debug)]
pub enum VgpError {
    /// Missing or invalid key in vgp.toml
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        key: Option<String>,
        hint: Option<String>,
    },

    /// No marker file between the start directory and the filesystem root
    #[error("Not a vgp project: {marker} not found in {} or any parent directory", start.display())]
    NotAProject { marker: &'static str, start: PathBuf },

    /// Directory creation or file write failure
    #[error("Filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Delegate could not be started or did not exit successfully
    #[error("{}", delegation_message(program, args, *exit_code, source.as_ref()))]
    Delegation {
        program: String,
        args: Vec<String>,
        exit_code: Option<i32>,
        #[source]
        source: Option<std::io::Error>,
    },
}

fn delegation_message(
    program: &str,
    args: &[String],
    exit_code: Option<i32>,
    source: Option<&std::io::Error>,
) -> String {
    let command_line = if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    };

    match (source, exit_code) {
        (Some(e), _) => format!("Failed to execute `{}`: {}", command_line, e),
        (None, Some(code)) => format!("`{}` exited with code {}", command_line, code),
        (None, None) => format!("`{}` was terminated by a signal", command_line),
    }
}

impl VgpError {
    /// Create a configuration error for a required key
    pub fn missing_key(key: &str) -> Self {
        Self::Config {
            message: format!("{} is required", key),
            key: Some(key.to_string()),
            hint: Some(hints::required_key(key)),
        }
    }

    /// Create a configuration error with a hint
    pub fn config_error(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            key: None,
            hint: Some(hint.into()),
        }
    }

    /// Create a filesystem error for a path
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Create a delegation error for a process that ran but failed
    pub fn delegation_failed(program: &str, args: &[String], exit_code: Option<i32>) -> Self {
        Self::Delegation {
            program: program.to_string(),
            args: args.to_vec(),
            exit_code,
            source: None,
        }
    }

    /// Create a delegation error for a process that could not be started
    pub fn spawn_failed(program: &str, args: &[String], source: std::io::Error) -> Self {
        Self::Delegation {
            program: program.to_string(),
            args: args.to_vec(),
            exit_code: None,
            source: Some(source),
        }
    }

    /// Process exit code for this error.
    ///
    /// A delegate that exited with a non-zero code is mirrored; everything
    /// else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            VgpError::Delegation {
                exit_code: Some(code),
                source: None,
                ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }

    fn hint(&self) -> Option<String> {
        match self {
            VgpError::Config { hint, .. } => hint.clone(),
            VgpError::NotAProject { .. } => Some(hints::not_a_project().to_string()),
            VgpError::Delegation {
                program,
                source: Some(e),
                ..
            } if e.kind() == std::io::ErrorKind::NotFound => Some(hints::tool(program)),
            VgpError::Filesystem { .. } | VgpError::Delegation { .. } => None,
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("{} {}", style("ERROR:").red().bold(), self);

        if let Some(h) = self.hint() {
            eprintln!("{} {}", style("HINT:").yellow().bold(), h);
        }
    }
}

/// Common error hints
pub mod hints {
    use crate::config::CONFIG_FILE_NAME;

    pub fn required_key(key: &str) -> String {
        format!(
            "Add a non-empty `{}` entry to {}, for example:\n  {} = \"value\"",
            key, CONFIG_FILE_NAME, key
        )
    }

    pub fn not_a_project() -> &'static str {
        "Run vgp from inside a project directory that contains vgp.toml.\n\
         \n\
         A minimal vgp.toml looks like:\n  \
         package_name = \"github.com/you/app\"\n  \
         out = \"app\""
    }

    /// Get hint for a missing Go toolchain
    pub fn go() -> &'static str {
        "Install Go from https://go.dev/dl/ or use your package manager:\n\
         • macOS: brew install go\n\
         • Ubuntu: sudo apt install golang-go\n\
         • Windows: winget install GoLang.Go"
    }

    /// Get hint for a missing glide
    pub fn glide() -> &'static str {
        "Install glide from https://github.com/Masterminds/glide:\n\
         • macOS: brew install glide\n\
         • Or: curl https://glide.sh/get | sh"
    }

    /// Get hint for a missing strip
    pub fn strip() -> &'static str {
        "Install binutils to get `strip`, or set `strip = false` in vgp.toml"
    }

    /// Install hint for a delegate that could not be found
    pub fn tool(program: &str) -> String {
        let name = std::path::Path::new(program)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(program);
        match name {
            "go" => go().to_string(),
            "glide" => glide().to_string(),
            "strip" => strip().to_string(),
            other => format!("Make sure `{}` is installed and available in PATH", other),
        }
    }
}
