//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::Parser;

use crate::commands;
use crate::project::Project;
use crate::utils::terminal;

/// VGP - project-scoped front end for the Go toolchain
///
/// Finds the enclosing project (vgp.toml), exports it as GOPATH and forwards
/// the command to go or glide. `vgp build` always writes to dist/<out>.
#[derive(Parser, Debug)]
#[command(name = "vgp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Echo each delegated command before running it
    #[arg(short, long, env = "VGP_VERBOSE")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Subcommand and arguments, e.g. `build -v ./cmd/app`
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        if self.no_color {
            terminal::disable_colors();
        }

        let project = Project::resolve()?;
        commands::dispatch(&self.args, &project, self.verbose)
    }
}
