//! VGP - project-scoped command router for the Go toolchain
//!
//! ## Architecture
//!
//! ```text
//! vgp.toml lookup → classify argv[1] → (build: rewrite -o) → go / glide
//! ```

mod cli;
mod commands;
mod config;
mod error;
mod exec;
mod project;
mod utils;

use clap::Parser;

use cli::Cli;
use error::VgpError;
use utils::terminal;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.execute() {
        let code = match err.downcast_ref::<VgpError>() {
            Some(vgp) => {
                vgp.display_with_hints();
                vgp.exit_code()
            }
            None => {
                terminal::print_error(&format!("{:#}", err));
                1
            }
        };
        std::process::exit(code);
    }
}
