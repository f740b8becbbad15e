//! Build command: output-path rewriting and artifact stripping
//!
//! Whatever the user passes, `vgp build` writes its artifact to
//! `{root}/dist/{out}`. The `-o` flag is located and its value forced to that
//! path, or the flag is appended when absent.

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::proxy::forward;
use crate::exec::DelegateCall;
use crate::project::Project;
use crate::utils::paths::ensure_dir;

/// Flag the build tool uses for the artifact destination
pub const OUTPUT_FLAG: &str = "-o";

const FLAG_PREFIX: &str = "-";

/// Where the first output flag sits and what follows it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFlag {
    /// No output flag anywhere
    Missing,
    /// Flag is the last token
    Trailing(usize),
    /// Flag is directly followed by another flag
    BeforeFlag(usize),
    /// Flag is followed by a value
    WithValue(usize),
}

/// Locate the first output flag in `args`
pub fn find_output_flag(args: &[String]) -> OutputFlag {
    let Some(index) = args.iter().position(|arg| arg == OUTPUT_FLAG) else {
        return OutputFlag::Missing;
    };

    match args.get(index + 1) {
        None => OutputFlag::Trailing(index),
        Some(next) if next.starts_with(FLAG_PREFIX) => OutputFlag::BeforeFlag(index),
        Some(_) => OutputFlag::WithValue(index),
    }
}

/// Return a copy of `args` whose output flag points at `output_path`
///
/// `args` starts with the subcommand (`build`). The input is never modified
/// and the rewrite never fails.
pub fn rewrite_output_args(args: &[String], output_path: &Path) -> Vec<String> {
    let output = output_path.to_string_lossy().into_owned();
    let mut rewritten = args.to_vec();

    match find_output_flag(args) {
        OutputFlag::Missing => {
            rewritten.push(OUTPUT_FLAG.to_string());
            rewritten.push(output);
        }
        OutputFlag::Trailing(_) => rewritten.push(output),
        OutputFlag::BeforeFlag(index) => rewritten.insert(index + 1, output),
        OutputFlag::WithValue(index) => rewritten[index + 1] = output,
    }

    rewritten
}

/// Delegate calls for one `vgp build` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    /// Directory that must exist before the build runs
    pub output_dir: PathBuf,
    pub build: DelegateCall,
    pub strip: Option<DelegateCall>,
}

impl BuildPlan {
    pub fn new(args: &[String], project: &Project) -> Self {
        let paths = &project.paths;
        let build_args = rewrite_output_args(args, &paths.out_path);

        let strip = project.config.strip.then(|| {
            forward(
                "strip",
                vec!["-s".to_string(), paths.out_path.to_string_lossy().into_owned()],
                paths,
            )
        });

        Self {
            output_dir: paths
                .out_path
                .parent()
                .unwrap_or(&paths.dist_path)
                .to_path_buf(),
            build: forward(&project.config.build_tool, build_args, paths),
            strip,
        }
    }

    pub fn execute(&self, verbose: bool) -> Result<()> {
        ensure_dir(&self.output_dir)?;

        self.build.run(verbose)?;

        if let Some(strip) = &self.strip {
            strip.run(verbose)?;
        }

        Ok(())
    }
}
