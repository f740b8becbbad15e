//! Command routing
//!
//! The first argument decides where an invocation goes: project bootstrap,
//! build with output rewriting, the dependency manager, or the build tool.

pub mod build;
pub mod init;
pub mod proxy;

use anyhow::Result;

use crate::error::VgpError;
use crate::exec::DelegateCall;
use crate::project::Project;
use build::BuildPlan;
use init::{EditorSettings, InitPlan};

/// Subcommands forwarded verbatim to the dependency manager
pub const DEPENDENCY_KEYWORDS: &[&str] = &["get", "up", "update", "rm", "remove", "info", "tree"];

/// Classification of the first argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// `init` / `create`
    Init,
    /// `build`
    Build,
    /// One of [`DEPENDENCY_KEYWORDS`]
    DependencyManager,
    /// Anything else
    BuildTool,
}

pub fn classify(subcommand: &str) -> CommandKind {
    match subcommand {
        "init" | "create" => CommandKind::Init,
        "build" => CommandKind::Build,
        s if DEPENDENCY_KEYWORDS.contains(&s) => CommandKind::DependencyManager,
        _ => CommandKind::BuildTool,
    }
}

/// What an invocation will do, decided before anything runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// No subcommand
    Nothing,
    Init(InitPlan),
    Build(BuildPlan),
    Delegate(DelegateCall),
}

impl Dispatch {
    /// Plan an invocation; `args` excludes the program name
    pub fn plan(args: &[String], project: &Project) -> Self {
        let Some(subcommand) = args.first() else {
            return Dispatch::Nothing;
        };

        let forward = |tool: &str| proxy::forward(tool, args.to_vec(), &project.paths);

        match classify(subcommand) {
            CommandKind::Init => Dispatch::Init(InitPlan::new(project, EditorSettings::from_env())),
            CommandKind::Build => Dispatch::Build(BuildPlan::new(args, project)),
            CommandKind::DependencyManager => Dispatch::Delegate(forward(&project.config.dep_tool)),
            CommandKind::BuildTool => Dispatch::Delegate(forward(&project.config.build_tool)),
        }
    }

    pub fn execute(&self, project: &Project, verbose: bool) -> Result<()> {
        match self {
            Dispatch::Nothing => Ok(()),
            Dispatch::Init(plan) => plan.execute(verbose),
            Dispatch::Build(plan) => {
                require_package_dir(project)?;
                plan.execute(verbose)
            }
            Dispatch::Delegate(call) => {
                require_package_dir(project)?;
                call.run(verbose)?;
                Ok(())
            }
        }
    }
}

/// Route and run one invocation
pub fn dispatch(args: &[String], project: &Project, verbose: bool) -> Result<()> {
    Dispatch::plan(args, project).execute(project, verbose)
}

// Delegates run inside the package directory, which only `init` creates.
fn require_package_dir(project: &Project) -> Result<(), VgpError> {
    let package_path = &project.paths.package_path;
    if package_path.is_dir() {
        return Ok(());
    }

    Err(VgpError::filesystem(
        package_path,
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "package directory does not exist, run `vgp init` first",
        ),
    ))
}
