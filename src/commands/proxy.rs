//! Verbatim delegation to the build tool or the dependency manager

use crate::exec::DelegateCall;
use crate::utils::paths::ResolvedPaths;
use crate::utils::tools::resolve_tool;

/// Environment variable the delegate tools resolve packages against
pub const WORKSPACE_ENV: &str = "GOPATH";

/// Build a call to `tool` that runs inside the package directory with the
/// project root exported as the workspace
pub fn forward(tool: &str, args: Vec<String>, paths: &ResolvedPaths) -> DelegateCall {
    DelegateCall::new(resolve_tool(tool, &paths.root_path), args)
        .current_dir(&paths.package_path)
        .env(WORKSPACE_ENV, paths.root_path.to_string_lossy())
}
