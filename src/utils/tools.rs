//! Delegate executable naming

use std::path::Path;

/// Anchor a configured tool at the project root.
///
/// A bare name (`go`) is left for the PATH lookup done at spawn time. A
/// relative path (`tools/go`, `./go`) is joined to `root`, so it names the
/// same file whichever directory vgp was started from and whatever cwd the
/// child gets. Absolute paths are kept as they are.
pub fn resolve_tool(tool: &str, root: &Path) -> String {
    let path = Path::new(tool);
    if path.is_relative() && path.components().count() > 1 {
        root.join(path).to_string_lossy().into_owned()
    } else {
        tool.to_string()
    }
}
