//! Git helpers for locating the project root.
//!
//! Git is optional: outside a repository, or without a `git` binary, callers
//! fall back to the working directory.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the repository top-level directory using `git rev-parse --show-toplevel`.
///
/// Returns `None` when `cwd` is not inside a git repository or git cannot be
/// executed.
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Option<PathBuf> {
    let cwd = cwd.as_ref();

    let output = match Command::new("git")
        .current_dir(cwd)
        .args(["rev-parse", "--show-toplevel"])
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!("failed to execute git: {}", e);
            return None;
        }
    };

    if !output.status.success() {
        tracing::debug!(
            "git rev-parse failed in {}: {}",
            cwd.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if stdout.is_empty() {
        None
    } else {
        Some(PathBuf::from(stdout))
    }
}
