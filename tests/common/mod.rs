//! Shared testing utilities for opgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An isolated operator project for driving the `opgen` binary.
#[allow(dead_code)]
pub struct TestProject {
    root: TempDir,
}

#[allow(dead_code)]
impl TestProject {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for the compiled `opgen` binary rooted at this project,
    /// with configuration variables cleared.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("opgen").expect("Failed to locate opgen binary");
        cmd.current_dir(self.root())
            .arg("--root")
            .arg(self.root())
            .env_remove("CONTROLLER_GEN")
            .env_remove("BOILERPLATE_FILE")
            .env_remove("GO_VERSION")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn write_boilerplate(&self) {
        let path = self.root().join("hack/boilerplate/boilerplate.go.txt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "/*\nCopyright YEAR.\n*/\n").unwrap();
    }

    /// Install a fake controller-gen at `relative` that appends its arguments
    /// to `generator.log` in the project root and exits with `exit_code`.
    #[cfg(unix)]
    pub fn install_generator(&self, relative: &str, exit_code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.root().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let script = format!(
            "#!/bin/sh\n\
             for arg in \"$@\"; do printf '%s\\n' \"$arg\" >> generator.log; done\n\
             echo -- >> generator.log\n\
             exit {}\n",
            exit_code
        );
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Argument lists of every fake generator run, in order.
    pub fn generator_runs(&self) -> Vec<Vec<String>> {
        let Ok(log) = fs::read_to_string(self.root().join("generator.log")) else {
            return Vec::new();
        };
        log.split_terminator("--\n")
            .map(|run| run.lines().map(str::to_string).collect())
            .collect()
    }

    pub fn dockerfile(&self, component: &str) -> PathBuf {
        self.root()
            .join("_output/images")
            .join(component)
            .join("Dockerfile")
    }

    pub fn has_output(&self) -> bool {
        self.root().join("_output").exists()
    }
}
