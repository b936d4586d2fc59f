use crate::context::ProjectContext;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Relative location of the fake generator inside a test project.
pub(crate) const FAKE_GENERATOR: &str = "bin/controller-gen";

/// One recorded run of the fake generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GeneratorRun {
    pub cwd: PathBuf,
    pub args: Vec<String>,
}

/// A scratch operator project rooted in a temp directory.
pub(crate) struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub(crate) fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub(crate) fn root(&self) -> &Path {
        self.dir.path()
    }

    pub(crate) fn ctx(&self) -> ProjectContext {
        ProjectContext::new(self.root())
    }

    /// Write the default boilerplate header.
    pub(crate) fn with_boilerplate(self) -> Self {
        let path = self.root().join("hack/boilerplate/boilerplate.go.txt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "/*\nCopyright YEAR.\n*/\n").unwrap();
        self
    }

    /// Install a fake controller-gen at `bin/controller-gen` that records its
    /// working directory and arguments, then exits with `exit_code`.
    #[cfg(unix)]
    pub(crate) fn with_generator(self, exit_code: i32) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let path = self.root().join(FAKE_GENERATOR);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let script = format!(
            "#!/bin/sh\n\
             log=\"$(dirname \"$0\")/controller-gen.log\"\n\
             echo \"cwd=$(pwd)\" >> \"$log\"\n\
             for arg in \"$@\"; do printf 'arg=%s\\n' \"$arg\" >> \"$log\"; done\n\
             echo -- >> \"$log\"\n\
             exit {}\n",
            exit_code
        );
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        self
    }

    /// Every recorded generator run, in order.
    pub(crate) fn generator_runs(&self) -> Vec<GeneratorRun> {
        let log = self.root().join("bin/controller-gen.log");
        let Ok(content) = fs::read_to_string(log) else {
            return Vec::new();
        };

        let mut runs = Vec::new();
        let mut cwd = PathBuf::new();
        let mut args = Vec::new();
        for line in content.lines() {
            if let Some(dir) = line.strip_prefix("cwd=") {
                cwd = PathBuf::from(dir);
            } else if let Some(arg) = line.strip_prefix("arg=") {
                args.push(arg.to_string());
            } else if line == "--" {
                runs.push(GeneratorRun {
                    cwd: std::mem::take(&mut cwd),
                    args: std::mem::take(&mut args),
                });
            }
        }
        runs
    }

    /// True if anything was created under `_output/`.
    pub(crate) fn has_output(&self) -> bool {
        self.root().join("_output").exists()
    }
}

pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    fs::write(path.join("go.mod"), "module example.com/operator\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    temp_dir
}

fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}
