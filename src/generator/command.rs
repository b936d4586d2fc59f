//! External generator subprocess runner.
//!
//! The generator command comes from configuration in shell-words syntax, so
//! both `bin/controller-gen` and `go run sigs.k8s.io/controller-gen` work.

use crate::context::ProjectContext;
use crate::error::{OpgenError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// A parsed generator command line, ready to receive task arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorCommand {
    /// Program to execute.
    pub program: PathBuf,
    /// Leading arguments that precede the task arguments.
    pub args: Vec<String>,
}

impl GeneratorCommand {
    /// Parse a generator command line.
    ///
    /// A relative program path with more than one component (e.g.
    /// `bin/controller-gen`) is anchored at the project root; a bare name is
    /// left for `PATH` lookup.
    pub fn parse(ctx: &ProjectContext, command_line: &str) -> Result<Self> {
        let words = shell_words::split(command_line).map_err(|e| {
            OpgenError::MissingPrerequisite(format!(
                "failed to parse generator command '{}': {}\n\
                 Fix: check CONTROLLER_GEN for unmatched quotes.",
                command_line, e
            ))
        })?;

        let mut words = words.into_iter();
        let program = words.next().ok_or_else(|| {
            OpgenError::MissingPrerequisite(format!(
                "generator command is empty after parsing: '{}'",
                command_line
            ))
        })?;

        let program = Path::new(&program);
        let program = if program.is_relative() && program.components().count() > 1 {
            ctx.resolve_path(program)
        } else {
            program.to_path_buf()
        };

        Ok(Self {
            program,
            args: words.collect(),
        })
    }

    /// Render the full command line for logs.
    pub fn display_with(&self, task_args: &[String]) -> String {
        let program = self.program.display().to_string();
        let words = std::iter::once(program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .chain(task_args.iter().map(String::as_str));
        shell_words::join(words)
    }

    /// Run the generator in the project root with inherited stdio.
    ///
    /// A non-zero exit is an `ExternalGeneratorFailure` carrying the
    /// generator's exit code.
    pub fn run(&self, ctx: &ProjectContext, task_args: &[String]) -> Result<()> {
        let command_line = self.display_with(task_args);
        tracing::debug!(cwd = %ctx.root.display(), "running {}", command_line);

        let status = Command::new(&self.program)
            .args(&self.args)
            .args(task_args)
            .current_dir(&ctx.root)
            .status()
            .map_err(|e| OpgenError::ExternalGeneratorFailure {
                message: format!(
                    "failed to execute generator '{}': {}\n\
                     Fix: install controller-gen or point CONTROLLER_GEN at it.",
                    self.program.display(),
                    e
                ),
                exit_code: None,
            })?;

        if status.success() {
            return Ok(());
        }

        let exit_code = status.code();
        let reason = match exit_code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        };
        Err(OpgenError::ExternalGeneratorFailure {
            message: format!("generator failed ({}): {}", reason, command_line),
            exit_code,
        })
    }
}
