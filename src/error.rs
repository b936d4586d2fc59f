//! Error types for the opgen CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::template::TemplateError;
use thiserror::Error;

/// Main error type for opgen operations.
///
/// Every variant is terminal for the invocation and maps to an exit code.
#[derive(Error, Debug)]
pub enum OpgenError {
    /// No task name was given on the command line.
    #[error("no task given. Expected one of: {0}")]
    MissingTask(String),

    /// The task name does not match any known task.
    #[error("unknown task '{name}'. Expected one of: {expected}")]
    UnknownTask { name: String, expected: String },

    /// `generate-dockerfile` was invoked without a component.
    #[error("generate-dockerfile requires a component argument, e.g. `opgen generate-dockerfile manager`")]
    MissingComponentArgument,

    /// The component cannot be used as a single output path segment.
    #[error(
        "invalid component '{0}': must be a single path segment of letters, digits, '.', '_' or '-'"
    )]
    InvalidComponent(String),

    /// A required file or tool is not available.
    #[error("missing prerequisite: {0}")]
    MissingPrerequisite(String),

    /// The external generator failed or could not be started.
    #[error("{message}")]
    ExternalGeneratorFailure {
        message: String,
        exit_code: Option<i32>,
    },

    /// Creating a directory or writing an artifact failed.
    #[error("{0}")]
    FilesystemFailure(String),

    /// A built-in template could not be rendered.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}

impl OpgenError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// A generator that exited non-zero has its own code propagated.
    pub fn exit_code(&self) -> i32 {
        match self {
            OpgenError::MissingTask(_)
            | OpgenError::UnknownTask { .. }
            | OpgenError::MissingComponentArgument
            | OpgenError::InvalidComponent(_)
            | OpgenError::Template(_) => exit_codes::USER_ERROR,
            OpgenError::MissingPrerequisite(_) => exit_codes::PREREQUISITE_FAILURE,
            OpgenError::ExternalGeneratorFailure { exit_code, .. } => exit_code
                .filter(|code| *code != exit_codes::SUCCESS)
                .unwrap_or(exit_codes::GENERATOR_FAILURE),
            OpgenError::FilesystemFailure(_) => exit_codes::FILESYSTEM_FAILURE,
        }
    }
}

/// Result type alias for opgen operations.
pub type Result<T> = std::result::Result<T, OpgenError>;
