//! Exit code constants for the opgen CLI.
//!
//! - 0: Success
//! - 1: User error (missing/unknown task, bad component argument)
//! - 2: Command-line usage error, reported by clap before opgen runs
//! - 3: Generator failure without an exit code of its own (signal, spawn error)
//! - 4: Filesystem failure (directory creation, artifact write)
//! - 5: Missing prerequisite (boilerplate header, unusable generator command)
//!
//! When the external generator exits non-zero, its own code is propagated
//! instead of `GENERATOR_FAILURE`.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: missing or unknown task, missing or malformed component.
pub const USER_ERROR: i32 = 1;

/// Exit code clap uses for unknown flags and malformed arguments.
#[cfg_attr(not(test), allow(dead_code))]
pub const USAGE_ERROR: i32 = 2;

/// The external generator failed without reporting an exit code.
pub const GENERATOR_FAILURE: i32 = 3;

/// Filesystem failure while writing generated artifacts.
pub const FILESYSTEM_FAILURE: i32 = 4;

/// A required input file or tool is not available.
pub const PREREQUISITE_FAILURE: i32 = 5;
