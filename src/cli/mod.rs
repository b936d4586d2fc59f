//! CLI argument parsing for opgen.
//!
//! Uses clap derive macros for the option surface. The task itself is taken
//! as a free positional so that missing and unknown tasks are reported by the
//! dispatcher with opgen's own errors and exit codes.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// opgen: code-generation orchestrator for Kubernetes operator projects.
///
/// Tasks:
///   generate-deepcopy              run controller-gen for DeepCopy methods
///   generate-manifests             run controller-gen for RBAC/CRD/webhook manifests
///   generate-dockerfile COMPONENT  write _output/images/COMPONENT/Dockerfile
///
/// Environment: CONTROLLER_GEN, BOILERPLATE_FILE, GO_VERSION.
#[derive(Parser, Debug)]
#[command(name = "opgen")]
#[command(author, version, about, long_about)]
#[command(verbatim_doc_comment)]
pub struct Cli {
    /// Task to run (underscores and hyphens are interchangeable).
    pub task: Option<String>,

    /// Task arguments; generate-dockerfile takes the component name.
    pub args: Vec<String>,

    /// Project root. Defaults to the git top-level of the working directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
