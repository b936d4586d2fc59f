//! Task dispatcher.
//!
//! A [`Request`] is the validated form of the command line: the task plus
//! any argument it needs. Validation happens before the project context is
//! resolved, so a bad invocation has no filesystem or process side effects.
//! [`dispatch`] then routes the request to exactly one handler.


use crate::component::Component;
use crate::config::{Config, Param};
use crate::context::ProjectContext;
use crate::dockerfile;
use crate::error::{OpgenError, Result};
use crate::generator;
use crate::task::Task;

/// A validated invocation, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    GenerateDeepcopy,
    GenerateManifests,
    GenerateDockerfile(Component),
}

impl Request {
    /// Validate the task name and its arguments.
    ///
    /// Arguments beyond what the task consumes are ignored with a warning.
    pub fn from_args(task: Option<&str>, args: &[String]) -> Result<Self> {
        let task = Task::resolve(task)?;

        if args.len() > task.arity() {
            tracing::warn!(
                "ignoring extra arguments for {}: {}",
                task,
                args[task.arity()..].join(" ")
            );
        }

        match task {
            Task::GenerateDeepcopy => Ok(Request::GenerateDeepcopy),
            Task::GenerateManifests => Ok(Request::GenerateManifests),
            Task::GenerateDockerfile => {
                let raw = args.first().ok_or(OpgenError::MissingComponentArgument)?;
                Ok(Request::GenerateDockerfile(Component::parse(raw)?))
            }
        }
    }

    pub fn task(&self) -> Task {
        match self {
            Request::GenerateDeepcopy => Task::GenerateDeepcopy,
            Request::GenerateManifests => Task::GenerateManifests,
            Request::GenerateDockerfile(_) => Task::GenerateDockerfile,
        }
    }
}

/// Run the handler for `request` and return its result unchanged.
pub fn dispatch(request: &Request, ctx: &ProjectContext, config: &Config) -> Result<()> {
    tracing::info!("running {} in {}", request.task(), ctx.root.display());
    for param in Param::ALL {
        tracing::debug!("{} = {}", param, config.value(param));
    }

    match request {
        Request::GenerateDeepcopy => generator::generate_deepcopy(ctx, config),
        Request::GenerateManifests => generator::generate_manifests(ctx, config),
        Request::GenerateDockerfile(component) => {
            dockerfile::generate_dockerfile(ctx, config, component).map(|_| ())
        }
    }
}
