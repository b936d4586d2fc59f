//! The closed set of generation tasks.

use crate::error::{OpgenError, Result};
use std::fmt;
use std::str::FromStr;

/// A generation task selected once per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// Run controller-gen to emit `DeepCopy*` methods for the API types.
    GenerateDeepcopy,
    /// Run controller-gen to emit RBAC, CRD and webhook manifests.
    GenerateManifests,
    /// Render the container build descriptor for one component.
    GenerateDockerfile,
}

impl Task {
    pub const ALL: [Task; 3] = [
        Task::GenerateDeepcopy,
        Task::GenerateManifests,
        Task::GenerateDockerfile,
    ];

    /// Canonical (hyphenated) task name.
    pub fn name(self) -> &'static str {
        match self {
            Task::GenerateDeepcopy => "generate-deepcopy",
            Task::GenerateManifests => "generate-manifests",
            Task::GenerateDockerfile => "generate-dockerfile",
        }
    }

    /// Number of positional arguments the task consumes.
    pub fn arity(self) -> usize {
        match self {
            Task::GenerateDeepcopy | Task::GenerateManifests => 0,
            Task::GenerateDockerfile => 1,
        }
    }

    /// Resolve an optional task name from the command line.
    pub fn resolve(name: Option<&str>) -> Result<Self> {
        match name {
            Some(name) if !name.trim().is_empty() => name.parse(),
            _ => Err(OpgenError::MissingTask(Self::expected_names())),
        }
    }

    /// Comma-separated list of canonical task names, for error messages.
    pub fn expected_names() -> String {
        Self::ALL
            .iter()
            .map(|task| task.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Task {
    type Err = OpgenError;

    /// Parse a task name; `_` and `-` are interchangeable.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|task| task.name() == normalized)
            .ok_or_else(|| OpgenError::UnknownTask {
                name: s.to_string(),
                expected: Self::expected_names(),
            })
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
