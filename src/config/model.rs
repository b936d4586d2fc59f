//! Config struct definition and resolution.

use super::types::Param;
use std::ffi::OsString;
use std::path::PathBuf;

/// Resolved configuration, shared read-only by every task handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Generator command line (shell-words syntax), e.g. `bin/controller-gen`.
    pub generator: String,

    /// Boilerplate header file; relative paths resolve against the project root.
    pub boilerplate: PathBuf,

    /// Go version tag for the builder stage base image.
    pub go_version: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator: Param::Generator.default_value().to_string(),
            boilerplate: PathBuf::from(Param::Boilerplate.default_value()),
            go_version: Param::GoVersion.default_value().to_string(),
        }
    }
}

impl Config {
    /// Resolve the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var_os(name))
    }

    /// Resolve the configuration through an arbitrary variable lookup.
    ///
    /// A value that is absent, or empty after trimming, falls back to the
    /// parameter's default. A non-UTF-8 boilerplate path is kept as given; a
    /// non-UTF-8 value for a textual parameter is reported and replaced by the
    /// default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let text = |param: Param| {
            let value = match lookup(param.env_var()).map(OsString::into_string) {
                Some(Ok(value)) => non_blank(&value),
                Some(Err(raw)) => {
                    tracing::warn!(
                        "{} is not valid UTF-8 ({}); using default '{}'",
                        param,
                        raw.to_string_lossy(),
                        param.default_value()
                    );
                    None
                }
                None => None,
            };
            value.unwrap_or_else(|| param.default_value().to_string())
        };

        let boilerplate = match lookup(Param::Boilerplate.env_var()).map(OsString::into_string) {
            Some(Ok(value)) => non_blank(&value).map(PathBuf::from),
            Some(Err(raw)) => Some(PathBuf::from(raw)),
            None => None,
        };

        Self {
            generator: text(Param::Generator),
            boilerplate: boilerplate
                .unwrap_or_else(|| PathBuf::from(Param::Boilerplate.default_value())),
            go_version: text(Param::GoVersion),
        }
    }

    /// Returns the resolved value of a parameter as a string.
    pub fn value(&self, param: Param) -> String {
        match param {
            Param::Generator => self.generator.clone(),
            Param::Boilerplate => self.boilerplate.display().to_string(),
            Param::GoVersion => self.go_version.clone(),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
