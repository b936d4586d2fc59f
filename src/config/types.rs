//! Recognized configuration parameters and their defaults.

use std::fmt;

/// Default generator command, relative to the project root.
pub const DEFAULT_GENERATOR: &str = "bin/controller-gen";

/// Default boilerplate header, relative to the project root.
pub const DEFAULT_BOILERPLATE: &str = "hack/boilerplate/boilerplate.go.txt";

/// Default Go toolchain version used for the builder image tag.
pub const DEFAULT_GO_VERSION: &str = "1.25";

/// A configuration parameter read from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    /// Command used to run controller-gen.
    Generator,
    /// License header injected into generated Go sources.
    Boilerplate,
    /// Go version tag for the `golang:<tag>-alpine` builder image.
    GoVersion,
}

impl Param {
    /// Every recognized parameter, in resolution order.
    pub const ALL: [Param; 3] = [Param::Generator, Param::Boilerplate, Param::GoVersion];

    /// Environment variable that overrides this parameter.
    pub fn env_var(self) -> &'static str {
        match self {
            Param::Generator => "CONTROLLER_GEN",
            Param::Boilerplate => "BOILERPLATE_FILE",
            Param::GoVersion => "GO_VERSION",
        }
    }

    /// Value used when the environment variable is unset or empty.
    pub fn default_value(self) -> &'static str {
        match self {
            Param::Generator => DEFAULT_GENERATOR,
            Param::Boilerplate => DEFAULT_BOILERPLATE,
            Param::GoVersion => DEFAULT_GO_VERSION,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_var())
    }
}
