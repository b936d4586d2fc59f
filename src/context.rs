//! Project root and output path resolution for opgen.
//!
//! Every relative path opgen reads or writes is anchored at the project
//! root: the `--root` override when given, otherwise the git top-level of the
//! working directory, otherwise the working directory itself.

use crate::component::Component;
use crate::error::{OpgenError, Result};
use crate::git;
use std::env;
use std::path::{Path, PathBuf};

/// Build output directory relative to the project root.
pub const OUTPUT_DIR: &str = "_output";

/// Image descriptor directory within [`OUTPUT_DIR`].
pub const IMAGES_DIR: &str = "images";

/// File name of generated build descriptors.
pub const DOCKERFILE_NAME: &str = "Dockerfile";

/// CRD manifest output directory relative to the project root.
pub const CRD_OUTPUT_DIR: &str = "config/crd/bases";

/// Resolved project paths. All paths are absolute when resolved from the
/// working directory.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Root of the operator project; generator runs here.
    pub root: PathBuf,
}

impl ProjectContext {
    /// Create a context for a known project root.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the project context, honoring an explicit root override.
    pub fn resolve(root_override: Option<&Path>) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            OpgenError::FilesystemFailure(format!(
                "failed to get current working directory: {}",
                e
            ))
        })?;

        match root_override {
            Some(root) if root.is_absolute() => Ok(Self::new(root)),
            Some(root) => Ok(Self::new(cwd.join(root))),
            None => Ok(Self::resolve_from(&cwd)),
        }
    }

    /// Resolve the project root from a specific directory.
    pub fn resolve_from<P: AsRef<Path>>(cwd: P) -> Self {
        let cwd = cwd.as_ref();
        match git::get_repo_root(cwd) {
            Some(root) => Self::new(root),
            None => {
                tracing::debug!(
                    "not inside a git repository; using {} as project root",
                    cwd.display()
                );
                Self::new(cwd)
            }
        }
    }

    /// Resolve a possibly-relative path against the project root.
    pub fn resolve_path<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Directory holding per-component image descriptors.
    pub fn images_dir(&self) -> PathBuf {
        self.root.join(OUTPUT_DIR).join(IMAGES_DIR)
    }

    /// Output directory for one component's image descriptor.
    pub fn image_dir(&self, component: &Component) -> PathBuf {
        self.images_dir().join(component.as_str())
    }

    /// Destination of a component's generated Dockerfile.
    pub fn dockerfile_path(&self, component: &Component) -> PathBuf {
        self.image_dir(component).join(DOCKERFILE_NAME)
    }

    /// Directory the generator writes CRD manifests into.
    pub fn crd_output_dir(&self) -> PathBuf {
        self.root.join(CRD_OUTPUT_DIR)
    }
}
