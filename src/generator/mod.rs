//! Generator invoker: wraps controller-gen for deepcopy and manifest generation.
//!
//! Both operations run the generator from the project root and surface its
//! exit status unchanged. Generated output is not inspected.

mod command;


pub use command::GeneratorCommand;

use crate::config::Config;
use crate::context::{CRD_OUTPUT_DIR, ProjectContext};
use crate::error::{OpgenError, Result};
use std::path::Path;

/// Source tree holding the API type definitions.
pub const API_PATHS: &str = "./api/...";

/// Source tree holding the controllers.
pub const CONTROLLER_PATHS: &str = "./internal/controller/...";

/// Name of the ClusterRole emitted by RBAC generation.
pub const RBAC_ROLE_NAME: &str = "manager-role";

/// Arguments requesting deepcopy generation for the API types.
pub fn deepcopy_args(boilerplate: &Path) -> Vec<String> {
    vec![
        format!("object:headerFile=\"{}\"", boilerplate.display()),
        format!("paths=\"{}\"", API_PATHS),
    ]
}

/// Arguments requesting RBAC, CRD and webhook manifest generation.
pub fn manifest_args() -> Vec<String> {
    vec![
        format!("rbac:roleName={}", RBAC_ROLE_NAME),
        "crd".to_string(),
        "webhook".to_string(),
        format!("paths=\"{}\"", API_PATHS),
        format!("paths=\"{}\"", CONTROLLER_PATHS),
        format!("output:crd:artifacts:config={}", CRD_OUTPUT_DIR),
    ]
}

/// Generate `DeepCopy*` methods for the API types.
///
/// Fails with `MissingPrerequisite`, without starting the generator, when the
/// boilerplate header does not exist or its path is not valid UTF-8.
pub fn generate_deepcopy(ctx: &ProjectContext, config: &Config) -> Result<()> {
    let header = ctx.resolve_path(&config.boilerplate);
    if !header.is_file() {
        return Err(OpgenError::MissingPrerequisite(format!(
            "boilerplate header not found at '{}'\n\
             Fix: create it or set BOILERPLATE_FILE to an existing file.",
            header.display()
        )));
    }
    if config.boilerplate.to_str().is_none() {
        return Err(OpgenError::MissingPrerequisite(format!(
            "boilerplate path '{}' is not valid UTF-8 and cannot be passed to controller-gen\n\
             Fix: set BOILERPLATE_FILE to a UTF-8 path.",
            config.boilerplate.display()
        )));
    }

    let generator = GeneratorCommand::parse(ctx, &config.generator)?;
    generator.run(ctx, &deepcopy_args(&config.boilerplate))?;

    tracing::info!("generated deepcopy code for {}", API_PATHS);
    Ok(())
}

/// Generate RBAC, CRD and webhook manifests into `config/crd/bases`.
pub fn generate_manifests(ctx: &ProjectContext, config: &Config) -> Result<()> {
    let generator = GeneratorCommand::parse(ctx, &config.generator)?;
    generator.run(ctx, &manifest_args())?;

    tracing::info!("generated manifests in {}", ctx.crd_output_dir().display());
    Ok(())
}
