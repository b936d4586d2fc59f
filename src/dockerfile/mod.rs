//! Artifact templater: per-component multi-stage Dockerfiles.
//!
//! The descriptor has two stages:
//! - `builder` on `golang:<version>-alpine`, which downloads modules before
//!   copying sources so dependency layers survive source edits, then builds a
//!   static binary from `cmd/<component>/main.go` into [`BUILD_OUTPUT_DIR`]
//! - `final` on distroless `static:nonroot`, holding only that binary and
//!   running as `65532:65532`
//!
//! The header carries the current year, so output is only reproducible within
//! a calendar year. Rendering is pure; [`generate_dockerfile`] adds the I/O.


use crate::component::Component;
use crate::config::Config;
use crate::context::ProjectContext;
use crate::error::Result;
use crate::fs::{atomic_write_file, ensure_dir};
use crate::template::{render_template, vars};
use chrono::{Datelike, Local};
use std::path::PathBuf;

/// Base image for the runtime stage.
pub const RUNTIME_IMAGE: &str = "gcr.io/distroless/static:nonroot";

/// Numeric user and group the runtime stage runs as.
pub const RUNTIME_USER: &str = "65532:65532";

/// Builder directory the binary is compiled into. Kept outside `/workspace`
/// so component names never clash with copied sources or module files.
pub const BUILD_OUTPUT_DIR: &str = "/out";

/// Source directories copied into the builder, in copy order.
pub const SOURCE_DIRS: [&str; 4] = ["api", "internal", "cmd", "pkg"];

const DOCKERFILE_TEMPLATE: &str = r#"# Copyright {year}.
#
# Code generated by opgen. DO NOT EDIT.

# Build the {component} binary
FROM golang:{go_version}-alpine AS builder
ARG TARGETOS
ARG TARGETARCH

WORKDIR /workspace
# Copy the Go module manifests and download dependencies first so that
# source changes do not invalidate the cached module layer.
COPY go.mod go.mod
COPY go.sum go.sum
RUN go mod download

# Copy the Go sources
{copy_sources}

# Build a static binary; GOOS/GOARCH default to linux/amd64 when the
# platform build arguments are unset.
RUN CGO_ENABLED=0 GOOS=${{TARGETOS:-linux}} GOARCH=${{TARGETARCH:-amd64}} go build -a -o {build_dir}/{component} ./cmd/{component}/main.go

# Package the binary into a minimal non-root image
FROM {runtime_image} AS final
WORKDIR /
COPY --from=builder {build_dir}/{component} .
USER {runtime_user}

ENTRYPOINT ["/{component}"]
"#;

/// Render the Dockerfile for `component` with an explicit copyright year.
pub fn render_dockerfile(component: &Component, config: &Config, year: i32) -> Result<String> {
    let copy_sources = SOURCE_DIRS
        .iter()
        .map(|dir| format!("COPY {dir}/ {dir}/"))
        .collect::<Vec<_>>()
        .join("\n");

    let variables = vars([
        ("year", year.to_string()),
        ("component", component.to_string()),
        ("go_version", config.go_version.clone()),
        ("copy_sources", copy_sources),
        ("build_dir", BUILD_OUTPUT_DIR.to_string()),
        ("runtime_image", RUNTIME_IMAGE.to_string()),
        ("runtime_user", RUNTIME_USER.to_string()),
    ]);

    Ok(render_template(DOCKERFILE_TEMPLATE, &variables)?)
}

/// Render and write `_output/images/<component>/Dockerfile`, replacing any
/// previous file. Returns the written path.
pub fn generate_dockerfile(
    ctx: &ProjectContext,
    config: &Config,
    component: &Component,
) -> Result<PathBuf> {
    ensure_dir(ctx.image_dir(component))?;

    let content = render_dockerfile(component, config, Local::now().year())?;
    let path = ctx.dockerfile_path(component);
    atomic_write_file(&path, &content)?;

    tracing::info!("wrote {}", path.display());
    Ok(path)
}
