//! Filesystem utilities for opgen.
//!
//! Generated artifacts are written through a temp file and rename so a
//! failed run never leaves a half-written descriptor behind.

pub mod atomic;

pub use atomic::{atomic_write_file, ensure_dir};
