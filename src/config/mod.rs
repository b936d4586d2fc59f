//! Environment-derived configuration for opgen.
//!
//! The configuration is resolved once at startup from a fixed set of
//! environment variables, each with a built-in default, and is never
//! mutated afterward.

mod model;
pub mod types;


pub use model::Config;
pub use types::Param;
