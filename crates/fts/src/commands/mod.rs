//! CLI command implementations.

mod build;
mod extract;

pub(crate) use build::BuildArgs;
pub(crate) use extract::ExtractArgs;
