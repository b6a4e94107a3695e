//! Frozen schema-family check bundles and their injection context.
//!
//! This crate provides:
//! - [`SchemaChecks`] - The fixed set of check operations UI code calls
//! - [`FamilyChecks`] - A bundle bound to a frozen copy of a schema family
//! - [`Unconfigured`] - The bundle used when no family was provided
//! - [`SchemaCheckContext`] - The provider handle threaded through the UI tree
//! - [`CheckConfig`] - Options applied by bundles and view helpers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod checks;
pub mod config;
pub mod context;
pub mod family;
pub mod unconfigured;

pub use checks::SchemaChecks;
pub use config::CheckConfig;
pub use context::{PkView, PropsView, SchemaCheckContext};
pub use family::{FamilyChecks, make_schema_family_checks};
pub use unconfigured::Unconfigured;
