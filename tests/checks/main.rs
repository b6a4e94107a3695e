//! Integration tests for Layer 2: Checks
//!
//! Tests for frozen family bundles, the unconfigured sentinel, and the
//! provider context.

mod context;
mod unconfigured;
