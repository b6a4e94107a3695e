//! Integration tests for Layer 1: Schema
//!
//! Tests for registry lookup, property reads, write checks, and relationships.

mod writes;
