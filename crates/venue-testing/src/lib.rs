//! Testing infrastructure for venue integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestFixture`: isolated data directory plus a preconfigured command
//! - `assertions`: output validation helpers
//! - `fixtures`: sample program placement

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::TestFixture;
