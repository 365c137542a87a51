//! Common test utilities for docker-deploy CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus a fake `docker` on `PATH`
//! - Fixtures: Reusable compose documents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
