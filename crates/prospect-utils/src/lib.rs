//! Shared utilities for prospect-rs
//!
//! This crate provides common functionality used across the prospect-rs
//! workspace, including logging setup and environment variable helpers.

pub mod env;
pub mod logging;

pub use env::{EnvError, optional_env, required_env};
pub use logging::init_tracing;
