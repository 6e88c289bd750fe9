//! Shared utilities for Genesis.
//!
//! This crate provides cross-cutting concerns used by all other Genesis crates:
//! the error taxonomy and its exit codes, filesystem helpers, process
//! spawning, and terminal output.

pub mod errors;
pub mod fs;
pub mod process;
pub mod term;
