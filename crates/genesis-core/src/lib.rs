//! Core of Genesis: global options, the command registry and dispatch router,
//! per-command usage templates, deployment repository layout, and kit
//! references.

pub mod kit;
pub mod options;
pub mod repo;
pub mod router;
pub mod usage;

/// Version of Genesis written into new repositories and shown in help.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
