//! Prerequisite gate for Genesis: dotted version parsing and comparison,
//! probing external tools for their versions, and the minimum-version checks
//! run before commands that shell out to spruce, safe or git.

pub mod check;
pub mod probe;
pub mod version;
