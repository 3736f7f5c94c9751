//! Conflict detection engine: flattens an exported dependency tree by
//! coordinate, finds libraries present at more than one version, and picks
//! the highest version of each.

pub mod conflict;
pub mod graph;
pub mod version;
