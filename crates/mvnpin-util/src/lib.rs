//! Shared utilities for mvnpin.
//!
//! This crate provides the cross-cutting pieces used by every other mvnpin
//! crate: the unified error type, filesystem helpers and Cargo-style status
//! lines for the terminal.

pub mod errors;
pub mod fs;
pub mod status;
