//! Shared utilities for projprops.
//!
//! This crate provides cross-cutting concerns used by the other projprops
//! crates: the error type, the `.properties` parser and terminal status lines.

pub mod errors;
pub mod progress;
pub mod props;
