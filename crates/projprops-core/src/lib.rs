//! Core types for projprops.
//!
//! This crate defines the project property store backed by
//! `default.properties` and the user's global configuration.
//!
//! This crate is intentionally free of async code and network I/O.

pub mod config;
pub mod properties;
