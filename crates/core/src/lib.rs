//! Multibase Core - Shared types library.
//!
//! This crate provides common types used across all Multibase components:
//! - `api` - The HTTP API server
//! - `cli` - Command-line tools for migrations and diagnostics
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and validated emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
