//! Multibase API library.
//!
//! CRUD over three heterogeneous backends - `PostgreSQL` (users), MongoDB
//! (reviews) and Redis (carts) - under one soft-delete convention: records
//! are flagged inactive, never removed. Every read path filters on the
//! flag; every delete flips it.
//!
//! This crate provides the server as a library so the binary stays thin and
//! the pieces can be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod documents;
pub mod error;
pub mod kv;
pub mod models;
pub mod routes;
pub mod state;
