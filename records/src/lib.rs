//! # records
//!
//! Shared domain layer for the classboard dashboard. Owns the data that
//! crosses the client/server boundary: raw backend DTOs, the view rows the
//! tables render, per-entity projection functions, form payloads with their
//! validation schemas, and the uniform fetch/action result taxonomy.
//!
//! This crate is UI-free and I/O-free so every contract in it can be unit
//! tested natively.

pub mod datetime;
pub mod endpoints;
pub mod entity;
pub mod forms;
pub mod raw;
pub mod result;
pub mod rows;
pub mod session;
