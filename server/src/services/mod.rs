//! Server-side services.

pub mod relay;
