//! Networking modules for the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks straight to the school REST backend from the browser;
//! `actions` goes through this app's own server, which relays the shared
//! update/delete actions and answers in the uniform result shape.

pub mod actions;
pub mod api;
