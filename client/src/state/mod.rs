//! Shared client state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` carries the role and backend address handed over at startup;
//! `list` is the remote-collection state every list page instantiates.

pub mod list;
pub mod session;
