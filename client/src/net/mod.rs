//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the relay call and `types` defines the wire schema shared
//! with the server.

pub mod api;
pub mod types;
