//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat`, `acquisition`, `ui`, etc.) so
//! components depend on small focused models. All transitions are plain
//! synchronous methods; components own timers and network calls.

pub mod acquisition;
pub mod catalog;
pub mod chat;
pub mod cursor;
pub mod ui;
