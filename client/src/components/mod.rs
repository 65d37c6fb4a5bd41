//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces while reading and
//! writing shared state from Leptos context providers.

pub mod acquisition_modal;
pub mod chat_widget;
pub mod custom_cursor;
pub mod fluid_background;
pub mod nav_bar;
pub mod product_card;
