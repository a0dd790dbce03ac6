//! Presentation layer
//!
//! Stateless components and widgets that draw `AppState`, plus the
//! keybinding configuration.

pub mod components;
pub mod config;
pub mod widgets;
