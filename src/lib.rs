//! # homedash - a personal dashboard for the terminal
//!
//! A clock, an editable title and notes pad, a list of quick links and three
//! live panels (weather, a random photo, a stock quote), drawn with Ratatui.
//! Title, notes and links persist in a small key-value store between runs.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): Application state
//! - **Message** (`core::msg`, `core::raw_msg`): Events that can change the state
//! - **Update** (`core::update`): State transitions, returning commands
//! - **Command** (`core::cmd`): Side effects (HTTP, clock, opening URLs)
//! - **View** (`presentation::components`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use homedash::{
//!     core::{msg::Msg, state::AppState, update::{update_with_context, UpdateContext}},
//!     infrastructure::{config::Config, store::MemoryStore, tui::textarea_engine::TuiTextAreaEngine},
//!     repositories::{LinkRegistry, SettingsRepository},
//! };
//!
//! let store = Arc::new(MemoryStore::new());
//! let links = LinkRegistry::new(store.clone());
//! let settings = SettingsRepository::new(store, "My Dashboard");
//! let ctx = UpdateContext { links: &links, settings: &settings, text_area: &TuiTextAreaEngine };
//!
//! let (state, commands) = update_with_context(Msg::Startup, AppState::new(Config::default()), &ctx);
//! assert_eq!(state.notepad.title, "My Dashboard");
//! assert!(!commands.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, update and command execution
//! - [`domain`] - Data types and response mapping
//! - [`repositories`] - Links and settings over the store
//! - [`infrastructure`] - Terminal, HTTP, storage, config and services
//! - [`integration`] - Runtime and the main event loop
//! - [`presentation`] - UI components

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod repositories;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState};
pub use crate::core::translator::translate_raw_to_domain;
pub use crate::core::update::update_with_context;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
