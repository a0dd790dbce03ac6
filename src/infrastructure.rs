//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation and text editing engine
//! - CLI argument processing and configuration
//! - Durable key-value storage
//! - HTTP fetching, location lookup and the widget request service
//! - Clock ticks and the system URL opener

pub mod cli;
pub mod clock_service;
pub mod config;
pub mod geolocation;
pub mod http;
pub mod opener;
pub mod store;
pub mod tui;
pub mod widget_service;
