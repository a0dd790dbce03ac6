//! Integration layer
//!
//! Wires the Elm core to the terminal and the background services:
//! - Runtime owning state, queues and the command executor
//! - AppRunner event loop
//! - Rendering and render coalescing

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
