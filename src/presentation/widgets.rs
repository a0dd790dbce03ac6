//! Reusable UI widgets
//!
//! This module contains reusable widgets that can be used
//! across different components.

pub mod link_list;
pub mod panel;
pub mod popup;
