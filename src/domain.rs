//! Domain layer
//!
//! Plain data types and pure mapping functions:
//! - Error taxonomy shared by every widget
//! - Quick links
//! - Third-party response shapes (weather, image collection, stock quote)
//! - Clock and text formatting helpers

pub mod clock;
pub mod error;
pub mod image;
pub mod link;
pub mod quote;
pub mod text;
pub mod weather;
pub mod widget;

pub use error::{DashboardError, StoreError};
pub use link::Link;
pub use widget::{RequestId, WidgetKind, WidgetPayload};
