//! Window management module
//!
//! Provides window lifecycle, focus and z-order bookkeeping, drag
//! constraints and hit testing.

#[allow(clippy::module_inception)]
mod window;
mod bounds;
mod config;
mod events;
mod region;
mod manager;

pub use window::{ContentNode, Window, WindowContent, WindowState};
pub use bounds::DesktopBounds;
pub use config::WindowOptions;
pub use events::{SubscriptionId, WindowEvent};
pub use region::WindowRegion;
pub use manager::WindowManager;

pub(crate) use window::PriorState;

/// Unique window identifier, chosen by the caller
pub type WindowId = String;
