//! Platform-agnostic state and configuration shared by every view.

pub mod config;
pub mod drawer;
pub mod section;
pub mod timing;
