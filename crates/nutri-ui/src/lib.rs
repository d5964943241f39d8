//! User interface components for the nutrition dashboard
//!
//! This crate provides the page selector sidebar and the application theme.

pub mod navigation_panel;
pub mod theme;

pub use navigation_panel::{NavigationPanel, Page};
pub use theme::{Theme, apply_theme};
