//! UI components and styling helpers.
//!
//! # Structure
//!
//! - [`components`]: Leptos components
//! - [`variants`]: Enumerated style options and their class resolvers
//! - [`class_names`]: Class list merging

pub mod class_names;
pub mod components;
pub mod variants;

pub use class_names::cn;
pub use components::*;
pub use variants::{BannerAlign, BannerPadding, GradientTone, banner_container, banner_layout};
