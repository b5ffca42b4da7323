//! Page banner
//!
//! A promotional banner component for Leptos server-side rendering, with a
//! loading skeleton that keeps the same footprint, plus a small renderer that
//! turns banner descriptions from a config file into static HTML previews.
//!
//! # Modules
//!
//! - [`ui`]: Banner components, style variants and class merging
//! - [`render`]: HTML rendering of banners and preview documents
//! - [`config`]: Layered configuration for the preview renderer
//! - [`error`]: Rendering errors

// Nested `view!` trees exceed the default limit during type checking
#![recursion_limit = "256"]
// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::needless_pass_by_value)]

pub mod config;
pub mod error;
pub mod render;
pub mod ui;

pub use error::{RenderError, Result};
