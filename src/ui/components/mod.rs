//! Reusable UI components.
//!
//! Components are written for Leptos server-side rendering and styled with
//! Tailwind utility classes.
//!
//! # Components
//!
//! - [`Banner`], [`BannerSkeleton`]: Promotional banner and its loading state
//! - [`Badge`]: Pill-shaped label
//! - [`Image`]: Lazily loaded image with a fill mode
//! - [`Skeleton`]: Placeholder block
//! - [`TypographyH1`]: Page heading

mod badge;
mod banner;
mod image;
mod skeleton;
mod typography;

pub use badge::Badge;
pub use banner::{
    AsChild, Banner, BannerSkeleton, BannerSlot, DEFAULT_IMAGE_ALT, DEFAULT_IMAGE_SRC, MaybeText,
};
pub use image::Image;
pub use skeleton::Skeleton;
pub use typography::TypographyH1;
