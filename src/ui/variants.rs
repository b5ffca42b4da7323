//! Style variants for the banner surface.
//!
//! Each option is a small enum whose `classes()` returns the utility classes
//! for that choice; the resolvers combine them with the shared base classes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::class_names::cn;

/// Classes shared by every banner container.
pub const CONTAINER_BASE: &str = "relative overflow-hidden rounded-2xl";

/// Classes shared by every banner layout row.
pub const LAYOUT_BASE: &str =
    "relative z-10 flex flex-col items-start justify-between gap-6 md:items-center";

/// Outer padding of the banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerPadding {
    /// Compact padding.
    Sm,
    /// Regular padding (default).
    #[default]
    Md,
}

impl BannerPadding {
    /// Get CSS classes for this padding.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "px-4 py-4",
            Self::Md => "px-6 py-6",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

/// Background gradient of the banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientTone {
    /// Soft diagonal primary-to-secondary gradient (default).
    #[default]
    Soft,
    /// No background gradient.
    None,
}

impl GradientTone {
    /// Get CSS classes for this tone.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Soft => "bg-gradient-to-br from-primary/20 via-primary/10 to-secondary/20",
            Self::None => "",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Soft => "soft",
            Self::None => "none",
        }
    }
}

/// Which side of the banner the image sits on at `md` and wider.
///
/// Narrow viewports always stack the text above the image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerAlign {
    /// Text first, image on the right (default).
    #[default]
    Right,
    /// Image first, text on the right.
    Left,
}

impl BannerAlign {
    /// Get CSS classes for this alignment.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Right => "md:flex-row",
            Self::Left => "md:flex-row-reverse",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
        }
    }
}

/// Error returned when a variant name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} variant `{value}`")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

macro_rules! variant_str_impls {
    ($ty:ty, $kind:literal, [$($variant:ident),+]) => {
        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case(<$ty>::$variant.as_str()) {
                        return Ok(<$ty>::$variant);
                    }
                )+
                Err(UnknownVariant {
                    kind: $kind,
                    value: s.to_string(),
                })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

variant_str_impls!(BannerPadding, "padding", [Sm, Md]);
variant_str_impls!(GradientTone, "gradient tone", [Soft, None]);
variant_str_impls!(BannerAlign, "align", [Right, Left]);

/// Classes for the banner's outer container.
#[must_use]
pub fn banner_container(padding: BannerPadding, gradient_tone: GradientTone) -> String {
    cn([CONTAINER_BASE, padding.classes(), gradient_tone.classes()])
}

/// Classes for the row holding the text block and the image block.
#[must_use]
pub fn banner_layout(align: BannerAlign) -> String {
    cn([LAYOUT_BASE, align.classes()])
}
