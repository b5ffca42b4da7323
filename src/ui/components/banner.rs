//! Banner surface with badge, heading, copy and an illustration.
//!
//! [`Banner`] renders the loaded state and falls back to [`BannerSkeleton`]
//! while `is_loading` is set. Both use the same container and layout
//! resolvers, so swapping one for the other does not shift the page.

use std::fmt;

use leptos::either::Either;
use leptos::prelude::*;

use super::{Badge, Image, Skeleton, TypographyH1};
use crate::ui::class_names::cn;
use crate::ui::variants::{BannerAlign, BannerPadding, GradientTone, banner_container, banner_layout};

/// Image shown when neither `image` nor `image_src` is given.
pub const DEFAULT_IMAGE_SRC: &str = "/plugin.png";

/// Alt text used when `image_alt` is not given.
pub const DEFAULT_IMAGE_ALT: &str = "Banner image";

/// The illustration is capped at `max-w-xs` (320px) from `md` up.
const IMAGE_SIZES: &str = "(min-width: 768px) 320px, 50vw";

const OVERLAY_CLASSES: &str =
    "absolute inset-0 bg-gradient-to-r from-transparent via-background/5 to-transparent";

/// Optional text content.
///
/// `None` and the empty string are the same thing here: the element that would
/// hold the text is left out of the markup entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaybeText(Option<String>);

impl MaybeText {
    /// The text, if there is any to render.
    #[must_use]
    pub fn present(self) -> Option<String> {
        self.0.filter(|text| !text.is_empty())
    }
}

impl From<&str> for MaybeText {
    fn from(text: &str) -> Self {
        Self(Some(text.to_string()))
    }
}

impl From<String> for MaybeText {
    fn from(text: String) -> Self {
        Self(Some(text))
    }
}

impl From<Option<String>> for MaybeText {
    fn from(text: Option<String>) -> Self {
        Self(text)
    }
}

impl From<Option<&str>> for MaybeText {
    fn from(text: Option<&str>) -> Self {
        Self(text.map(str::to_string))
    }
}

/// What a caller-supplied root element receives from the banner.
pub struct BannerSlot {
    /// Computed container classes, overrides already merged.
    pub class: String,
    /// Layout row and decorative overlay.
    pub children: AnyView,
}

impl fmt::Debug for BannerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BannerSlot")
            .field("class", &self.class)
            .finish_non_exhaustive()
    }
}

/// Root element strategy for [`Banner`].
///
/// Empty (the default) renders a `<div>`. A render function replaces that
/// `<div>` with the caller's own element, which is expected to apply
/// `slot.class` and render `slot.children`.
///
/// ```rust,ignore
/// view! {
///     <Banner
///         heading="Plugins"
///         as_child=|slot: BannerSlot| view! {
///             <a href="/plugins" class=slot.class>{slot.children}</a>
///         }.into_any()
///     />
/// }
/// ```
#[derive(Default)]
pub struct AsChild(Option<Box<dyn FnOnce(BannerSlot) -> AnyView + Send>>);

impl AsChild {
    pub fn new<F>(render: F) -> Self
    where
        F: FnOnce(BannerSlot) -> AnyView + Send + 'static,
    {
        Self(Some(Box::new(render)))
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

impl<F> From<F> for AsChild
where
    F: FnOnce(BannerSlot) -> AnyView + Send + 'static,
{
    fn from(render: F) -> Self {
        Self::new(render)
    }
}

impl fmt::Debug for AsChild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AsChild").field(&self.is_set()).finish()
    }
}

/// Promotional banner.
///
/// Attributes given with `attr:` or a `{..}` spread land on the root element.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Banner
///         badge_text="New"
///         heading="Plugins are here"
///         subheading="Extend the editor with community plugins."
///         image_src="/plugins.png"
///         image_alt="Plugin gallery"
///         align=BannerAlign::Left
///     />
/// }
/// ```
#[component]
pub fn Banner(
    /// Render the skeleton instead of the content.
    #[prop(optional)]
    is_loading: bool,
    /// Side of the image on wide layouts.
    #[prop(optional)]
    align: BannerAlign,
    /// Outer padding.
    #[prop(optional)]
    padding: BannerPadding,
    /// Background gradient.
    #[prop(optional)]
    gradient_tone: GradientTone,
    /// Small pill above the heading.
    #[prop(optional, into)]
    badge_text: MaybeText,
    /// Main heading.
    #[prop(optional, into)]
    heading: MaybeText,
    /// Line under the heading.
    #[prop(optional, into)]
    subheading: MaybeText,
    /// Secondary copy.
    #[prop(optional, into)]
    description: MaybeText,
    /// Custom illustration, replaces the default image.
    #[prop(optional, into)]
    image: Option<ViewFn>,
    /// Source of the default image.
    #[prop(optional, into)]
    image_src: MaybeText,
    /// Alt text of the default image.
    #[prop(optional, into)]
    image_alt: MaybeText,
    /// Additional CSS classes for the root.
    #[prop(optional, into)]
    class: String,
    /// Classes merged after the gradient tone, before `class`.
    #[prop(optional, into)]
    gradient_class: String,
    /// Render onto a caller-supplied root element.
    #[prop(optional, into)]
    as_child: AsChild,
    /// Replaces the generated badge/heading/subheading/description block.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    if is_loading {
        return Either::Left(view! {
            <BannerSkeleton
                align=align
                padding=padding
                gradient_tone=gradient_tone
                class=class
            />
        });
    }

    let content = match children {
        Some(children) => Either::Left(children()),
        None => Either::Right(default_text(
            badge_text.present(),
            heading.present(),
            subheading.present(),
            description.present(),
        )),
    };

    let image_src = image_src
        .present()
        .unwrap_or_else(|| DEFAULT_IMAGE_SRC.to_string());
    let image_alt = image_alt
        .present()
        .unwrap_or_else(|| DEFAULT_IMAGE_ALT.to_string());

    let root_class = cn([
        banner_container(padding, gradient_tone),
        gradient_class,
        class,
    ]);

    let inner = view! {
        <div class=banner_layout(align)>
            {content}
            {image_section(image, image_src, image_alt)}
        </div>
        <div class=OVERLAY_CLASSES aria-hidden="true"></div>
    };

    let root = match as_child.0 {
        Some(render) => Either::Left(render(BannerSlot {
            class: root_class,
            children: inner.into_any(),
        })),
        None => Either::Right(view! {
            <div class=root_class>
                {inner}
            </div>
        }),
    };

    Either::Right(root)
}

fn default_text(
    badge_text: Option<String>,
    heading: Option<String>,
    subheading: Option<String>,
    description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="flex-1 space-y-4">
            {badge_text.map(|text| view! { <Badge>{text}</Badge> })}
            {heading.map(|text| view! {
                <TypographyH1 class="text-xl font-bold tracking-tight md:text-2xl lg:text-3xl">
                    {text}
                </TypographyH1>
            })}
            {subheading.map(|text| view! {
                <p class="text-sm text-muted-foreground md:text-base">{text}</p>
            })}
            {description.map(|text| view! {
                <p class="text-xs md:text-sm text-muted-foreground/80">{text}</p>
            })}
        </div>
    }
}

fn image_section(image: Option<ViewFn>, src: String, alt: String) -> impl IntoView {
    let visual = match image {
        Some(image) => Either::Left(view! {
            <div class="flex items-center justify-center w-full h-full">
                {image.run()}
            </div>
        }),
        None => Either::Right(view! {
            <Image src=src alt=alt class="object-contain" fill=true sizes=IMAGE_SIZES />
        }),
    };

    view! {
        <div class="flex-1">
            <div class="relative mx-auto max-w-xs">
                <div class="aspect-square">
                    <div class="flex h-full items-center justify-center">
                        <div class="relative w-full h-full text-center">
                            {visual}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Loading placeholder with the same footprint as [`Banner`].
///
/// Four bars stand in for the badge, heading, subheading and a call to action;
/// a square stands in for the illustration.
#[component]
pub fn BannerSkeleton(
    /// Side of the image on wide layouts.
    #[prop(optional)]
    align: BannerAlign,
    /// Outer padding.
    #[prop(optional)]
    padding: BannerPadding,
    /// Background gradient.
    #[prop(optional)]
    gradient_tone: GradientTone,
    /// Additional CSS classes for the root.
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let root_class = cn([banner_container(padding, gradient_tone), class]);

    view! {
        <div class=root_class>
            <div class=banner_layout(align)>
                <div class="flex-1 space-y-2">
                    <Skeleton class="h-5 w-12 rounded-full" />
                    <Skeleton class="h-6 w-48 md:w-56 lg:w-64" />
                    <Skeleton class="h-4 w-72 md:w-80" />
                    <Skeleton class="h-8 w-32 mt-2" />
                </div>
                <div class="flex-1">
                    <div class="relative mx-auto max-w-xs aspect-square">
                        <Skeleton class="w-full h-full rounded-2xl" />
                    </div>
                </div>
            </div>
        </div>
    }
}
