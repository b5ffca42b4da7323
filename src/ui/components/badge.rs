//! Badge component for short labels above a heading.

use leptos::prelude::*;

use crate::ui::class_names::cn;

const BADGE_CLASSES: &str =
    "inline-flex items-center rounded-full px-2 py-1 text-xs font-medium bg-primary/10 text-primary";

/// Pill-shaped label.
///
/// Rendered as a block-level `<div>` so it stacks above the heading.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge>"New"</Badge>
///     <Badge class="uppercase">"Beta"</Badge>
/// }
/// ```
#[component]
pub fn Badge(
    /// Additional CSS classes.
    #[prop(optional, into)]
    class: String,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let classes = cn([BADGE_CLASSES, class.as_str()]);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}
