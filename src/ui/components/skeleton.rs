//! Placeholder block shown while content is unavailable.

use leptos::prelude::*;

use crate::ui::class_names::cn;

/// Inert pulsing rectangle. Size and shape come from `class`.
#[component]
pub fn Skeleton(
    /// Additional CSS classes, usually width, height and rounding.
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let classes = cn(["animate-pulse rounded-md bg-muted", class.as_str()]);

    view! {
        <div class=classes aria-hidden="true"></div>
    }
}
