//! Heading typography.

use leptos::prelude::*;

use crate::ui::class_names::cn;

/// Page-level heading. Callers usually shrink the size through `class`.
#[component]
pub fn TypographyH1(
    /// Additional CSS classes.
    #[prop(optional, into)]
    class: String,
    /// Heading content.
    children: Children,
) -> impl IntoView {
    let classes = cn([
        "scroll-m-20 text-4xl font-extrabold tracking-tight lg:text-5xl",
        class.as_str(),
    ]);

    view! {
        <h1 class=classes>
            {children()}
        </h1>
    }
}
