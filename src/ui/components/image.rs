//! Image element with lazy loading and a fill-the-parent mode.

use leptos::prelude::*;

/// Inline style applied in fill mode. The parent must be positioned.
const FILL_STYLE: &str =
    "position:absolute;height:100%;width:100%;left:0;top:0;right:0;bottom:0;color:transparent";

/// Image that defers loading to the browser.
///
/// With `fill`, the image stretches over its positioned parent and `class`
/// (e.g. `object-contain`) controls how it is fitted. `sizes` should describe
/// the rendered width so the browser can choose a source.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <div class="relative h-40 w-40">
///         <Image src="/plugin.png" alt="Plugin" fill=true class="object-contain" />
///     </div>
/// }
/// ```
#[component]
pub fn Image(
    /// Image source URL.
    #[prop(into)]
    src: String,
    /// Alt text for the image.
    #[prop(into)]
    alt: String,
    /// Additional CSS classes.
    #[prop(optional, into)]
    class: String,
    /// Stretch over the positioned parent.
    #[prop(optional)]
    fill: bool,
    /// Responsive sizing hint forwarded as the `sizes` attribute.
    #[prop(optional, into)]
    sizes: Option<String>,
    /// Load eagerly instead of when the image nears the viewport.
    #[prop(optional)]
    priority: bool,
) -> impl IntoView {
    let loading = if priority { "eager" } else { "lazy" };
    let style = if fill { FILL_STYLE } else { "" };

    view! {
        <img
            src=src
            alt=alt
            class=class
            loading=loading
            decoding="async"
            sizes=sizes
            style=style
        />
    }
}
