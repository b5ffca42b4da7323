//! Server-side rendering of banners to HTML.
//!
//! Banners are described by [`BannerSpec`] (usually read from a config file)
//! and rendered either as bare fragments or inside a preview document.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use leptos::prelude::*;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::{AppConfig, OutputConfig, STDOUT_PATH};
use crate::error::{RenderError, Result};
use crate::ui::{AsChild, Banner, BannerAlign, BannerPadding, BannerSlot, GradientTone};

/// One banner as described in configuration.
///
/// Mirrors the [`Banner`] props that make sense outside Rust code. `href`
/// turns the banner into a link by rendering it onto an `<a>` root, and `id`
/// is set on whichever root element is used, including the skeleton's while
/// `loading`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BannerSpec {
    pub id: Option<String>,
    pub href: Option<String>,
    pub loading: bool,
    pub align: BannerAlign,
    pub padding: BannerPadding,
    pub gradient_tone: GradientTone,
    pub badge_text: Option<String>,
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub description: Option<String>,
    pub image_src: Option<String>,
    pub image_alt: Option<String>,
    pub class: String,
    pub gradient_class: String,
}

/// What [`write_output`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    /// File path, or `-` for stdout.
    pub destination: String,
    pub bytes: usize,
    pub banners: usize,
}

/// Render a view to an HTML string.
///
/// The view is built inside a fresh reactive owner, which is disposed once the
/// markup has been produced.
pub fn render_to_string<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| view().to_html())
}

/// Build the [`Banner`] view for a spec.
pub fn banner_view(spec: BannerSpec) -> impl IntoView {
    let BannerSpec {
        id,
        href,
        loading,
        align,
        padding,
        gradient_tone,
        badge_text,
        heading,
        subheading,
        description,
        image_src,
        image_alt,
        class,
        gradient_class,
    } = spec;

    debug!(
        name: "banner.rendered",
        loading,
        align = %align,
        padding = %padding,
        gradient_tone = %gradient_tone,
        link = href.is_some(),
        "Rendering banner"
    );

    // A caller-supplied root receives the id directly; the default <div>
    // gets it through attribute spreading. The loading skeleton never takes
    // the link root, so it keeps the id too.
    let (as_child, root_id) = match href.filter(|_| !loading) {
        Some(href) => {
            let link_id = id;
            let as_child = AsChild::new(move |slot: BannerSlot| {
                view! {
                    <a href=href id=link_id class=slot.class>
                        {slot.children}
                    </a>
                }
                .into_any()
            });
            (as_child, None)
        }
        None => (AsChild::default(), id),
    };

    view! {
        <Banner
            is_loading=loading
            align=align
            padding=padding
            gradient_tone=gradient_tone
            badge_text=badge_text
            heading=heading
            subheading=subheading
            description=description
            image_src=image_src
            image_alt=image_alt
            class=class
            gradient_class=gradient_class
            as_child=as_child
            attr:id=root_id
        />
    }
}

/// Render one banner as an HTML fragment.
pub fn render_banner(spec: &BannerSpec) -> String {
    render_to_string(|| banner_view(spec.clone()))
}

/// Render banners as fragments, one per line.
pub fn render_fragments(banners: &[BannerSpec]) -> String {
    banners
        .iter()
        .map(render_banner)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Preview document listing banners top to bottom.
#[component]
pub fn BannerPage(
    /// Document title.
    #[prop(into)]
    title: String,
    /// Stylesheet href providing the utility classes.
    stylesheet: Option<String>,
    /// Banners to render.
    banners: Vec<BannerSpec>,
) -> impl IntoView {
    view! {
        <!doctype html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title}</title>
                {stylesheet.map(|href| view! { <link rel="stylesheet" href=href/> })}
            </head>
            <body class="min-h-screen bg-background text-foreground antialiased">
                <main class="container mx-auto max-w-5xl space-y-6 px-4 py-6">
                    {banners.into_iter().map(banner_view).collect_view()}
                </main>
            </body>
        </html>
    }
}

/// Render banners inside a full HTML document.
pub fn render_document(output: &OutputConfig, banners: &[BannerSpec]) -> String {
    render_to_string(|| {
        view! {
            <BannerPage
                title=output.title.clone()
                stylesheet=output.stylesheet.clone()
                banners=banners.to_vec()
            />
        }
    })
}

/// Render the configured banners and write them to the configured output.
pub fn write_output(config: &AppConfig) -> Result<RenderSummary> {
    if config.banners.is_empty() {
        return Err(RenderError::NoBanners);
    }

    let html = if config.output.document {
        render_document(&config.output, &config.banners)
    } else {
        render_fragments(&config.banners)
    };

    if config.output.is_stdout() {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(html.as_bytes())
            .and_then(|()| stdout.write_all(b"\n"))
            .map_err(|source| RenderError::Write {
                path: PathBuf::from(STDOUT_PATH),
                source,
            })?;
    } else {
        let path = PathBuf::from(&config.output.path);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| RenderError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, &html).map_err(|source| RenderError::Write {
            path: path.clone(),
            source,
        })?;
    }

    info!(
        name: "render.written",
        destination = %config.output.path,
        bytes = html.len(),
        banners = config.banners.len(),
        document = config.output.document,
        "Banner preview written"
    );

    Ok(RenderSummary {
        destination: config.output.path.clone(),
        bytes: html.len(),
        banners: config.banners.len(),
    })
}
