use leptos::prelude::*;
use page_banner::RenderError;
use page_banner::config::{AppConfig, OutputConfig};
use page_banner::render::{
    BannerSpec, render_banner, render_document, render_fragments, render_to_string, write_output,
};
use page_banner::ui::{BannerAlign, BannerSkeleton, GradientTone};

fn output(path: &str, document: bool) -> OutputConfig {
    OutputConfig {
        path: path.to_string(),
        document,
        title: "Banner preview".to_string(),
        stylesheet: Some("/static/app.css".to_string()),
    }
}

fn welcome() -> BannerSpec {
    BannerSpec {
        badge_text: Some("New".to_string()),
        heading: Some("Welcome".to_string()),
        ..BannerSpec::default()
    }
}

#[test]
fn test_render_banner_from_spec() {
    let spec = BannerSpec {
        align: BannerAlign::Left,
        gradient_tone: GradientTone::None,
        image_src: Some("/a.png".to_string()),
        ..welcome()
    };

    let html = render_banner(&spec);
    assert!(html.starts_with("<div"));
    assert!(html.contains("Welcome"));
    assert!(html.contains("md:flex-row-reverse"));
    assert!(html.contains("src=\"/a.png\""));
    assert!(!html.contains("bg-gradient-to-br"));
}

#[test]
fn test_loading_spec_renders_skeleton() {
    let spec = BannerSpec {
        loading: true,
        ..welcome()
    };

    let html = render_banner(&spec);
    let skeleton = render_to_string(|| view! { <BannerSkeleton /> });
    assert_eq!(html, skeleton);
}

#[test]
fn test_href_renders_link_root() {
    let spec = BannerSpec {
        href: Some("/plugins".to_string()),
        id: Some("promo".to_string()),
        ..welcome()
    };

    let html = render_banner(&spec);
    assert!(html.starts_with("<a href=\"/plugins\" id=\"promo\""));
    assert!(html.ends_with("</a>"));
    assert_eq!(html.matches("id=\"promo\"").count(), 1);
}

#[test]
fn test_loading_link_keeps_id_on_skeleton() {
    let spec = BannerSpec {
        href: Some("/plugins".to_string()),
        id: Some("promo".to_string()),
        loading: true,
        ..welcome()
    };

    let html = render_banner(&spec);
    let root = &html[..html.find('>').expect("root tag")];
    assert!(root.starts_with("<div"), "{root}");
    assert!(root.contains("id=\"promo\""), "{root}");
    assert!(!html.contains("/plugins"));
    assert!(html.contains("animate-pulse"));
}

#[test]
fn test_id_lands_on_default_root() {
    let spec = BannerSpec {
        id: Some("promo".to_string()),
        ..welcome()
    };

    let html = render_banner(&spec);
    let root = &html[..html.find('>').expect("root tag")];
    assert!(root.starts_with("<div"));
    assert!(root.contains("id=\"promo\""));
}

#[test]
fn test_render_fragments_one_per_line() {
    let html = render_fragments(&[welcome(), welcome()]);
    assert_eq!(html.lines().count(), 2);
    assert_eq!(html.matches("Welcome").count(), 2);
}

#[test]
fn test_render_document_wraps_banners() {
    let html = render_document(&output("-", true), &[welcome()]);

    assert!(html.to_lowercase().starts_with("<!doctype html>"));
    assert!(html.contains("<title>Banner preview</title>"));
    assert!(html.contains("href=\"/static/app.css\""));
    assert!(html.contains("<main"));
    assert!(html.contains("Welcome"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_document_without_stylesheet() {
    let mut output = output("-", true);
    output.stylesheet = None;

    let html = render_document(&output, &[welcome()]);
    assert!(!html.contains("<link"));
}

#[test]
fn test_write_output_to_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nested").join("preview.html");
    let config = AppConfig {
        output: output(path.to_str().expect("utf-8 path"), true),
        banners: vec![welcome()],
    };

    let summary = write_output(&config)?;

    let written = std::fs::read_to_string(&path)?;
    assert!(written.contains("Welcome"));
    assert_eq!(summary.bytes, written.len());
    assert_eq!(summary.banners, 1);
    Ok(())
}

#[test]
fn test_write_output_fragment_mode() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("fragment.html");
    let config = AppConfig {
        output: output(path.to_str().expect("utf-8 path"), false),
        banners: vec![welcome()],
    };

    write_output(&config)?;

    let written = std::fs::read_to_string(&path)?;
    assert!(written.starts_with("<div"));
    assert!(!written.contains("<html"));
    Ok(())
}

#[test]
fn test_write_output_requires_banners() {
    let config = AppConfig {
        output: output("-", true),
        banners: Vec::new(),
    };

    let err = write_output(&config).unwrap_err();
    assert!(matches!(err, RenderError::NoBanners));
}

#[test]
fn test_write_output_reports_io_failure() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    // A directory cannot be overwritten as a file.
    let config = AppConfig {
        output: output(dir.path().to_str().expect("utf-8 path"), true),
        banners: vec![welcome()],
    };

    let err = write_output(&config).unwrap_err();
    assert!(matches!(err, RenderError::Write { .. }));
    Ok(())
}
