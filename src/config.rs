use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::render::BannerSpec;

/// Output path that writes to standard output.
pub const STDOUT_PATH: &str = "-";

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Render banner previews to static HTML", long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "BANNER_CONFIG_FILE")]
    pub config: Option<String>,

    /// Output file, `-` for stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write bare banner markup without the HTML document around it
    #[arg(long)]
    pub fragment: bool,

    /// Stylesheet linked from the document head
    #[arg(long)]
    pub stylesheet: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub output: OutputConfig,
    #[serde(default)]
    pub banners: Vec<BannerSpec>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub path: String,
    /// Wrap the banners in a full HTML document.
    pub document: bool,
    pub title: String,
    #[serde(default)]
    pub stylesheet: Option<String>,
}

impl OutputConfig {
    pub fn is_stdout(&self) -> bool {
        self.path == STDOUT_PATH
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_cli(Cli::parse())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Self::load_from_cli(cli)
    }

    /// Priority: CLI flag > `BANNER_` env var > config file > defaults.
    pub fn load_from_cli(cli: Cli) -> Result<Self, config::ConfigError> {
        // 1. Defaults
        let mut builder = Config::builder()
            .set_default("output.path", "banner.html")?
            .set_default("output.document", true)?
            .set_default("output.title", "Banner preview")?;

        // 2. Config file, explicit or ./banner.{yaml,toml,json}
        builder = match cli.config.as_deref() {
            Some(path) => builder.add_source(File::with_name(path)),
            None => builder.add_source(File::with_name("banner").required(false)),
        };

        // 3. Environment, e.g. BANNER_OUTPUT__PATH=preview.html
        builder = builder.add_source(
            Environment::with_prefix("BANNER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // 4. CLI overrides
        if let Some(output) = cli.output {
            builder = builder.set_override("output.path", output)?;
        }
        if cli.fragment {
            builder = builder.set_override("output.document", false)?;
        }
        if let Some(stylesheet) = cli.stylesheet {
            builder = builder.set_override("output.stylesheet", stylesheet)?;
        }

        builder.build()?.try_deserialize()
    }
}
