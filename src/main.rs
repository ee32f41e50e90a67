use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use url::Url;

use amp_cache_url::{create_curls_subdomain, generate, ServingMode};

/// Rewrite an origin URL into its cache URL.
#[derive(Parser)]
#[command(name = "amp-cache-url", version, about)]
struct Cli {
    /// Origin URL to rewrite
    url: String,

    /// Cache domain suffix placed after the encoded subdomain
    #[arg(long, default_value = "cdn.ampproject.org")]
    suffix: String,

    /// How the cached resource will be served
    #[arg(long, value_enum, default_value_t = Mode::Content)]
    mode: Mode,

    /// Print only the encoded subdomain for the URL's host
    #[arg(long)]
    subdomain: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Content,
    Viewer,
    WebPackage,
    Certificate,
    Image,
}

impl From<Mode> for ServingMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Content => ServingMode::Content,
            Mode::Viewer => ServingMode::Viewer,
            Mode::WebPackage => ServingMode::WebPackage,
            Mode::Certificate => ServingMode::Certificate,
            Mode::Image => ServingMode::Image,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.subdomain {
        let parsed = Url::parse(cli.url.trim()).context("parsing origin URL")?;
        let host = parsed.host_str().context("origin URL has no host")?;
        println!("{}", create_curls_subdomain(host));
        return Ok(());
    }

    let cache_url = generate(&cli.suffix, &cli.url, Some(cli.mode.into()))?;
    println!("{cache_url}");
    Ok(())
}
