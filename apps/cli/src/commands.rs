//! CLI command definitions, routing, and tracing setup.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use metaparser_fetch::{FetchOptions, normalize_url};
use metaparser_shared::{AppConfig, MetaparserError, init_config, load_config};
use serde::Serialize;
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// metaparser: read Open Graph, Twitter Card and favicon metadata from web pages.
#[derive(Parser)]
#[command(
    name = "metaparser",
    version,
    about = "Extract Open Graph, Twitter Card and favicon metadata from HTML documents.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Fetch a page and print its metadata as JSON.
    Fetch {
        /// Page URL (`http://` is assumed when no scheme is given).
        url: String,

        /// Print single-line JSON.
        #[arg(long)]
        compact: bool,

        /// Request timeout in seconds (overrides the config file).
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Parse a local HTML file and print its metadata as JSON.
    File {
        /// Path to the HTML document.
        path: PathBuf,

        /// Print single-line JSON.
        #[arg(long)]
        compact: bool,
    },

    /// Print the resolved title and description of a page.
    Summary {
        /// Page URL.
        url: String,
    },

    /// List absolute icon URLs declared by a page.
    Icons {
        /// Page URL.
        url: String,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "metaparser=info",
        1 => "metaparser=debug",
        _ => "metaparser=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Fetch {
            url,
            compact,
            timeout,
        } => cmd_fetch(&url, compact, timeout).await,
        Command::File { path, compact } => cmd_file(&path, compact),
        Command::Summary { url } => cmd_summary(&url).await,
        Command::Icons { url } => cmd_icons(&url).await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

async fn cmd_fetch(url: &str, compact: bool, timeout: Option<u64>) -> Result<()> {
    let url = normalize_url(url)?;
    let opts = with_timeout(fetch_options()?, timeout)?;

    info!(%url, "fetching");
    let metadata = metaparser_fetch::fetch_metadata(&url, &opts).await?;
    print_json(&metadata, compact)
}

fn cmd_file(path: &Path, compact: bool) -> Result<()> {
    let file = File::open(path).map_err(|e| MetaparserError::io(path, e))?;
    let metadata = metaparser_parser::parse_html(BufReader::new(file))?;
    print_json(&metadata, compact)
}

async fn cmd_summary(url: &str) -> Result<()> {
    let url = normalize_url(url)?;
    let metadata = metaparser_fetch::fetch_metadata(&url, &fetch_options()?).await?;

    let summary = serde_json::json!({
        "url": url.as_str(),
        "title": metadata.title(),
        "description": metadata.description(),
    });
    print_json(&summary, false)
}

async fn cmd_icons(url: &str) -> Result<()> {
    let url = normalize_url(url)?;
    let icons = metaparser_fetch::fetch_icons(&url, &fetch_options()?).await?;

    info!(base = %icons.base_url, count = icons.icons.len(), "icons found");
    for icon in &icons.icons {
        println!("{icon}");
    }
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fetch_options() -> Result<FetchOptions> {
    let config = load_config()?;
    Ok(FetchOptions::from(&config.fetch))
}

/// Apply a `--timeout` override. Zero is rejected like it is in the config file.
fn with_timeout(
    mut opts: FetchOptions,
    timeout: Option<u64>,
) -> metaparser_shared::Result<FetchOptions> {
    match timeout {
        Some(0) => Err(MetaparserError::validation("--timeout must be positive")),
        Some(secs) => {
            opts.timeout_secs = secs;
            Ok(opts)
        }
        None => Ok(opts),
    }
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_fetch_flags() {
        let cli = Cli::try_parse_from([
            "metaparser",
            "-vv",
            "fetch",
            "example.com",
            "--compact",
            "--timeout",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Fetch {
                url,
                compact,
                timeout,
            } => {
                assert_eq!(url, "example.com");
                assert!(compact);
                assert_eq!(timeout, Some(5));
            }
            _ => panic!("expected fetch command"),
        }
    }

    #[test]
    fn test_parse_config_show() {
        let cli = Cli::try_parse_from(["metaparser", "--log-format", "json", "config", "show"])
            .unwrap();
        assert!(matches!(cli.log_format, LogFormat::Json));
        assert!(matches!(
            cli.command,
            Command::Config {
                action: ConfigAction::Show
            }
        ));
    }

    #[test]
    fn test_timeout_override() {
        let opts = with_timeout(FetchOptions::default(), Some(7)).unwrap();
        assert_eq!(opts.timeout_secs, 7);

        let opts = with_timeout(FetchOptions::default(), None).unwrap();
        assert_eq!(opts.timeout_secs, FetchOptions::default().timeout_secs);
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let err = with_timeout(FetchOptions::default(), Some(0)).unwrap_err();
        assert!(matches!(err, MetaparserError::Validation { .. }));
        assert!(err.to_string().contains("--timeout must be positive"));
    }

    #[test]
    fn test_file_command_reads_fixture() {
        let path = Path::new("../../fixtures/html/full-head.html");
        let file = File::open(path).unwrap();
        let metadata = metaparser_parser::parse_html(BufReader::new(file)).unwrap();
        assert_eq!(metadata.title(), "sample title");
    }
}
