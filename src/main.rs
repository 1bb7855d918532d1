use anyhow::Context;
use capital_quest::capitals::{self, CountryKey};
use capital_quest::config::AppConfig;
use capital_quest::console::Console;
use capital_quest::report;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Capital Quest: capitals of US states, Indian states/UTs and UK countries
///
/// Looks up a region's capital, shows a fun fact, and adds a short
/// Wikipedia summary when one can be fetched (cached on disk).
///
/// Examples:
///   capital-quest lookup --state California
///   capital-quest lookup -c india -s karnataka
///   capital-quest lookup --country uk --random
///   capital-quest serve --port 5000
///   capital-quest console
#[derive(Parser)]
#[command(name = "capital-quest", version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.capital-quest/config.json).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Summary cache file override.
    #[arg(long, global = true)]
    cache: Option<PathBuf>,

    /// Offline mode: only use cached summaries.
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up the capital for a state/region.
    #[command(group(ArgGroup::new("target").required(true).args(["state", "random"])))]
    Lookup {
        /// Country key: us, india or uk.
        #[arg(long, short = 'c', value_parser = parse_country)]
        country: Option<CountryKey>,

        /// State/region name to look up (partial names work).
        #[arg(long, short = 's', value_parser = parse_state)]
        state: Option<String>,

        /// Pick a random state in the country.
        #[arg(long, short = 'r')]
        random: bool,
    },
    /// Run the REST API server.
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long, short = 'p')]
        port: Option<u16>,
    },
    /// Start the interactive console.
    Console {
        /// Starting country.
        #[arg(long, short = 'c', value_parser = parse_country)]
        country: Option<CountryKey>,
    },
}

fn parse_country(s: &str) -> Result<CountryKey, String> {
    s.parse()
}

fn parse_state(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("state name must not be empty".into());
    }
    Ok(trimmed.to_string())
}

fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(match cli.command {
        Command::Serve { .. } => "info",
        _ => "warn",
    });

    // ── Configuration ───────────────────────────────────────────

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if let Some(cache) = cli.cache {
        config.cache_path = cache;
    }
    if cli.offline {
        config.offline = true;
    }

    let mut enricher = config.build_enricher();

    match cli.command {
        Command::Lookup { country, state, random } => {
            let country = country.unwrap_or(config.default_country);
            let found = if random {
                capitals::random_pick(country, &mut rand::thread_rng())
            } else {
                state.as_deref().and_then(|s| capitals::resolve(s, country))
            };

            let Some(found) = found else {
                println!("No match found. Try a full state name like \"California\" or \"Karnataka\".");
                std::process::exit(1);
            };

            let enriched = enricher.enrich(&found.capital);
            print!("{}", report::render_wrapped(&found, &enriched));
        }
        Command::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.host.clone());
            let port = port.unwrap_or(config.port);
            let runtime = tokio::runtime::Runtime::new().context("Cannot start async runtime")?;
            runtime.block_on(capital_quest::server::start(&host, port, enricher, config.default_country))?;
        }
        Command::Console { country } => {
            let country = country.unwrap_or(config.default_country);
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            Console::new(&mut enricher, country)
                .run(stdin.lock(), &mut stdout)
                .context("Console I/O failed")?;
        }
    }

    Ok(())
}
