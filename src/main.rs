use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use weekpeak::{WeekPeakApp, WeekPeakConfig};

/// Weekly peak temperature lookup for a latitude/longitude pair
#[derive(Debug, Parser)]
#[command(name = "weekpeak", version, about)]
struct Cli {
    /// Coordinates in the form "Latitude, Longitude"
    coordinates: String,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// OpenWeatherMap API key (overrides the configuration file)
    #[arg(long, env = "OPENWEATHERMAP_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Enable verbose diagnostic output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let app = match build_app(&cli) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    // One invocation is one submit: validate, fetch, aggregate, render.
    match app.handle_submit(&cli.coordinates) {
        Ok(summary) => {
            println!("{}", summary.display_message());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

/// Load configuration, apply CLI overrides, and set up the application
fn build_app(cli: &Cli) -> anyhow::Result<WeekPeakApp> {
    let mut config = WeekPeakConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;

    if let Some(api_key) = cli.api_key.clone() {
        config.weather.api_key = Some(api_key);
    }

    init_tracing(&config, cli.verbose);

    let app = WeekPeakApp::new(&config).context("Failed to initialize application")?;
    Ok(app)
}

/// Initialize the diagnostic trace subscriber
///
/// `RUST_LOG` takes precedence, then `--verbose`, then the configured
/// level. Diagnostics go to stderr so stdout stays clean for the summary.
fn init_tracing(config: &WeekPeakConfig, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
