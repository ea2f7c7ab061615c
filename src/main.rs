//! txboard CLI
//!
//! Terminal front end for the transaction dashboard:
//! - Show the transaction table and daily totals
//! - Print the daily-totals chart description as JSON
//! - Generate a default config file
//!
//! Logs go to stderr so table, JSON and CSV output on stdout stay clean.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use txboard::config::{generate_default_config, Config, LoggingConfig};
use txboard::export::{write_rows, write_totals, OutputFormat};
use txboard::loader::{DataSource, FileSource, HttpSource};
use txboard::view::BufferedView;
use txboard::Dashboard;

#[derive(Parser)]
#[command(name = "txboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Customer transaction dashboard for the terminal")]
#[command(long_about = "Loads customers and transactions from a JSON endpoint (or a local file),\nfilters them by customer name and maximum amount, and shows daily totals.\nIf the data cannot be loaded, a built-in sample dataset is shown instead.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data endpoint URL (overrides config)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Read the dataset from a JSON file instead of the endpoint
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Request timeout in seconds (overrides config)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Config file (default: searched in standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the transaction table and daily totals
    Show(FilterArgs),

    /// Print the daily-totals chart description as JSON
    Chart(FilterArgs),

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// What a loaded dashboard is printed as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Report {
    /// Rows, daily totals and a summary line
    Table,
    /// The chart description as JSON
    Chart,
}

/// Raw filter inputs, interpreted exactly like the dashboard's input fields
#[derive(Args, Default)]
pub struct FilterArgs {
    /// Case-insensitive customer name fragment
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Maximum amount (inclusive); non-numeric or non-positive means no limit
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub max_amount: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (filters, report) = match &cli.command {
        Commands::Config { output } => return write_default_config(output.as_deref()),
        Commands::Show(filters) => (filters, Report::Table),
        Commands::Chart(filters) => (filters, Report::Chart),
    };

    let (mut config, config_warning) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, None),
        None => Config::load_default(),
    };
    if let Some(endpoint) = &cli.endpoint {
        config.source.endpoint = endpoint.clone();
    }
    if let Some(secs) = cli.timeout_secs {
        config.source.timeout_secs = Some(secs);
    }

    init_logging(&config.logging);
    if let Some(warning) = config_warning {
        tracing::warn!("Ignoring config file: {}", warning);
    }

    let source: Box<dyn DataSource> = match &cli.input {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(HttpSource::new(config.source.http())?),
    };
    tracing::debug!("Loading dataset from {}", source.describe());

    let mut dashboard = Dashboard::new(BufferedView::new());
    dashboard.start(source.as_ref()).await;
    let shown = dashboard.apply_filter(&filters.name, &filters.max_amount);

    let summary = dashboard.dataset().map(|dataset| {
        let span = dataset
            .date_span()
            .map(|(first, last)| {
                format!(
                    ", {} to {}",
                    first.format("%b %d, %Y"),
                    last.format("%b %d, %Y")
                )
            })
            .unwrap_or_default();
        format!(
            "{} of {} transactions, {} customers{}",
            shown,
            dataset.transactions.len(),
            dataset.customers.len(),
            span
        )
    });

    let view = dashboard.into_view();
    for notice in view.notices.messages() {
        eprintln!("error: {}", notice);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match report {
        Report::Table => {
            write_rows(&mut out, view.table.rows(), cli.format)?;
            let totals = view.chart.spec().map(|spec| spec.totals()).unwrap_or_default();
            if cli.format == OutputFormat::Table {
                writeln!(out)?;
                write_totals(&mut out, &totals, cli.format)?;
                if let Some(summary) = summary {
                    writeln!(out)?;
                    writeln!(out, "{}", summary)?;
                }
            } else {
                tracing::info!(dates = totals.len(), total = totals.grand_total(), "Daily totals");
            }
        }
        Report::Chart => {
            let spec = view.chart.spec().context("chart was not drawn")?;
            serde_json::to_writer_pretty(&mut out, spec)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("txboard={}", logging.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

fn write_default_config(output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            // Create parent directory if needed
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)
                .with_context(|| format!("Failed to write config to {:?}", path))?;
            println!("Config written to {:?}", path);
        }
        None => {
            print!("{}", config);
        }
    }

    Ok(())
}
