//! CLI entry point for the NEO Stats dashboard.
//!
//! Provides subcommands for running one fetch-and-aggregate pass over a date
//! range and for printing the date constraints applied before any request.

use anyhow::{Result, bail};
use chrono::{NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use neo_stats::app::Dashboard;
use neo_stats::fetch::{BasicClient, NasaNeoClient};
use neo_stats::output::{print_json, print_series, print_summary, write_series_csv};
use neo_stats::validate::{DateRange, RULES};
use std::ffi::OsStr;
use std::path::Path;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "neo_stats")]
#[command(about = "A dashboard core for near-Earth-object feed statistics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the feed for a date range and print the aggregated statistics
    Fetch {
        /// Range start (YYYY-MM-DD)
        #[arg(short, long, value_name = "YYYY-MM-DD")]
        start: NaiveDate,

        /// Range end (YYYY-MM-DD)
        #[arg(short, long, value_name = "YYYY-MM-DD")]
        end: NaiveDate,

        /// CSV file to append the daily-count series to
        #[arg(short, long)]
        output: Option<String>,

        /// Also print the full summary as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the date constraints checked before any request is made
    Rules,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/neo_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("neo_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch {
            start,
            end,
            output,
            json,
        } => {
            let api_key =
                std::env::var("NASA_API_KEY").unwrap_or_else(|_| "DEMO_KEY".to_string());

            let client = BasicClient::new()?;
            let mut dashboard = Dashboard::new(NasaNeoClient::new(client, api_key));

            let range = DateRange {
                start: start.and_time(NaiveTime::MIN),
                end: end.and_time(NaiveTime::MIN),
            };
            dashboard.run(range, Utc::now().date_naive()).await;

            if let Some(message) = &dashboard.state().error {
                bail!("{message}");
            }

            if let (Some(range), Some(summary)) =
                (&dashboard.state().range, &dashboard.state().result)
            {
                print_series(&summary.series);
                print_summary(summary, range);

                if json {
                    print_json(summary)?;
                }
                if let Some(path) = output {
                    write_series_csv(&path, &summary.series)?;
                }
            }
        }
        Commands::Rules => {
            for (i, rule) in RULES.iter().enumerate() {
                println!("{}. {rule}", i + 1);
            }
        }
    }

    Ok(())
}
