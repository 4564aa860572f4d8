//! CLI entry point for the vault recipes.
//!
//! Each subcommand is one recipe: a one-shot batch that turns an export file
//! or a year into Markdown notes for the knowledge base.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use vault_recipes::calendar::{generate_daily_summaries, generate_monthly_summaries};
use vault_recipes::fixtures::{FixtureOptions, convert_fixtures};
use vault_recipes::output::{DirSink, NoteSink, WriteReport};
use vault_recipes::polar::convert_polarbeat;

#[derive(Parser)]
#[command(name = "vault_recipes")]
#[command(about = "Turn personal data exports into knowledge base notes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert Polar Beat CSV exports into Taekwondo session notes
    #[command(alias = "polar")]
    ConvertPolarbeat {
        /// Directory holding the CSV exports
        #[arg(short, long, default_value = "input/polarbeat")]
        input: PathBuf,

        /// Directory to write notes to
        #[arg(short, long, default_value = "output/polarbeat")]
        output: PathBuf,
    },
    /// Convert a football fixture feed into match, referee and matchweek notes
    ConvertFixtures {
        /// Fixture feed JSON file
        #[arg(short, long, default_value = "premier_league_games_2024.json")]
        input: PathBuf,

        /// Directory to write notes to
        #[arg(short, long, default_value = "output_notes")]
        output: PathBuf,

        /// Competition name used in note titles
        #[arg(long, default_value = "Premier League")]
        competition: String,

        /// Season label used in matchweek titles
        #[arg(long, default_value = "2024-2025")]
        season: String,
    },
    /// Generate one daily summary note per day of a year
    GenerateDailySummaries {
        year: i32,

        /// Directory to write notes to
        #[arg(short, long, default_value = "output/Daily")]
        output: PathBuf,
    },
    /// Generate one monthly summary note per month of a year
    GenerateMonthlySummaries {
        year: i32,

        /// Directory to write notes to [default: output/Monthly/<YEAR>]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::ConvertPolarbeat { .. } => "convert-polarbeat",
            Commands::ConvertFixtures { .. } => "convert-fixtures",
            Commands::GenerateDailySummaries { .. } => "generate-daily-summaries",
            Commands::GenerateMonthlySummaries { .. } => "generate-monthly-summaries",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_tracing();

    let cli = Cli::parse();
    let recipe = cli.command.name();

    match run(cli.command).await {
        Ok(report) => {
            info!(recipe, written = report.written, "Recipe completed successfully");
            Ok(())
        }
        Err(e) => {
            error!(recipe, error = %format!("{e:#}"), "Recipe failed");
            Err(e)
        }
    }
}

/// Logging setup: colored stderr + JSON rolling log file.
fn init_tracing() -> WorkerGuard {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/vault_recipes.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("vault_recipes.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    file_guard
}

fn dir_sink(output: &Path) -> Arc<dyn NoteSink> {
    info!(output = %output.display(), "Writing notes");
    Arc::new(DirSink::new(output))
}

async fn run(command: Commands) -> Result<WriteReport> {
    match command {
        Commands::ConvertPolarbeat { input, output } => {
            convert_polarbeat(&input, dir_sink(&output)).await
        }
        Commands::ConvertFixtures {
            input,
            output,
            competition,
            season,
        } => {
            let options = FixtureOptions {
                competition,
                season,
            };
            convert_fixtures(&input, &options, dir_sink(&output)).await
        }
        Commands::GenerateDailySummaries { year, output } => {
            generate_daily_summaries(year, dir_sink(&output)).await
        }
        Commands::GenerateMonthlySummaries { year, output } => {
            let output =
                output.unwrap_or_else(|| PathBuf::from("output/Monthly").join(year.to_string()));
            generate_monthly_summaries(year, dir_sink(&output)).await
        }
    }
}
