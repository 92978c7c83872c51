use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use chrono::{Local, NaiveDate};
use clap::Parser;
use reqwest::Client;
use tefas_tracker::{
    TrackerError,
    app::{Portfolio, ui, utils::parse_currency},
    config::{BASE_CURRENCY, Config},
    services::{FrankfurterRates, TefasPriceSource},
};
use tracing_subscriber::EnvFilter;

/// Profit/loss report for TEFAS funds listed in a bank export.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Exported account statement
    input_file: String,

    /// Export format of the input file (teb, csv)
    format: String,

    /// Currency to report in
    #[arg(long, default_value = BASE_CURRENCY, value_parser = parse_currency)]
    currency: String,

    /// Evaluate as of this date instead of today (YYYY-MM-DD)
    #[arg(long)]
    date: Option<NaiveDate>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<(), TrackerError> {
    let config = Config::from_env()?;
    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());

    let portfolio = Portfolio::from_file(&cli.input_file, &cli.format, today)?;

    let client = Client::new();
    let prices = TefasPriceSource::new(client.clone(), config.tefas_url().clone());
    let rates = FrankfurterRates::new(client, config.fx_url().clone());

    let report = portfolio
        .report(
            &prices,
            &rates,
            &cli.currency,
            today,
            *config.lookback_days(),
        )
        .await?;

    let stdout = io::stdout();
    let use_color = stdout.is_terminal();
    ui::print_report(&report, &mut stdout.lock(), use_color)
}
