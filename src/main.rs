mod commands;

use std::process::ExitCode;

use anyhow::Result;
use caladd_core::config::AppConfig;
use clap::Parser;
use env_logger::Env;

const USAGE: &str = "\
Quick add an event to your calendar.

  caladd <name> <start date> <start time> <end date> <end time>

  start date - formatted as YYYY-MM-DD, use '!' to use the current local date
  start time - formatted as HH:MM, use '!' to use the current local time
  end date   - formatted as YYYY-MM-DD, use '!' to use the same value as start date
  end time   - formatted as HH:MM, or as +[number][h|m] / -[number][h|m] which is
               applied to the start time, use '!' to apply your default offset

Example:
  caladd Standup 2024-06-01 09:00 ! +15m";

#[derive(Parser)]
#[command(name = "caladd")]
#[command(about = "Quick add an event to your calendar")]
#[command(long_about = USAGE)]
struct Cli {
    /// Identifier of the invoking user (selects their settings)
    #[arg(short, long, default_value = "cli")]
    user: String,

    /// Resolve the arguments and print the event without submitting it
    #[arg(long)]
    dry_run: bool,

    /// With --dry-run, print the resolved event as JSON
    #[arg(long, requires = "dry_run")]
    json: bool,

    /// name, start date, start time, end date, end time
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    args: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    if cli.dry_run {
        commands::add::preview(&config, &cli.user, &cli.args, cli.json)
    } else {
        commands::add::run(&config, &cli.user, &cli.args).await
    }
}
