// CLI presentation shell: one submission per invocation

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use trip_planner::{render, PlanSession, PlannerConfig, ResponseMode};

#[derive(Parser)]
#[command(name = "trip-planner")]
#[command(about = "Generate a day-by-day travel itinerary")]
struct Cli {
    /// Number of days (e.g., 3)
    #[arg(short, long, default_value = "2")]
    days: String,

    /// Destination (e.g., "bangkok, thailand")
    #[arg(short = 'c', long, default_value = "bangkok, thailand")]
    destination: String,

    /// Response source: live | 200 | 400 | 500
    #[arg(short, long, default_value = "200")]
    mode: String,
}

fn parse_mode(value: &str) -> Result<ResponseMode> {
    Ok(match value {
        "live" | "none" => ResponseMode::Live,
        "200" | "mock-200" => ResponseMode::MockOk,
        "400" | "mock-400" => ResponseMode::MockClientError,
        "500" | "mock-500" => ResponseMode::MockServerError,
        other => bail!("unknown mode '{other}' (expected live, 200, 400 or 500)"),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut session = PlanSession::new(PlannerConfig::from_env());
    session.days = cli.days;
    session.destination = cli.destination;
    session.mode = parse_mode(&cli.mode)?;

    let result = session.submit().await;

    if !session.error().is_empty() {
        eprintln!("{}", session.error());
    }
    if !session.raw_text().is_empty() {
        println!("{}", session.raw_text());
    }
    // Rendered independently of the raw text above.
    if let Some(view) = render(session.itinerary()) {
        println!();
        println!("{view}");
    }

    if !result.success {
        std::process::exit(1);
    }
    Ok(())
}
