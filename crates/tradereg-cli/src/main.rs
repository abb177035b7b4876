mod analyze;
mod display;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tradereg_classify::{classify, detect_tariffs};
use tradereg_client::{AnalysisClient, DEFAULT_BASE_URL};
use tradereg_core::{AnalysisForm, AnalysisSession, NoticeKind, ParsedAnalysisResult};

use crate::display::Heading;

#[derive(Parser)]
#[command(
    name = "tradereg",
    version,
    about = "Regulatory requirements check for cross-border trade"
)]
struct Cli {
    /// Base URL of the regulatory analysis API.
    #[arg(long, global = true, env = "TRADEREG_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Request timeout in seconds.
    #[arg(long, global = true, env = "TRADEREG_TIMEOUT_SECS", default_value_t = 60)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask the analysis service about a product and destination.
    Analyze {
        /// Product name, e.g. "Coffee Beans".
        #[arg(long)]
        product: String,
        /// Destination country code (see `tradereg catalog`).
        #[arg(long)]
        country: String,
        /// Product category (see `tradereg catalog`).
        #[arg(long)]
        category: String,
        #[arg(long, default_value = tradereg_core::catalog::DEFAULT_ACTIVITY)]
        activity: String,
        /// Specifications, intended use, and other context.
        #[arg(long, default_value = "")]
        details: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Classify a saved analysis result without contacting the service.
    Classify {
        /// JSON file holding an analysis result; stdin when omitted or `-`.
        path: Option<PathBuf>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List the countries, product categories, and activity types.
    Catalog,
}

#[derive(Args)]
struct OutputArgs {
    /// Print the classified result as JSON.
    #[arg(long)]
    json: bool,
    /// Also list tariff figures found in the summary.
    #[arg(long, conflicts_with = "json")]
    show_tariffs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("tradereg v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze {
            product,
            country,
            category,
            activity,
            details,
            output,
        } => {
            let client = AnalysisClient::with_timeout(
                cli.api_url,
                Duration::from_secs(cli.timeout_secs),
            )?;
            let form = AnalysisForm {
                product,
                destination_country: country,
                product_category: category,
                activity_type: activity,
                additional_details: details,
            };

            let mut session = AnalysisSession::new();
            eprintln!("Analyzing requirements...");
            let outcome = analyze::run_analysis(&client, &mut session, &form).await;
            // Failures are reported through the returned error.
            if let Some(notice) = session.notice()
                && notice.kind == NoticeKind::Success
            {
                eprintln!("{}", notice.message);
            }
            let outcome = outcome?;

            let heading = Heading {
                product: Some(form.product.trim()),
                activity: &outcome.input.activity_type,
                country: &outcome.input.country,
            };
            print_result(&outcome.parsed, &heading, &output)?;
        }
        Command::Classify { path, output } => {
            let result = analyze::load_result(path.as_deref())?;
            let parsed = classify(&result);
            print_result(&parsed, &Heading::from_result(&result), &output)?;
        }
        Command::Catalog => {
            println!("{}", display::render_catalog());
        }
    }

    Ok(())
}

fn print_result(
    parsed: &ParsedAnalysisResult,
    heading: &Heading<'_>,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(parsed)?);
        return Ok(());
    }

    let tariffs = output.show_tariffs.then(|| detect_tariffs(&parsed.summary));
    println!("{}", display::render_card(parsed, heading, tariffs.as_deref()));
    Ok(())
}
