//! Command-line interface for sector trend analysis

use anyhow::{Context, bail};
use clap::Parser;
use comfy_table::{Table, presets::UTF8_FULL};
use prospect_llm::providers::OpenAIProvider;
use prospect_market::{QuoteCache, TechnicalSnapshot, YahooClient, cache::QuoteKey};
use prospect_signal::{
    RedditClient, Sector, SectorNarrator, SectorReport, SectorSignalPipeline, SignalConfig,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

const QUOTE_CACHE_TTL: Duration = Duration::from_secs(300);
const QUOTE_RANGE: &str = "3mo";

#[derive(Parser, Debug)]
#[command(name = "prospect")]
#[command(about = "Rank trending stocks for a market sector from Reddit sentiment", long_about = None)]
struct Args {
    /// Sector to analyze (technology, healthcare, finance, energy, consumer)
    sector: String,

    /// Number of candidates to select
    #[arg(short = 'k', long, default_value_t = 5)]
    top_k: usize,

    /// Fetch technical snapshots for the selected candidates
    #[arg(long)]
    technical: bool,

    /// Generate an LLM narrative (requires OPENAI_API_KEY)
    #[arg(long)]
    narrate: bool,

    /// Model used for the narrative
    #[arg(long, default_value = "gpt-4")]
    model: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    prospect_utils::init_tracing();

    let args = Args::parse();

    let Some(sector) = Sector::from_str(&args.sector) else {
        let known: Vec<&str> = Sector::all().iter().map(Sector::name).collect();
        bail!(
            "unknown sector '{}'; known sectors: {}",
            args.sector,
            known.join(", ")
        );
    };

    let config = Arc::new(
        SignalConfig::builder()
            .default_top_k(args.top_k)
            .with_env_credentials()
            .context("Reddit credentials are required")?
            .build()?,
    );

    info!(sector = sector.name(), top_k = args.top_k, "starting sector analysis");

    let client = RedditClient::new(config.clone())?;
    let pipeline = SectorSignalPipeline::new(client, config);
    let report = pipeline.run(&sector.query_with_top_k(args.top_k)).await?;

    print_report(&report);

    if args.technical {
        print_technical(&report).await;
    }

    if args.narrate {
        match narrate(&report, &args.model).await {
            Ok(narrative) => println!("\n{narrative}"),
            Err(err) => warn!(error = %err, "narrative generation failed; see summary above"),
        }
    }

    Ok(())
}

fn print_report(report: &SectorReport) {
    println!("{}\n", report.summary);

    if report.candidates.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Ticker",
        "Mentions",
        "Avg sentiment",
        "Relevance",
        "Rationale",
    ]);

    for candidate in &report.candidates {
        table.add_row(vec![
            candidate.ticker.clone(),
            candidate.mention_count.to_string(),
            format!("{:+.3}", candidate.average_sentiment),
            format!("{:.3}", candidate.relevance_score),
            candidate.rationale.clone(),
        ]);
    }

    println!("{table}");
}

async fn print_technical(report: &SectorReport) {
    let yahoo = YahooClient::new();
    let cache = QuoteCache::new(QUOTE_CACHE_TTL);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Ticker", "Close", "SMA-20", "RSI-14", "MACD", "Signal",
    ]);

    for candidate in &report.candidates {
        let symbol = candidate.ticker.clone();
        let key = QuoteKey::new(&symbol, QUOTE_RANGE);
        let quotes = cache
            .get_or_fetch(key, || yahoo.get_historical_range(&symbol, QUOTE_RANGE))
            .await;

        let snapshot = quotes.and_then(|quotes| TechnicalSnapshot::compute(&symbol, &quotes));
        match snapshot {
            Ok(snapshot) => {
                table.add_row(vec![
                    snapshot.symbol.clone(),
                    format!("{:.2}", snapshot.last_close),
                    format!("{:.2}", snapshot.sma_20),
                    format!("{:.1}", snapshot.rsi_14),
                    format!("{:+.3}", snapshot.macd),
                    snapshot.rsi_signal.clone(),
                ]);
            }
            // One symbol without quote data must not sink the report.
            Err(err) => warn!(symbol = %candidate.ticker, error = %err, "skipping technical snapshot"),
        }
    }

    println!("\n{table}");
}

async fn narrate(report: &SectorReport, model: &str) -> anyhow::Result<String> {
    let provider = Arc::new(OpenAIProvider::from_env()?);
    let narrator = SectorNarrator::new(provider, model);
    Ok(narrator.narrate(report).await?)
}
