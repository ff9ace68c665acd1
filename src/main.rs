use std::sync::Arc;

use clap::Parser;
use tokio::sync::Mutex;

use quickcart_recs::{
    config::Config,
    page::MemoryPage,
    services::{HttpRecommendationClient, RecommendationCoordinator, RequestOutcome},
};

/// Fetch product recommendations from the QuickCart recommendation service
#[derive(Parser)]
#[command(name = "quickcart-recs")]
#[command(about = "Query the recommendation service and print the results", long_about = None)]
struct Cli {
    /// Product to base recommendations on; omit for popular items
    #[arg(long, default_value = "")]
    product_id: String,

    /// Number of recommendations to request (defaults to DEFAULT_NUM_RECOMMENDATIONS)
    #[arg(long)]
    num_recommendations: Option<String>,

    /// Print the list region as HTML markup instead of plain text
    #[arg(long)]
    html: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .init();

    let num_recommendations = cli
        .num_recommendations
        .unwrap_or_else(|| config.default_num_recommendations.clone());

    let page = Arc::new(Mutex::new(MemoryPage::with_inputs(
        cli.product_id,
        num_recommendations,
    )));
    let source = Arc::new(HttpRecommendationClient::new(
        config.recommendations_api_url.clone(),
    ));
    let coordinator = RecommendationCoordinator::new(source, page.clone());

    tracing::info!(api_url = %config.recommendations_api_url, "Requesting recommendations");
    let outcome = coordinator.get_recommendations().await;

    let page = page.lock().await;
    let rendered = if cli.html {
        page.list_html()
    } else {
        page.list_text()
    };
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    if page.error().visible {
        eprintln!("{}", page.error().text);
    }

    if outcome == RequestOutcome::Failed {
        std::process::exit(1);
    }

    Ok(())
}
