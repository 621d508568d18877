//! ScraperAPI tools demo
//!
//! Loads `scrapi.toml` if present (falling back to `SCRAPERAPI_API_KEY`),
//! prints the tool declarations, then calls each tool once.
//!
//! Setup:
//! ```bash
//! export SCRAPERAPI_API_KEY=your-key
//! cargo run --example scraperapi_usage
//! ```

use anyhow::Result;
use scrapi_core::ScrapiConfig;
use scrapi_telemetry::init_telemetry;
use scrapi_web_tools::ScraperApiToolkit;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_telemetry();

    println!("=== ScraperAPI Tools Demo ===\n");

    let config = match ScrapiConfig::load() {
        Ok(config) => {
            println!("Loaded scrapi.toml");
            config
        }
        Err(e) => {
            println!("No config file ({}), using defaults and environment", e);
            ScrapiConfig::default()
        }
    };

    let toolkit = ScraperApiToolkit::from_config(&config)?;

    println!("\nDeclared tools:");
    for declaration in toolkit.declarations() {
        println!("  - {}: {}", declaration.name, declaration.description);
        println!(
            "    {}",
            serde_json::to_string(&declaration.input_schema)?
        );
    }

    println!("\n1. Page fetch (markdown)");
    let page = toolkit
        .scrape()
        .invoke_async(json!({
            "url": "https://example.com",
            "output_format": "markdown"
        }))
        .await?;
    println!("{}", preview(&page));

    println!("\n2. Google search");
    let results = toolkit
        .google_search()
        .invoke_async(json!({"query": "rust async runtime", "num": 5}))
        .await?;
    println!("{}", preview(&results));

    println!("\n3. Amazon search");
    let products = toolkit
        .amazon_search()
        .invoke_async(json!({
            "query": "mechanical keyboard",
            "country_code": "us",
            "page": 1
        }))
        .await?;
    println!("{}", preview(&products));

    Ok(())
}

fn preview(text: &str) -> String {
    const LIMIT: usize = 500;
    match text.char_indices().nth(LIMIT) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
