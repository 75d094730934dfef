//! sign-quote - CLI to quote custom sign prices from a pricing catalog.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use sign_quote_rs::{
    load_catalog_file, quote_price, validate_catalog, AddOn, CustomerSelection, Font, FontMetrics,
    QuoteStatus, TextSizer,
};

/// Quote custom sign prices against a merchant pricing catalog.
#[derive(Parser, Debug)]
#[command(name = "sign-quote")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pricing catalog JSON file
    #[arg(short, long)]
    catalog: PathBuf,

    /// Sign text ("\n" in the argument starts a new line)
    #[arg(short, long, default_value = "")]
    text: String,

    /// Font family name
    #[arg(short, long, default_value = "sans-serif")]
    font: String,

    /// Pricing config id the font is linked to
    #[arg(short, long, default_value = "")]
    pricing: String,

    /// Uppercase glyph height in cm
    #[arg(long)]
    upper_height: Option<f64>,

    /// Smallest (x-height) glyph height in cm
    #[arg(long)]
    small_height: Option<f64>,

    /// Flat add-on price modifier (repeatable)
    #[arg(long = "addon", value_name = "PRICE", allow_negative_numbers = true)]
    addons: Vec<f64>,

    /// Validate the catalog only, don't quote
    #[arg(long)]
    validate: bool,

    /// Output the full quote as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Loading catalog: {}", args.catalog.display());

    let catalog = load_catalog_file(&args.catalog)
        .with_context(|| format!("Failed to load {}", args.catalog.display()))?;

    info!("Loaded {} pricing config(s)", catalog.len());

    // Validate
    let validation = validate_catalog(&catalog);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Catalog validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    // Assemble the selection the storefront embed would send
    let font = Font::new(
        args.font,
        FontMetrics::new(args.small_height, args.upper_height),
        args.pricing,
    );
    let mut selection = CustomerSelection::new(args.text.replace("\\n", "\n"), Some(font));
    selection.add_ons = args.addons.into_iter().map(AddOn::new).collect();

    let mut sizer = TextSizer::new();
    let quote = quote_price(&catalog, &selection, &mut sizer)?;

    // Debug output
    if args.debug {
        let json = serde_json::to_string_pretty(&quote)?;
        println!("{}", json);
        return Ok(());
    }

    match quote.status {
        QuoteStatus::Priced => {
            info!(
                "Sign size: {} x {} cm ({} x {} in), {} line(s)",
                quote.dimensions.width_cm,
                quote.dimensions.height_cm,
                quote.dimensions.width_in,
                quote.dimensions.height_in,
                quote.dimensions.number_of_lines
            );
            println!("{:.2}", quote.total);
        }
        QuoteStatus::Incomplete => {
            warn!("Selection incomplete, no price yet");
            println!("0.00");
        }
        QuoteStatus::MissingPricing => {
            warn!("Font is not linked to a known pricing config");
            println!("0.00");
        }
    }

    Ok(())
}
