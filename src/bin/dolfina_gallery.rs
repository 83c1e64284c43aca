//! dolfina-gallery: CLI front-end for the gallery pipeline.
//!
//! Stands in for the web presentation layer: drives the same facade the UI
//! would and renders its loading/error/empty/data states as terminal output.
//!
//! ## Example Usage
//!
//! ```bash
//! # Enumerate the collection
//! dolfina-gallery collection
//!
//! # One token's detail view with its auction panel
//! dolfina-gallery token 5
//!
//! # Against a different endpoint, as machine-readable JSON
//! dolfina-gallery --rpc-url https://base.llamarpc.com --json collection
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};

use dolfina_gallery::{short_address, FetchState, Gallery, GalleryConfig, TokenMetadata};

#[derive(Parser)]
#[command(
    name = "dolfina-gallery",
    author,
    version,
    about = "Browse the La Dolfina NFT collection from the chain",
    long_about = "Reads token, metadata, and auction state directly from the collection and\n\
                  marketplace contracts. Configuration defaults target Base mainnet and can\n\
                  be overridden with GALLERY_* environment variables or flags."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON-RPC endpoint (overrides GALLERY_RPC_URL)
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    /// Collection contract address (overrides GALLERY_COLLECTION_ADDRESS)
    #[arg(long, global = true)]
    collection: Option<String>,

    /// Output as JSON instead of human-readable format
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate the collection and print every resolved token
    Collection,
    /// Show one token's detail view, including auction state
    Token {
        /// Token id to inspect
        token_id: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GalleryConfig::from_env();
    if let Some(rpc_url) = cli.rpc_url {
        config.rpc_url = rpc_url;
    }
    if let Some(collection) = cli.collection {
        config.collection_address = collection;
    }
    let gallery = Gallery::new(config)?;

    match cli.command {
        Commands::Collection => show_collection(&gallery, cli.json).await,
        Commands::Token { token_id } => show_token(&gallery, token_id, cli.json).await,
    }
}

async fn show_collection(gallery: &Gallery, json: bool) -> Result<()> {
    eprintln!("Loading collection…");

    match FetchState::from_result(gallery.load_collection().await) {
        FetchState::Ready(tokens) if tokens.is_empty() => {
            println!("No tokens found in this collection.");
        }
        FetchState::Ready(tokens) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&tokens)?);
            } else {
                render_grid(gallery, &tokens);
            }
        }
        FetchState::Failed(message) => {
            eprintln!("Error: {message}");
            std::process::exit(1);
        }
        FetchState::Loading => {}
    }
    Ok(())
}

fn render_grid(gallery: &Gallery, tokens: &[TokenMetadata]) {
    let config = gallery.config();
    println!("{} ({} tokens)", config.collection_name, tokens.len());
    println!(
        "Contract: {} ({})",
        short_address(&config.collection_address),
        config.rpc_url
    );
    println!();
    for token in tokens {
        println!("#{:<4} {}", token.token_id, token.name);
        if let Some(description) = &token.description {
            println!("      {description}");
        }
        println!("      {}", token.image);
    }
}

async fn show_token(gallery: &Gallery, token_id: u64, json: bool) -> Result<()> {
    eprintln!("Loading token {token_id}…");

    let detail = match FetchState::from_result(gallery.load_token(token_id).await) {
        FetchState::Ready(detail) => detail,
        FetchState::Failed(message) => {
            eprintln!("Error: {message}");
            std::process::exit(1);
        }
        FetchState::Loading => return Ok(()),
    };
    let auction = gallery.load_auction(token_id).await;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "token": detail.token,
                "owner": detail.owner,
                "auction": auction,
            }))?
        );
        return Ok(());
    }

    let token = &detail.token;
    println!("{}", token.name);
    if let Some(description) = &token.description {
        println!("{description}");
    }
    println!();
    println!("Token ID:  #{}", token.token_id);
    println!(
        "Contract:  {}",
        short_address(&gallery.config().collection_address)
    );
    println!("Owner:     {}", short_address(&detail.owner));
    println!("Image:     {}", token.image);

    println!();
    println!(
        "Auction:   {}",
        if auction.is_active { "Live" } else { "Ended" }
    );
    if let Some(reserve) = &auction.reserve_price {
        println!("Reserve:   {reserve}");
    }
    if let Some(interval) = auction.extension_interval {
        println!("Extension: {interval}s");
    }
    if let Some(listing_id) = auction.listing_id {
        println!("Listing:   #{listing_id}");
    }

    if let Some(attributes) = &token.attributes {
        if !attributes.is_empty() {
            println!();
            println!("Attributes:");
            for attribute in attributes {
                println!("  {:<16} {}", attribute.trait_type, attribute.value);
            }
        }
    }
    Ok(())
}
