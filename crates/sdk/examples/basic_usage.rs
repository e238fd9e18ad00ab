//! Basic SDK usage example.
//!
//! Lists collections and environments for the key in `POSTMAN_API_KEY`.
//!
//! Run with: cargo run --example basic_usage

use postman_sdk::{PostmanClient, PostmanResult};

#[tokio::main]
async fn main() -> PostmanResult<()> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("POSTMAN_API_KEY").unwrap_or_default();
    let client = PostmanClient::builder().api_key(api_key).build()?;

    println!("Listing collections...");
    let collections = client.collections().list().await?;
    println!("Found {} collections", collections.len());

    for collection in collections.iter().take(5) {
        println!(
            "  {} ({}) updated {}",
            collection.name,
            collection.uid,
            collection.updated_at.as_deref().unwrap_or("never")
        );
    }

    println!("\nListing environments...");
    let environments = client.environments().list().await?;
    println!("{}", serde_json::to_string_pretty(&environments)?);

    Ok(())
}
