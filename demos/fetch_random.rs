//! Fetch one random drink and its thumbnail, demonstrating both call paths.
//!
//! ```sh
//! RUST_LOG=drinks_net=debug cargo run --example fetch_random
//! ```

use drinks_net::api::{DrinkEndpoint, DEMO_API_KEY};
use drinks_net::models::DrinkPage;
use drinks_net::NetworkClient;
use image::GenericImageView;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = NetworkClient::builder().api_key(DEMO_API_KEY).build()?;

    let page: DrinkPage = client.request(&DrinkEndpoint::Random.endpoint()).await?;
    let Some(drink) = page.drinks.first() else {
        println!("no drink returned");
        return Ok(());
    };
    println!(
        "{} ({})",
        drink.name,
        drink.category.as_deref().unwrap_or("uncategorized")
    );

    if let Some(url) = drink.thumbnail.as_deref() {
        let thumbnail = client.request_image(url).await?;
        println!("thumbnail: {}x{}", thumbnail.width(), thumbnail.height());

        // A second request for the same URL is served from the content cache.
        client.request_image(url).await?;
    }

    Ok(())
}
