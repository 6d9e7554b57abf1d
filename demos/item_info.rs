//! Item info example
//!
//! This example demonstrates the core functionality of workshop-dl:
//! - Configuring the API key from the environment
//! - Opening a Workshop item from its URL
//! - Reading metadata and creator details
//! - Downloading the item's file
//!
//! ```bash
//! STEAM_API_KEY=... cargo run --example item_info -- \
//!     "https://steamcommunity.com/sharedfiles/filedetails/?id=2934902806"
//! ```

use workshop_dl::WorkshopClient;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging (optional)
    // Uncomment if you add tracing-subscriber to your dependencies:
    // tracing_subscriber::fmt::init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://steamcommunity.com/sharedfiles/filedetails/?id=2934902806".into());

    let client = WorkshopClient::from_env()?;
    let mut item = client.item(&url)?;

    println!("File ID:           {}", item.id());
    println!("Creator ID:        {}", item.creator_id());
    println!("Creator URL:       {}", item.creator_url());
    println!("Creator Name:      {}", item.creator_name()?);
    println!("Creator Real Name: {:?}", item.creator_real_name());
    println!("Creator Avatar:    {:?}", item.creator_avatar());
    println!("App ID:            {}", item.app_id());
    println!("File Size:         {}", item.file_size());
    println!("File Name:         {}", item.filename());
    println!("File URL:          {:?}", item.file_url());
    println!("Preview URL:       {:?}", item.preview_url());
    println!("Title:             {}", item.title());
    println!("Description:       {:?}", item.description());
    println!("Time Created:      {}", item.time_created());
    println!("Time Updated:      {}", item.time_updated());
    println!("Tags:              {:?}", item.tags());
    println!("Views:             {}", item.views());
    println!("Followers:         {}", item.followers());
    println!("Subscriptions:     {}", item.subscriptions());

    println!("\nDownloading...");
    match item.download_to("example_map")? {
        Some(path) => println!("✓ Saved {}", path.display()),
        None => println!("✗ Item has no downloadable content"),
    }

    Ok(())
}
