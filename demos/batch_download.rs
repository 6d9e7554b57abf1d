//! Batch download example
//!
//! Downloads every Workshop URL given on the command line into `./downloads`.
//!
//! ```bash
//! STEAM_API_KEY=... cargo run --example batch_download -- \
//!     "https://steamcommunity.com/sharedfiles/filedetails/?id=2718933105" \
//!     "https://steamcommunity.com/sharedfiles/filedetails/?id=2972861651"
//! ```

use workshop_dl::{BatchStatus, WorkshopClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging (optional)
    // Uncomment if you add tracing-subscriber to your dependencies:
    // tracing_subscriber::fmt::init();

    let urls: Vec<String> = std::env::args().skip(1).collect();
    if urls.is_empty() {
        eprintln!("usage: batch_download <workshop url>...");
        return Ok(());
    }

    let client = WorkshopClient::from_env()?;

    for outcome in client.download_all(&urls, "downloads") {
        let title = outcome.title.as_deref().unwrap_or("<unknown>");
        match outcome.status {
            BatchStatus::Saved(path) => println!("✓ {} -> {}", title, path.display()),
            BatchStatus::NoContent => println!("- {} has no downloadable content", title),
            BatchStatus::Failed(e) => println!("✗ {}: {}", outcome.url, e),
        }
    }

    Ok(())
}
