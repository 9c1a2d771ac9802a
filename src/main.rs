use photosearch::{Client, Result};

async fn run() -> Result<()> {
    let client = Client::new_from_env()?;

    let photos = match std::env::args().nth(1) {
        Some(query) => client.search_photos(query).await?,
        None => client.get_photos().await?,
    };

    for photo in &photos {
        println!(
            "{}  {}  {}",
            photo.id(),
            photo.user_name(),
            photo.alt_description().unwrap_or("(no description)")
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = run().await {
        eprintln!("{}", e);
    }
}
