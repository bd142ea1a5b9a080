use clap::Parser;
use spotify_search::{
    format_duration_ms, Credentials, SearchSession, SpotifyClientImpl, SpotifySearchClient,
};

/// Spotify track search
#[derive(Parser)]
#[command(
    name = "spotify-search",
    about = "Search Spotify tracks with client-credentials auth",
    long_about = None
)]
struct Cli {
    /// Search query
    #[arg(default_value = "coding")]
    query: String,

    /// Results per page
    #[arg(long, default_value_t = 20)]
    limit: u32,

    /// Maximum number of pages to fetch (all pages when omitted)
    #[arg(long)]
    pages: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Cli::parse();

    // Get credentials from environment
    let credentials = match Credentials::from_env() {
        Ok(creds) => creds,
        Err(e) => {
            eprintln!("❌ Error: {e}");
            eprintln!();
            eprintln!("Please set the following environment variables:");
            eprintln!("  SPOTIFY_CLIENT_ID=your_app_client_id");
            eprintln!("  SPOTIFY_CLIENT_SECRET=your_app_client_secret");
            eprintln!();
            eprintln!("Both come from your app page on developer.spotify.com.");
            std::process::exit(1);
        }
    };

    let http_client = http_client::native::NativeClient::new();
    let client = SpotifyClientImpl::new(Box::new(http_client), credentials);

    if let Err(e) = client.authenticate().await {
        eprintln!("❌ Authentication failed: {e}");
        std::process::exit(1);
    }

    let mut session = SearchSession::new(&args.query, args.limit);
    let mut pages_fetched = 0u32;
    loop {
        if let Some(max_pages) = args.pages {
            if pages_fetched >= max_pages {
                break;
            }
        }
        match client.load_more(&mut session).await {
            Ok(true) => pages_fetched += 1,
            Ok(false) => break,
            Err(e) => {
                eprintln!("❌ Search failed: {e}");
                std::process::exit(1);
            }
        }
    }

    for (i, track) in session.tracks().iter().enumerate() {
        println!(
            "{:>3}. {} - {} [{}]",
            i + 1,
            track.primary_artist().unwrap_or("(unknown artist)"),
            track.name,
            format_duration_ms(track.duration_ms)
        );
    }
    println!();
    println!(
        "{} of {} matching tracks for '{}'",
        session.tracks().len(),
        session.total(),
        args.query
    );

    Ok(())
}
