//! Loads wishlists from a JSON file into a running wishlist service.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use wl_http_client::HttpWishlistClient;
use wl_http_client::seed::{load_seed_file, seed};

/// Seed a wishlist service from a JSON array of `{name, user, entries}`.
#[derive(Debug, Parser)]
#[command(name = "wishlist-seed", version)]
struct Args {
    /// Empty the store (DELETE /wishlists/reset) before loading.
    #[arg(long)]
    reset: bool,

    /// Base URL of the wishlist service (default: http://localhost:5000).
    #[arg(long, env = "WISHLIST_API_URL")]
    url: Option<String>,

    /// Seed file. `entries` may be a comma-separated list of item names.
    file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let client = HttpWishlistClient::new(args.url);

    let health = client
        .health()
        .await
        .with_context(|| format!("wishlist service at {} is not healthy", client.endpoint()))?;
    info!("wishlist service at {}: {}", client.endpoint(), health.message);

    let payloads = load_seed_file(&args.file)?;
    let created = seed(&client, &payloads, args.reset).await?;
    info!("seeded {} wishlists", created.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_flags_and_file() {
        let args =
            Args::try_parse_from(["wishlist-seed", "--reset", "--url", "http://svc:5000", "a.json"])
                .unwrap();
        assert!(args.reset);
        assert_eq!(args.url.as_deref(), Some("http://svc:5000"));
        assert_eq!(args.file, PathBuf::from("a.json"));
    }

    #[test]
    fn help_is_not_an_unknown_option() {
        let err = Args::try_parse_from(["wishlist-seed", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn second_file_is_rejected() {
        let err = Args::try_parse_from(["wishlist-seed", "a.json", "b.json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn file_is_required() {
        let err = Args::try_parse_from(["wishlist-seed", "--reset"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
