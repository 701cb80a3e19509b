use clap::{Parser, Subcommand, ValueEnum};
use spokes::prelude::*;
use tracing::error;

#[derive(Parser)]
#[command(name = "spokes", about = "Inspect open mobility data feeds")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Family {
    /// GBFS v1.x, single feed list.
    GbfsV1,
    /// GBFS v2.x, locale-grouped services.
    Gbfs,
    /// GOFS v1.
    Gofs,
}

#[derive(Subcommand)]
enum Command {
    /// Print the feeds published by a system's discovery document.
    Feeds {
        url: String,
        #[arg(long, value_enum, default_value = "gbfs")]
        family: Family,
        /// Locale to select for locale-grouped systems.
        #[arg(long, default_value = "en")]
        locale: String,
    },
    /// Fetch one feed of a GBFS v2 system and dump it as JSON.
    Dump {
        url: String,
        feed: String,
        #[arg(long, default_value = "en")]
        locale: String,
    },
}

fn main() {
    tracing_subscriber::fmt().init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fetcher = HttpFetcher::new();
    match cli.command {
        Command::Feeds {
            url,
            family,
            locale,
        } => match family {
            Family::GbfsV1 => {
                let discovery = gbfs::v1::Gbfs::new(&fetcher).discover(&url)?;
                print_manifest(&discovery.manifest);
            }
            Family::Gbfs => {
                let services = gbfs::v2::Gbfs::new(&fetcher).discover(&url)?;
                print_manifest(services.service(&locale)?);
            }
            Family::Gofs => {
                let discovery = gofs::Gofs::new(&fetcher).discover(&url)?;
                print_manifest(&discovery.manifest);
            }
        },
        Command::Dump { url, feed, locale } => {
            let services = gbfs::v2::Gbfs::new(&fetcher).discover(&url)?;
            let manifest = services.service(&locale)?;
            let kind = gbfs::v2::Feed::from_wire(&feed)
                .ok_or_else(|| spokes::Error::UnknownFeedType(feed.clone()))?;
            let feed_url = manifest
                .url_for(kind)
                .ok_or_else(|| spokes::Error::FeedNotPublished(feed))?;
            let bytes = fetcher.fetch(feed_url.as_str())?;
            let value: serde_json::Value = serde_json::from_slice(&bytes)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

fn print_manifest<K: FeedType>(manifest: &Manifest<K>) {
    let mut feeds: Vec<_> = manifest.iter().collect();
    feeds.sort_by_key(|(kind, _)| kind.wire_name());
    for (kind, url) in feeds {
        println!("{:<24} {url}", kind.wire_name());
    }
}
