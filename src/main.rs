mod batch;
mod library;
mod lyrics;
mod report;
mod text_utils;
mod track;

use crate::batch::{EmbedOptions, run_embed};
use crate::lyrics::providers::sources_from_names;
use crate::lyrics::types::build_http_client;
use crate::lyrics::{HttpFetcher, LyricsResolver};
use clap::{Args, Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Application configuration from CLI
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Find lyrics on Japanese lyrics sites and embed them into audio files")]
pub struct Config {
    #[command(subcommand)]
    command: Command,
    /// Enable debug logging to stderr (RUST_LOG overrides)
    #[arg(long, global = true)]
    pub debug_log: bool,
    /// Comma-separated lyrics sources in priority order
    /// (j-lyric, uta-net, petitlyrics, j-lyric-title).
    /// If empty, the KASHI_SOURCES env var will be used as a fallback.
    #[arg(long, value_delimiter = ',', global = true)]
    pub sources: Vec<String>,
    /// Require an exact artist match when a search returns several songs
    #[arg(long, global = true, overrides_with = "no_strict")]
    pub strict: bool,
    /// Accept a matching first letter of the artist (default)
    #[arg(long = "no-strict", global = true, overrides_with = "strict")]
    pub no_strict: bool,
    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10, global = true)]
    pub timeout: u64,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Look up lyrics for one song and print them
    Search {
        title: String,
        artist: String,
        /// Only try the title as given, without punctuation variants
        #[arg(long)]
        exact_title: bool,
    },
    /// Embed lyrics into every audio file under ROOT
    Embed(EmbedArgs),
}

#[derive(Args, Debug, Clone)]
struct EmbedArgs {
    root: PathBuf,
    /// Do not actually write lyrics
    #[arg(long)]
    dry_run: bool,
    /// Look up lyrics even for files that already have them
    #[arg(long)]
    force: bool,
    /// Print each file as it is processed
    #[arg(long)]
    verbose: bool,
    /// Title keyword to exclude (partial, case-insensitive match)
    #[arg(long = "exclude-title", default_values = ["off vocal", "instrumental"])]
    exclude_title: Vec<String>,
    /// Genre keyword to exclude (partial, case-insensitive match)
    #[arg(long = "exclude-genre")]
    exclude_genre: Vec<String>,
    /// Remove embedded lyrics from excluded files
    #[arg(long)]
    delete_excluded: bool,
    /// Audio file extensions to scan
    #[arg(long, value_delimiter = ',', default_value = "m4a")]
    ext: Vec<String>,
    /// Record lookup failures per file instead of stopping the run
    #[arg(long)]
    keep_going: bool,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn sources_from_env_if_empty(cli: &mut Config) {
    if cli.sources.is_empty()
        && let Ok(s) = std::env::var("KASHI_SOURCES")
    {
        let parts: Vec<String> = s
            .split(',')
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        if !parts.is_empty() {
            cli.sources = parts;
        }
    }
}

fn init_logging(debug_log: bool) {
    let default = if debug_log { "kashi=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cfg: Config) -> Result<(), Box<dyn Error + Send + Sync>> {
    let sources = sources_from_names(&cfg.sources)?;
    let client = build_http_client(Duration::from_secs(cfg.timeout))?;
    let resolver = LyricsResolver::new(HttpFetcher::new(client), sources);
    let strict = cfg.strict && !cfg.no_strict;
    tracing::debug!(
        sources = ?resolver.sources().iter().map(|s| s.name).collect::<Vec<_>>(),
        "source chain"
    );

    match cfg.command {
        Command::Search {
            title,
            artist,
            exact_title,
        } => {
            let resolution = if exact_title {
                resolver.resolve(&artist, &title, strict).await?
            } else {
                resolver.resolve_fuzzy(&artist, &title, strict).await?
            };
            match resolution.into_lyrics() {
                Some(text) => println!("{text}"),
                None => println!("Lyrics not found."),
            }
        }
        Command::Embed(args) => {
            let root = args.root.canonicalize()?;
            let files = library::audio_files(&root, &args.ext);
            let opts = EmbedOptions {
                strict,
                dry_run: args.dry_run,
                force: args.force,
                exclude_title: args.exclude_title,
                exclude_genre: args.exclude_genre,
                delete_excluded: args.delete_excluded,
                keep_going: args.keep_going,
            };
            let verbose = args.verbose && !args.json;
            let items = run_embed(&files, &resolver, &opts, |item| {
                if verbose {
                    println!("{}", report::render_item(item));
                }
            })
            .await?;

            let summary = report::EmbedReport::new(&items, args.dry_run);
            if args.json {
                println!("{}", summary.to_json()?);
            } else {
                println!("{}", summary.render());
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut cfg = Config::parse();
    sources_from_env_if_empty(&mut cfg);
    init_logging(cfg.debug_log);

    // Print error if any, for better diagnostics
    if let Err(e) = run(cfg).await {
        eprintln!("Error: {}", e);
        return Err(e);
    }
    Ok(())
}
