// batch.rs: Embed lyrics into every audio file under a directory

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::lyrics::{Fetch, LyricsError, LyricsResolver, Resolution};
use crate::text_utils::{contains_any, preview};
use crate::track::{LoftyTrack, TrackError, TrackTags};

pub const PREVIEW_CHARS: usize = 20;

#[derive(Debug, Clone, Default)]
pub struct EmbedOptions {
    pub strict: bool,
    pub dry_run: bool,
    pub force: bool,
    pub exclude_title: Vec<String>,
    pub exclude_genre: Vec<String>,
    pub delete_excluded: bool,
    /// Record transport and tag-write failures per file instead of aborting.
    pub keep_going: bool,
}

#[derive(Error, Debug)]
pub enum EmbedError {
    #[error(transparent)]
    Lyrics(#[from] LyricsError),
    #[error(transparent)]
    Track(#[from] TrackError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Found { preview: String },
    NotFound,
    AlreadyEmbedded { preview: String },
    Skipped,
    Incomplete,
    Unreadable { reason: String },
    Failed { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackReport {
    pub path: String,
    pub artist: Option<String>,
    pub title: Option<String>,
    #[serde(flatten)]
    pub outcome: Outcome,
}

fn is_excluded(title: &str, genre: Option<&str>, opts: &EmbedOptions) -> bool {
    contains_any(title, &opts.exclude_title)
        || genre.is_some_and(|g| contains_any(g, &opts.exclude_genre))
}

fn drop_lyrics<T: TrackTags>(track: &mut T) -> Result<(), TrackError> {
    if track.remove_lyrics()? {
        track.save()?;
    }
    Ok(())
}

/// Decide and apply what happens to one track.
pub async fn process_track<T: TrackTags, F: Fetch>(
    track: &mut T,
    resolver: &LyricsResolver<F>,
    opts: &EmbedOptions,
) -> Result<Outcome, EmbedError> {
    let (Some(artist), Some(title)) = (track.artist(), track.title()) else {
        return Ok(Outcome::Incomplete);
    };
    let (artist, title) = (artist.to_string(), title.to_string());

    if is_excluded(&title, track.genre(), opts) {
        if opts.delete_excluded && !opts.dry_run && track.has_lyrics() {
            drop_lyrics(track)?;
        }
        return Ok(Outcome::Skipped);
    }

    if let Some(existing) = track.lyrics()
        && !opts.force
    {
        return Ok(Outcome::AlreadyEmbedded {
            preview: preview(existing, PREVIEW_CHARS),
        });
    }

    match resolver.resolve_fuzzy(&artist, &title, opts.strict).await? {
        Resolution::Found(text) => {
            if !opts.dry_run {
                track.set_lyrics(&text)?;
                track.save()?;
            }
            Ok(Outcome::Found {
                preview: preview(&text, PREVIEW_CHARS),
            })
        }
        Resolution::NotFound => {
            // A forced refresh that finds nothing clears the stale lyrics.
            if opts.force && !opts.dry_run && track.has_lyrics() {
                drop_lyrics(track)?;
            }
            Ok(Outcome::NotFound)
        }
    }
}

/// Process `files` in order. `on_item` sees each report as soon as it is made.
pub async fn run_embed<F: Fetch>(
    files: &[PathBuf],
    resolver: &LyricsResolver<F>,
    opts: &EmbedOptions,
    mut on_item: impl FnMut(&TrackReport),
) -> Result<Vec<TrackReport>, EmbedError> {
    let mut reports = Vec::with_capacity(files.len());
    for path in files {
        let shown = path.display().to_string();
        let report = match LoftyTrack::open(path) {
            Err(err) => {
                warn!(path = %shown, error = %err, "cannot read tags");
                TrackReport {
                    path: shown,
                    artist: None,
                    title: None,
                    outcome: Outcome::Unreadable {
                        reason: err.to_string(),
                    },
                }
            }
            Ok(mut track) => {
                let outcome = match process_track(&mut track, resolver, opts).await {
                    Ok(outcome) => outcome,
                    Err(err) if opts.keep_going => {
                        warn!(path = %shown, error = %err, "lookup failed, continuing");
                        Outcome::Failed {
                            reason: err.to_string(),
                        }
                    }
                    Err(err) => return Err(err),
                };
                TrackReport {
                    path: shown,
                    artist: track.artist().map(str::to_string),
                    title: track.title().map(str::to_string),
                    outcome,
                }
            }
        };
        on_item(&report);
        reports.push(report);
    }
    info!(files = reports.len(), "embed run finished");
    Ok(reports)
}
