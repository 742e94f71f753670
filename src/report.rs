// report.rs: Summaries of an embed run

use std::fmt::Write;

use serde::Serialize;

use crate::batch::{Outcome, TrackReport};

const RULE: &str = "=================================";
const SEPARATOR: &str = "--------------------------------";

#[derive(Debug, Serialize)]
pub struct EmbedReport<'a> {
    pub dry_run: bool,
    pub items: &'a [TrackReport],
}

fn label(item: &TrackReport) -> String {
    match (&item.artist, &item.title) {
        (Some(artist), Some(title)) => format!("{artist} - {title}"),
        _ => item.path.clone(),
    }
}

fn message(item: &TrackReport) -> String {
    match &item.outcome {
        Outcome::Found { preview } => format!("Lyrics found: {preview}……"),
        Outcome::NotFound => "Lyrics not found.".to_string(),
        Outcome::AlreadyEmbedded { preview } => format!("Lyrics are already embedded: {preview}"),
        Outcome::Skipped => "Skipped.".to_string(),
        Outcome::Incomplete => format!("Incomplete track: {}", item.path),
        Outcome::Unreadable { reason } => format!("Unreadable file: {} ({reason})", item.path),
        Outcome::Failed { reason } => format!("Lookup failed: {reason}"),
    }
}

/// Detailed block for one track, as printed in verbose mode.
pub fn render_item(item: &TrackReport) -> String {
    let mut out = String::new();
    if let (Some(artist), Some(title)) = (&item.artist, &item.title) {
        let _ = writeln!(out, "artist : {artist}");
        let _ = writeln!(out, "title  : {title}");
    }
    let _ = writeln!(out, "{}", message(item));
    out.push_str(SEPARATOR);
    out
}

impl<'a> EmbedReport<'a> {
    pub fn new(items: &'a [TrackReport], dry_run: bool) -> Self {
        Self { dry_run, items }
    }

    fn matching(&self, pred: impl Fn(&Outcome) -> bool) -> Vec<&'a TrackReport> {
        self.items.iter().filter(|i| pred(&i.outcome)).collect()
    }

    pub fn render(&self) -> String {
        let found = self.matching(|o| matches!(o, Outcome::Found { .. }));
        let not_found = self.matching(|o| matches!(o, Outcome::NotFound));
        let embedded = self.matching(|o| matches!(o, Outcome::AlreadyEmbedded { .. }));
        let count = |pred: fn(&Outcome) -> bool| self.items.iter().filter(|i| pred(&i.outcome)).count();

        let mut out = String::new();
        let heading = if self.dry_run { "Lyrics found" } else { "Lyrics embedded" };
        let _ = writeln!(out, "{heading} ({}):", found.len());
        let _ = writeln!(out, "{RULE}");
        for item in &found {
            let _ = writeln!(out, "{}", render_item(item));
        }
        let _ = writeln!(out, "{RULE}");

        let _ = writeln!(out, "Lyrics not found ({}):", not_found.len());
        let _ = writeln!(out, "{RULE}");
        for item in &not_found {
            let _ = writeln!(out, "{}", label(item));
        }
        let _ = writeln!(out, "{RULE}");

        let _ = writeln!(out, "Already embedded ({}):", embedded.len());
        let _ = writeln!(out, "{RULE}");
        for item in &embedded {
            if let Outcome::AlreadyEmbedded { preview } = &item.outcome {
                let _ = writeln!(out, "{}  {preview}……", label(item));
            }
        }
        let _ = writeln!(out, "{RULE}");

        let _ = writeln!(out, "{} file(s) are skipped.", count(|o| matches!(o, Outcome::Skipped)));
        let _ = writeln!(out, "{} file(s) are incomplete.", count(|o| matches!(o, Outcome::Incomplete)));
        let _ = writeln!(out, "{} file(s) are unreadable.", count(|o| matches!(o, Outcome::Unreadable { .. })));
        let _ = write!(out, "{} file(s) failed.", count(|o| matches!(o, Outcome::Failed { .. })));
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
