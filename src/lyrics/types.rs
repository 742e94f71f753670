use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use thiserror::Error;

static PAREN_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.+\)$").unwrap());

/// One lookup request. `artist` is kept verbatim; `match_artist` is what the
/// matcher compares against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricsQuery {
    pub artist: String,
    pub title: String,
    pub strict: bool,
}

impl LyricsQuery {
    pub fn new(artist: &str, title: &str, strict: bool) -> Self {
        Self {
            artist: artist.to_string(),
            title: title.trim().to_string(),
            strict,
        }
    }

    /// Same query with a different title, used for title variants.
    pub fn with_title(&self, title: &str) -> Self {
        Self::new(&self.artist, title, self.strict)
    }

    /// Artist with a trailing parenthesized annotation such as "(feat. X)" removed.
    pub fn match_artist(&self) -> String {
        PAREN_SUFFIX_RE
            .replace(&self.artist, "")
            .trim_end()
            .to_string()
    }
}

/// A result row that carried both an artist and a lyrics link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCandidate {
    pub suggested_artist: String,
    pub lyrics_url: String,
}

/// Outcome of a lookup that reached the remote sites without a transport failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(String),
    NotFound,
}

impl Resolution {
    pub fn into_lyrics(self) -> Option<String> {
        match self {
            Resolution::Found(text) => Some(text),
            Resolution::NotFound => None,
        }
    }
}

pub type LookupResult = Result<Resolution, LyricsError>;

#[derive(Error, Debug)]
pub enum LyricsError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("Invalid selector: {0}")]
    Selector(String),
    #[error("Unknown lyrics source: {0}")]
    UnknownSource(String),
}

/// Build the HTTP client used for every search and lyrics page request.
pub fn build_http_client(timeout: std::time::Duration) -> Result<Client, LyricsError> {
    let client = Client::builder()
        .user_agent("Mozilla/5.0 (X11; Linux x86_64) kashi/0.1")
        .timeout(timeout)
        .build()?;
    Ok(client)
}
