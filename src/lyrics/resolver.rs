use tracing::{debug, info};

use crate::lyrics::fetch::Fetch;
use crate::lyrics::matcher::find_lyrics_link;
use crate::lyrics::source::SourceDefinition;
use crate::lyrics::types::{LookupResult, LyricsQuery, Resolution};

/// Expand a title into the spellings worth trying, original first.
pub fn title_variants(title: &str) -> Vec<String> {
    let mut variants = vec![title.to_string()];
    if title.contains('？') || title.contains('！') {
        variants.push(title.replace('？', "?").replace('！', "!"));
    }
    if title.contains('?') || title.contains('!') {
        variants.push(title.replace('?', "？").replace('!', "！"));
    }
    variants
}

/// Ordered chain of sources sharing one fetcher.
///
/// Sources are tried strictly in order and each is fully resolved before the
/// next one starts. A transport error from any fetch aborts the whole lookup.
pub struct LyricsResolver<F> {
    fetcher: F,
    sources: Vec<SourceDefinition>,
}

impl<F: Fetch> LyricsResolver<F> {
    pub fn new(fetcher: F, sources: Vec<SourceDefinition>) -> Self {
        Self { fetcher, sources }
    }

    pub fn sources(&self) -> &[SourceDefinition] {
        &self.sources
    }

    #[cfg(test)]
    pub(crate) fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Search, match, fetch and extract against a single source.
    pub async fn resolve_with(&self, source: &SourceDefinition, query: &LyricsQuery) -> LookupResult {
        let search_url = source.search_url(query);
        debug!(source = source.name, url = %search_url, "searching");
        let results_page = self.fetcher.get(&search_url).await?;
        let candidates = source.extract_candidates(&results_page)?;
        if candidates.is_empty() {
            debug!(source = source.name, "no result rows");
            return Ok(Resolution::NotFound);
        }

        let artist = query.match_artist();
        let Some(lyrics_url) = find_lyrics_link(&candidates, &artist, query.strict) else {
            debug!(
                source = source.name,
                candidates = candidates.len(),
                "no candidate matched artist"
            );
            return Ok(Resolution::NotFound);
        };

        debug!(source = source.name, url = lyrics_url, "fetching lyrics page");
        let lyrics_page = self.fetcher.get(lyrics_url).await?;
        match source.extract_lyrics(&lyrics_page)? {
            Some(text) => Ok(Resolution::Found(text)),
            None => {
                debug!(source = source.name, "lyrics block missing");
                Ok(Resolution::NotFound)
            }
        }
    }

    /// Walk the source chain for one query, returning the first hit.
    pub async fn resolve_query(&self, query: &LyricsQuery) -> LookupResult {
        for source in &self.sources {
            if let Resolution::Found(text) = self.resolve_with(source, query).await? {
                info!(source = source.name, artist = %query.artist, title = %query.title, "lyrics found");
                return Ok(Resolution::Found(text));
            }
        }
        Ok(Resolution::NotFound)
    }

    pub async fn resolve(&self, artist: &str, title: &str, strict: bool) -> LookupResult {
        self.resolve_query(&LyricsQuery::new(artist, title, strict)).await
    }

    /// Like [`resolve`](Self::resolve), retrying with half-width and
    /// full-width punctuation variants of the title.
    pub async fn resolve_fuzzy(&self, artist: &str, title: &str, strict: bool) -> LookupResult {
        let query = LyricsQuery::new(artist, title, strict);
        for variant in title_variants(&query.title) {
            let attempt = query.with_title(&variant);
            if let found @ Resolution::Found(_) = self.resolve_query(&attempt).await? {
                return Ok(found);
            }
            debug!(title = %variant, "variant exhausted all sources");
        }
        Ok(Resolution::NotFound)
    }
}
