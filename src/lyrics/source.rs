use scraper::{ElementRef, Html, Selector};

use crate::lyrics::types::{LyricsError, LyricsQuery, SearchCandidate};

/// Declarative description of one lyrics website.
///
/// Sources are plain constants: a URL builder, the selectors that carve the
/// results page and the lyrics page, and the cleaning rule for the lyrics block.
#[derive(Debug, Clone, Copy)]
pub struct SourceDefinition {
    pub name: &'static str,
    pub build_search_url: fn(&LyricsQuery) -> String,
    /// Prefix for relative lyrics links. Empty when the site links absolutely.
    pub base_url: &'static str,
    pub result_selector: &'static str,
    pub artist_selector: &'static str,
    pub link_selector: &'static str,
    pub lyrics_selector: &'static str,
    pub clean: fn(&str) -> String,
}

fn parse_selector(css: &str) -> Result<Selector, LyricsError> {
    Selector::parse(css).map_err(|e| LyricsError::Selector(format!("{css}: {e:?}")))
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

impl SourceDefinition {
    pub fn search_url(&self, query: &LyricsQuery) -> String {
        (self.build_search_url)(query)
    }

    /// Turn a results page into candidates, in page order.
    ///
    /// Rows without an artist element or without a link are skipped.
    pub fn extract_candidates(&self, html: &str) -> Result<Vec<SearchCandidate>, LyricsError> {
        let rows = parse_selector(self.result_selector)?;
        let artist = parse_selector(self.artist_selector)?;
        let link = parse_selector(self.link_selector)?;

        let doc = Html::parse_document(html);
        let candidates = doc
            .select(&rows)
            .filter_map(|row| {
                let suggested_artist = element_text(row.select(&artist).next()?);
                let href = row.select(&link).next()?.value().attr("href")?;
                Some(SearchCandidate {
                    suggested_artist,
                    lyrics_url: self.join_link(href),
                })
            })
            .collect();
        Ok(candidates)
    }

    /// Locate the lyrics block and run this source's cleaning rule over it.
    /// `None` when the block is absent or cleans down to nothing.
    pub fn extract_lyrics(&self, html: &str) -> Result<Option<String>, LyricsError> {
        let lyrics = parse_selector(self.lyrics_selector)?;
        let doc = Html::parse_document(html);
        let Some(block) = doc.select(&lyrics).next() else {
            return Ok(None);
        };
        let text = (self.clean)(&block.html());
        Ok(if text.is_empty() { None } else { Some(text) })
    }

    pub fn join_link(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") || self.base_url.is_empty() {
            return href.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            href.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyrics::clean;

    fn test_url(q: &LyricsQuery) -> String {
        format!("https://lyrics.test/search?t={}", urlencoding::encode(&q.title))
    }

    fn test_clean(markup: &str) -> String {
        clean::finish(&clean::replace_br(&clean::remove_div(markup)))
    }

    const TEST_SOURCE: SourceDefinition = SourceDefinition {
        name: "test",
        build_search_url: test_url,
        base_url: "https://lyrics.test/",
        result_selector: "#results tr",
        artist_selector: ".artist a",
        link_selector: ".song a",
        lyrics_selector: "#lyric",
        clean: test_clean,
    };

    const RESULTS: &str = r#"<html><body><table id="results">
        <tr><td class="song"><a href="/song/1">Song</a></td><td class="artist"><a> Aimer </a></td></tr>
        <tr><td class="song"><a href="/song/2">Song</a></td><td class="artist">no link here</td></tr>
        <tr><td class="song"><span>no href</span></td><td class="artist"><a>aiko</a></td></tr>
        <tr><td class="song"><a href="https://other.test/3">Song</a></td><td class="artist"><a>AIMYON</a></td></tr>
    </table></body></html>"#;

    #[test]
    fn candidates_skip_incomplete_rows() {
        let found = TEST_SOURCE.extract_candidates(RESULTS).unwrap();
        assert_eq!(
            found,
            vec![
                SearchCandidate {
                    suggested_artist: "Aimer".into(),
                    lyrics_url: "https://lyrics.test/song/1".into(),
                },
                SearchCandidate {
                    suggested_artist: "AIMYON".into(),
                    lyrics_url: "https://other.test/3".into(),
                },
            ]
        );
    }

    #[test]
    fn results_selector_miss_is_empty() {
        let found = TEST_SOURCE.extract_candidates("<html><body>nothing</body></html>").unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn lyrics_block_is_cleaned() {
        let page = r#"<html><body><div id="lyric">first<br>second<br/>third</div></body></html>"#;
        assert_eq!(
            TEST_SOURCE.extract_lyrics(page).unwrap().as_deref(),
            Some("first\nsecond\nthird")
        );
    }

    #[test]
    fn lyrics_block_missing_or_empty() {
        assert_eq!(TEST_SOURCE.extract_lyrics("<p>none</p>").unwrap(), None);
        let empty = r#"<div id="lyric"> <br> </div>"#;
        assert_eq!(TEST_SOURCE.extract_lyrics(empty).unwrap(), None);
    }

    #[test]
    fn bad_selector_is_reported() {
        let broken = SourceDefinition {
            result_selector: "##",
            ..TEST_SOURCE
        };
        assert!(matches!(
            broken.extract_candidates(RESULTS),
            Err(LyricsError::Selector(_))
        ));
    }

    #[test]
    fn links_join_without_double_slash() {
        assert_eq!(TEST_SOURCE.join_link("/song/9"), "https://lyrics.test/song/9");
        assert_eq!(TEST_SOURCE.join_link("song/9"), "https://lyrics.test/song/9");
        let absolute = SourceDefinition { base_url: "", ..TEST_SOURCE };
        assert_eq!(absolute.join_link("http://j.test/a.html"), "http://j.test/a.html");
    }
}
