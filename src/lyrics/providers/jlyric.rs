use crate::lyrics::clean;
use crate::lyrics::source::SourceDefinition;
use crate::lyrics::types::LyricsQuery;

/// j-lyric.net: forward match on title and artist.
pub const J_LYRIC: SourceDefinition = SourceDefinition {
    name: "j-lyric",
    build_search_url: title_artist_url,
    base_url: "",
    result_selector: "#bas #cnt #mnb .bdy",
    artist_selector: ".sml a",
    link_selector: ".mid a",
    lyrics_selector: "#Lyric",
    clean: clean_lyrics,
};

/// j-lyric.net with the artist parameter left blank, for tags whose artist
/// spelling differs from the site's.
pub const J_LYRIC_TITLE: SourceDefinition = SourceDefinition {
    name: "j-lyric-title",
    build_search_url: title_only_url,
    ..J_LYRIC
};

fn title_artist_url(query: &LyricsQuery) -> String {
    format!(
        "http://search.j-lyric.net/index.php?kt={}&ct=2&ka={}&ca=2",
        urlencoding::encode(&query.title),
        urlencoding::encode(&query.artist)
    )
}

fn title_only_url(query: &LyricsQuery) -> String {
    format!(
        "http://search.j-lyric.net/index.php?kt={}&ct=2&ka=&ca=2",
        urlencoding::encode(&query.title)
    )
}

fn clean_lyrics(markup: &str) -> String {
    clean::finish(&clean::replace_br(&clean::remove_p(markup)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS: &str = r#"<html><body><div id="bas"><div id="cnt"><div id="mnb">
        <div class="bdy"><p class="mid"><a href="http://j-lyric.net/artist/a1/l1.html">ultra soul</a></p><p class="sml">歌：<a href="http://j-lyric.net/artist/a1/">B'z</a></p></div>
        <div class="bdy"><p class="mid"><a href="http://j-lyric.net/artist/a2/l2.html">ultra soul</a></p></div>
    </div></div></div></body></html>"#;

    #[test]
    fn title_variant_overrides_only_the_url() {
        let q = LyricsQuery::new("B'z", "ultra soul", false);
        assert_eq!(
            J_LYRIC.search_url(&q),
            "http://search.j-lyric.net/index.php?kt=ultra%20soul&ct=2&ka=B%27z&ca=2"
        );
        assert_eq!(
            J_LYRIC_TITLE.search_url(&q),
            "http://search.j-lyric.net/index.php?kt=ultra%20soul&ct=2&ka=&ca=2"
        );
        assert_eq!(J_LYRIC_TITLE.result_selector, J_LYRIC.result_selector);
        assert_eq!(J_LYRIC_TITLE.lyrics_selector, J_LYRIC.lyrics_selector);
    }

    #[test]
    fn absolute_links_are_kept() {
        let found = J_LYRIC.extract_candidates(RESULTS).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].suggested_artist, "B'z");
        assert_eq!(found[0].lyrics_url, "http://j-lyric.net/artist/a1/l1.html");
    }

    #[test]
    fn lyric_paragraph_is_unwrapped() {
        let page = r#"<html><body><p id="Lyric">Yes<br>ultra soul<br>hey!</p></body></html>"#;
        assert_eq!(
            J_LYRIC_TITLE.extract_lyrics(page).unwrap().as_deref(),
            Some("Yes\nultra soul\nhey!")
        );
    }

    #[test]
    fn stray_closing_break_reads_as_newline() {
        let page = r#"<p id="Lyric">a<br>b</br>c</p>"#;
        assert_eq!(J_LYRIC.extract_lyrics(page).unwrap().as_deref(), Some("a\nb\nc"));
    }
}
