use crate::lyrics::clean;
use crate::lyrics::source::SourceDefinition;
use crate::lyrics::types::LyricsQuery;

/// uta-net.com: full match on title only.
pub const UTANET: SourceDefinition = SourceDefinition {
    name: "uta-net",
    build_search_url: search_url,
    base_url: "https://www.uta-net.com",
    result_selector: "#ichiran .result_table table tbody tr",
    artist_selector: ".td2 a",
    link_selector: ".td1 a",
    lyrics_selector: "#kashi_area",
    clean: clean_lyrics,
};

fn search_url(query: &LyricsQuery) -> String {
    format!(
        "https://www.uta-net.com/search/?Aselect=2&Keyword={}&Bselect=4&x=0&y=0",
        urlencoding::encode(&query.title)
    )
}

fn clean_lyrics(markup: &str) -> String {
    clean::finish(&clean::replace_br(&clean::remove_div(markup)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS: &str = r#"<html><body><div id="ichiran"><div class="result_table"><table><tbody>
        <tr><td class="td1"><a href="/song/1111/">残響散歌</a></td><td class="td2"><a href="/artist/1/">Aimer</a></td></tr>
        <tr><td class="td1"><a href="/song/2222/">残響散歌</a></td><td class="td2"><a href="/artist/2/">Cover Band</a></td></tr>
    </tbody></table></div></div></body></html>"#;

    #[test]
    fn title_is_encoded_into_keyword() {
        let q = LyricsQuery::new("Aimer", "残響散歌", true);
        assert_eq!(
            UTANET.search_url(&q),
            "https://www.uta-net.com/search/?Aselect=2&Keyword=%E6%AE%8B%E9%9F%BF%E6%95%A3%E6%AD%8C&Bselect=4&x=0&y=0"
        );
    }

    #[test]
    fn result_rows_resolve_against_site_root() {
        let found = UTANET.extract_candidates(RESULTS).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].suggested_artist, "Aimer");
        assert_eq!(found[0].lyrics_url, "https://www.uta-net.com/song/1111/");
    }

    #[test]
    fn kashi_area_is_unwrapped() {
        let page = r#"<div id="kashi_area" itemprop="text">誰が袖に咲く<br>幻の花<br>ただ一つ</div>"#;
        assert_eq!(
            UTANET.extract_lyrics(page).unwrap().as_deref(),
            Some("誰が袖に咲く\n幻の花\nただ一つ")
        );
    }
}
