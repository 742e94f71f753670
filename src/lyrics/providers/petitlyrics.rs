use crate::lyrics::clean;
use crate::lyrics::source::SourceDefinition;
use crate::lyrics::types::LyricsQuery;

/// petitlyrics.com: full match on title only. The lyrics block carries an
/// embedded canvas that has to go.
pub const PETITLYRICS: SourceDefinition = SourceDefinition {
    name: "petitlyrics",
    build_search_url: search_url,
    base_url: "https://petitlyrics.com/",
    result_selector: "#lyrics_list tr",
    artist_selector: "td:nth-of-type(2) a:nth-of-type(2)",
    link_selector: "td:nth-of-type(2) a:nth-of-type(1)",
    lyrics_selector: "#lyrics",
    clean: clean_lyrics,
};

fn search_url(query: &LyricsQuery) -> String {
    format!(
        "https://petitlyrics.com/search_lyrics?title={}",
        urlencoding::encode(&query.title)
    )
}

fn clean_lyrics(markup: &str) -> String {
    let text = clean::replace_br(&clean::remove_div(markup));
    clean::finish(&clean::remove_canvas(&text))
}
