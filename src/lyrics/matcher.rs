use unicode_segmentation::UnicodeSegmentation;

use crate::lyrics::types::SearchCandidate;

/// Case-insensitive comparison of the first grapheme cluster.
/// An empty string never matches.
pub fn same_initial(a: &str, b: &str) -> bool {
    match (a.graphemes(true).next(), b.graphemes(true).next()) {
        (Some(x), Some(y)) => x.to_lowercase() == y.to_lowercase(),
        _ => false,
    }
}

/// Pick the lyrics link to follow, or `None` when no row is acceptable.
///
/// Rules per candidate, in list order:
/// 1. a lone candidate is accepted on a matching initial, even in strict mode;
/// 2. an exact match on a non-empty artist is accepted;
/// 3. in lenient mode a matching initial is accepted.
pub fn find_lyrics_link<'a>(
    candidates: &'a [SearchCandidate],
    artist: &str,
    strict: bool,
) -> Option<&'a str> {
    let single = candidates.len() == 1;
    candidates
        .iter()
        .find(|c| {
            let initial = same_initial(&c.suggested_artist, artist);
            let exact = !artist.is_empty() && c.suggested_artist == artist;
            (single && initial) || exact || (!strict && initial)
        })
        .map(|c| c.lyrics_url.as_str())
}
