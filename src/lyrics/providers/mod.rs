pub mod jlyric;
pub mod petitlyrics;
pub mod utanet;

pub use jlyric::{J_LYRIC, J_LYRIC_TITLE};
pub use petitlyrics::PETITLYRICS;
pub use utanet::UTANET;

use crate::lyrics::source::SourceDefinition;
use crate::lyrics::types::LyricsError;

/// Every known source, in the default priority order.
pub const DEFAULT_SOURCES: [SourceDefinition; 4] = [J_LYRIC, UTANET, PETITLYRICS, J_LYRIC_TITLE];

pub fn source_by_name(name: &str) -> Option<SourceDefinition> {
    DEFAULT_SOURCES
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
        .copied()
}

/// Resolve a user-supplied priority list. An empty list means the default order.
pub fn sources_from_names(names: &[String]) -> Result<Vec<SourceDefinition>, LyricsError> {
    if names.is_empty() {
        return Ok(DEFAULT_SOURCES.to_vec());
    }
    names
        .iter()
        .map(|n| source_by_name(n).ok_or_else(|| LyricsError::UnknownSource(n.clone())))
        .collect()
}
