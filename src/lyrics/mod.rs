// lyrics/mod.rs - lyrics resolution engine
pub mod clean;
pub mod fetch;
pub mod matcher;
pub mod providers;
pub mod resolver;
pub mod source;
pub mod types;

pub use fetch::{Fetch, HttpFetcher};
pub use resolver::LyricsResolver;
pub use types::{LyricsError, Resolution};
