// track.rs: Tag access for a single audio file, backed by lofty

use std::path::{Path, PathBuf};

use lofty::config::WriteOptions;
use lofty::error::LoftyError;
use lofty::file::{AudioFile, TaggedFile, TaggedFileExt};
use lofty::prelude::Accessor;
use lofty::read_from_path;
use lofty::tag::{ItemKey, Tag};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackError {
    #[error("Tag error: {0}")]
    Tag(#[from] LoftyError),
    #[error("No writable tag in {0}")]
    NoWritableTag(PathBuf),
}

/// What the embed run needs from a tagged file.
pub trait TrackTags {
    fn artist(&self) -> Option<&str>;
    fn title(&self) -> Option<&str>;
    fn genre(&self) -> Option<&str>;
    fn lyrics(&self) -> Option<&str>;
    fn set_lyrics(&mut self, text: &str) -> Result<(), TrackError>;
    /// Returns whether any lyrics were present.
    fn remove_lyrics(&mut self) -> Result<bool, TrackError>;
    fn save(&mut self) -> Result<(), TrackError>;

    fn has_lyrics(&self) -> bool {
        self.lyrics().is_some()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// An audio file opened through lofty. Values are read once on open from the
/// primary tag, or the first tag when the primary one is absent; writes go to
/// the primary tag.
pub struct LoftyTrack {
    path: PathBuf,
    file: TaggedFile,
    artist: Option<String>,
    title: Option<String>,
    genre: Option<String>,
    lyrics: Option<String>,
}

impl LoftyTrack {
    pub fn open(path: &Path) -> Result<Self, TrackError> {
        let file = read_from_path(path)?;
        let tag = file.primary_tag().or_else(|| file.first_tag());
        let artist = non_empty(tag.and_then(|t| t.artist().map(|v| v.into_owned())));
        let title = non_empty(tag.and_then(|t| t.title().map(|v| v.into_owned())));
        let genre = non_empty(tag.and_then(|t| t.genre().map(|v| v.into_owned())));
        let lyrics = non_empty(tag.and_then(|t| t.get_string(ItemKey::Lyrics).map(str::to_string)));
        Ok(Self {
            path: path.to_path_buf(),
            file,
            artist,
            title,
            genre,
            lyrics,
        })
    }

    fn writable_tag(&mut self) -> Result<&mut Tag, TrackError> {
        let tag_type = self.file.primary_tag_type();
        if self.file.tag(tag_type).is_none() {
            self.file.insert_tag(Tag::new(tag_type));
        }
        self.file
            .tag_mut(tag_type)
            .ok_or_else(|| TrackError::NoWritableTag(self.path.clone()))
    }
}

impl TrackTags for LoftyTrack {
    fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    fn lyrics(&self) -> Option<&str> {
        self.lyrics.as_deref()
    }

    fn set_lyrics(&mut self, text: &str) -> Result<(), TrackError> {
        self.writable_tag()?.insert_text(ItemKey::Lyrics, text.to_string());
        self.lyrics = Some(text.to_string());
        Ok(())
    }

    fn remove_lyrics(&mut self) -> Result<bool, TrackError> {
        self.writable_tag()?.remove_key(ItemKey::Lyrics);
        Ok(self.lyrics.take().is_some())
    }

    fn save(&mut self) -> Result<(), TrackError> {
        self.file.save_to_path(&self.path, WriteOptions::default())?;
        Ok(())
    }
}
