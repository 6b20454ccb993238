use std::path::{Path, PathBuf};

/// One song in the playlist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackEntry {
    pub name: String,
    pub path: PathBuf,
}

/// An ordered, append-only list of tracks with a "current" cursor.
///
/// The cursor is `None` only while the list is empty. Navigation moves it by
/// one step and stops at either end; it never wraps around.
#[derive(Debug, Default)]
pub struct Playlist {
    entries: Vec<TrackEntry>,
    current: Option<usize>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a track at the tail. The first track added becomes current.
    pub fn add_song(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        self.entries.push(TrackEntry {
            name: name.into(),
            path: path.into(),
        });
        if self.current.is_none() {
            self.current = Some(0);
        }
    }

    /// Move the cursor to the next track. No-op at the tail or when empty.
    pub fn next_song(&mut self) {
        if let Some(i) = self.current {
            if i + 1 < self.entries.len() {
                self.current = Some(i + 1);
            }
        }
    }

    /// Move the cursor to the previous track. No-op at the head or when empty.
    pub fn previous_song(&mut self) {
        if let Some(i) = self.current {
            if i > 0 {
                self.current = Some(i - 1);
            }
        }
    }

    pub fn current(&self) -> Option<&TrackEntry> {
        self.current.and_then(|i| self.entries.get(i))
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current().map(|t| t.path.as_path())
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current().map(|t| t.name.as_str())
    }

    /// Return true if the cursor can move forward.
    pub fn has_next(&self) -> bool {
        self.current
            .map(|i| i + 1 < self.entries.len())
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate tracks in insertion order; `.rev()` walks back from the tail.
    pub fn iter(&self) -> std::slice::Iter<'_, TrackEntry> {
        self.entries.iter()
    }
}
