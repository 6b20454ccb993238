//! In-memory `AudioEngine` for tests.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::engine::AudioEngine;
use super::error::PlayerError;
use super::types::PlaybackStatus;

/// Files whose name starts with `missing` fail to open; everything else
/// loads with `track_length`.
#[derive(Debug)]
pub(crate) struct FakeEngine {
    pub status: PlaybackStatus,
    pub loaded: Option<PathBuf>,
    pub volume: f32,
    pub position: Duration,
    pub duration: Option<Duration>,
    pub track_length: Option<Duration>,
    pub loads: Vec<PathBuf>,
}

impl Default for FakeEngine {
    fn default() -> Self {
        Self {
            status: PlaybackStatus::Stopped,
            loaded: None,
            volume: 0.0,
            position: Duration::ZERO,
            duration: None,
            track_length: Some(Duration::from_secs(200)),
            loads: Vec::new(),
        }
    }
}

impl FakeEngine {
    /// Simulate the stream running out on its own.
    pub fn finish(&mut self) {
        self.status = PlaybackStatus::Stopped;
        self.position = Duration::ZERO;
    }
}

impl AudioEngine for FakeEngine {
    fn load(&mut self, path: &Path) -> Result<(), PlayerError> {
        let missing = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with("missing"))
            .unwrap_or(true);
        if missing {
            return Err(PlayerError::Open {
                path: path.to_path_buf(),
                source: io::Error::from(io::ErrorKind::NotFound),
            });
        }

        self.loaded = Some(path.to_path_buf());
        self.loads.push(path.to_path_buf());
        self.status = PlaybackStatus::Stopped;
        self.position = Duration::ZERO;
        self.duration = self.track_length;
        Ok(())
    }

    fn play(&mut self) {
        if self.loaded.is_some() {
            self.status = PlaybackStatus::Playing;
        }
    }

    fn pause(&mut self) {
        if self.status == PlaybackStatus::Playing {
            self.status = PlaybackStatus::Paused;
        }
    }

    fn stop(&mut self) {
        self.status = PlaybackStatus::Stopped;
        self.position = Duration::ZERO;
    }

    fn status(&self) -> PlaybackStatus {
        self.status
    }

    fn set_volume(&mut self, level: f32) {
        self.volume = level;
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }
}
