use std::path::Path;
use std::time::Duration;

use tracing::{debug, info};

use super::engine::AudioEngine;
use super::error::PlayerError;
use super::types::{
    PlaybackSnapshot, PlaybackStatus, VOLUME_MAX, VOLUME_MIN, VOLUME_STEP, step_volume,
};

/// Owns the single playback stream and the volume level.
///
/// Status is always read back from the engine; the controller only remembers
/// whether it started the current stream so that a natural end of track can
/// be told apart from an explicit `stop`.
pub struct PlaybackController<E: AudioEngine> {
    engine: E,
    volume: f32,
    active: bool,
}

impl<E: AudioEngine> PlaybackController<E> {
    pub fn new(mut engine: E, initial_volume: f32) -> Self {
        let volume = initial_volume.clamp(VOLUME_MIN, VOLUME_MAX);
        engine.set_volume(volume);
        Self {
            engine,
            volume,
            active: false,
        }
    }

    /// Open `path` and start playing it at the current volume.
    ///
    /// On failure the previous stream, if any, is left as it was.
    pub fn play(&mut self, path: impl AsRef<Path>) -> Result<(), PlayerError> {
        let path = path.as_ref();
        self.engine.load(path)?;
        self.engine.set_volume(self.volume);
        self.engine.play();
        self.active = true;
        info!(path = %path.display(), "playback started");
        Ok(())
    }

    pub fn stop(&mut self) {
        self.engine.stop();
        self.active = false;
    }

    pub fn pause(&mut self) {
        self.engine.pause();
    }

    /// Continue the current stream without opening a new source.
    pub fn resume(&mut self) {
        self.engine.play();
        if self.engine.status() == PlaybackStatus::Playing {
            self.active = true;
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        self.engine.status()
    }

    pub fn is_playing(&self) -> bool {
        self.status() == PlaybackStatus::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.status() == PlaybackStatus::Paused
    }

    pub fn elapsed(&self) -> Duration {
        match self.status() {
            PlaybackStatus::Stopped => Duration::ZERO,
            _ => self.engine.position(),
        }
    }

    pub fn duration(&self) -> Option<Duration> {
        self.engine.duration()
    }

    /// Fraction of the current track that has played, in `[0, 1]`.
    ///
    /// Zero while stopped and for tracks whose length is unknown or zero.
    pub fn completion(&self) -> f32 {
        if self.status() == PlaybackStatus::Stopped {
            return 0.0;
        }
        match self.engine.duration() {
            Some(total) if !total.is_zero() => {
                let ratio = self.engine.position().as_secs_f32() / total.as_secs_f32();
                ratio.clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn increase_volume(&mut self) {
        self.set_volume(step_volume(self.volume, VOLUME_STEP));
    }

    pub fn decrease_volume(&mut self) {
        self.set_volume(step_volume(self.volume, -VOLUME_STEP));
    }

    fn set_volume(&mut self, level: f32) {
        if level != self.volume {
            self.volume = level;
            self.engine.set_volume(level);
            debug!(volume = level, "volume changed");
        }
    }

    /// Return true once when a stream started here has run to its end.
    pub fn take_finished(&mut self) -> bool {
        if self.active && self.engine.status() == PlaybackStatus::Stopped {
            self.active = false;
            return true;
        }
        false
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            status: self.status(),
            volume: self.volume,
            elapsed: self.elapsed(),
            duration: self.duration(),
            completion: self.completion(),
        }
    }

    #[cfg(test)]
    pub(crate) fn engine(&self) -> &E {
        &self.engine
    }

    #[cfg(test)]
    pub(crate) fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}
