use std::path::Path;
use std::time::Duration;

use super::error::PlayerError;
use super::types::PlaybackStatus;

/// The streaming backend behind a `PlaybackController`.
///
/// An engine holds at most one loaded stream. Loading a new one replaces
/// the previous stream only when the new file opens successfully.
pub trait AudioEngine {
    /// Open `path` as the active stream, ready to play from the start.
    fn load(&mut self, path: &Path) -> Result<(), PlayerError>;

    /// Start or continue the active stream. A stopped stream restarts from
    /// the beginning; a paused one continues where it left off.
    fn play(&mut self);

    fn pause(&mut self);

    /// Halt the stream and reset its position.
    fn stop(&mut self);

    fn status(&self) -> PlaybackStatus;

    /// Set the output level, `0.0..=100.0`.
    fn set_volume(&mut self, level: f32);

    /// Position within the active stream.
    fn position(&self) -> Duration;

    /// Total length of the active stream, when known.
    fn duration(&self) -> Option<Duration>;
}
