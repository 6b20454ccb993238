//! Audio-related small types: playback status, volume limits and the
//! snapshot handed to the UI each frame.

use std::time::Duration;

/// Lowest volume level.
pub const VOLUME_MIN: f32 = 0.0;
/// Highest volume level; also the default.
pub const VOLUME_MAX: f32 = 100.0;
/// Amount added or removed by one volume button press.
pub const VOLUME_STEP: f32 = 10.0;

/// The playback status reported by the audio engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackStatus {
    #[default]
    Stopped,
    Playing,
    Paused,
}

impl PlaybackStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Stopped => "Stopped",
            Self::Playing => "Playing",
            Self::Paused => "Paused",
        }
    }
}

/// Point-in-time view of the player used for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSnapshot {
    pub status: PlaybackStatus,
    pub volume: f32,
    pub elapsed: Duration,
    pub duration: Option<Duration>,
    /// Fraction of the track played, in `[0, 1]`.
    pub completion: f32,
}

impl Default for PlaybackSnapshot {
    fn default() -> Self {
        Self {
            status: PlaybackStatus::Stopped,
            volume: VOLUME_MAX,
            elapsed: Duration::ZERO,
            duration: None,
            completion: 0.0,
        }
    }
}

/// Step `volume` by `delta` and clamp the result to the valid range.
pub fn step_volume(volume: f32, delta: f32) -> f32 {
    (volume + delta).clamp(VOLUME_MIN, VOLUME_MAX)
}
