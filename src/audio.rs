//! Audio playback: the `PlaybackController` driving a single stream through
//! an `AudioEngine`, and the `rodio` engine used at runtime.

mod engine;
mod error;
mod player;
mod sink;
mod types;

pub use engine::AudioEngine;
pub use error::PlayerError;
pub use player::PlaybackController;
pub use sink::RodioEngine;
pub use types::*;

#[cfg(test)]
pub(crate) mod fake;
