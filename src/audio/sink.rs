//! The `rodio` backed `AudioEngine`.
//!
//! A stream is decoded into a fresh `Sink` on every load. Stopping drops the
//! sink; playing again after a stop rebuilds it from the remembered path so
//! the same resource restarts from the beginning.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::prelude::AudioFile;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use tracing::{debug, warn};

use super::engine::AudioEngine;
use super::error::PlayerError;
use super::types::{PlaybackStatus, VOLUME_MAX};

pub(super) type FileDecoder = Decoder<BufReader<File>>;

/// Open and decode `path`, returning the source and its length when known.
///
/// Some decoders cannot report a length up front (VBR mp3 in particular),
/// so the file's container properties are read as a fallback.
pub(super) fn decode_file(path: &Path) -> Result<(FileDecoder, Option<Duration>), PlayerError> {
    let file = File::open(path).map_err(|source| PlayerError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let decoder = Decoder::new(BufReader::new(file)).map_err(|e| PlayerError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let duration = decoder.total_duration().or_else(|| tagged_duration(path));
    Ok((decoder, duration))
}

fn tagged_duration(path: &Path) -> Option<Duration> {
    match lofty::read_from_path(path) {
        Ok(tagged) => Some(tagged.properties().duration()),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "could not read track length");
            None
        }
    }
}

pub struct RodioEngine {
    /// `None` only for engines built without an output device.
    stream: Option<OutputStream>,
    sink: Option<Sink>,
    source_path: Option<PathBuf>,
    duration: Option<Duration>,
    volume: f32,
}

impl RodioEngine {
    /// Open the default audio output device.
    pub fn open_default() -> Result<Self, PlayerError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlayerError::OutputDevice(e.to_string()))?;
        // rodio prints to stderr when the stream is dropped, which would land
        // on top of the restored terminal.
        stream.log_on_drop(false);

        Ok(Self::with_stream(Some(stream)))
    }

    /// An engine whose sinks are not attached to any device. Nothing drains
    /// them, so a loaded track never ends on its own.
    #[cfg(test)]
    pub(super) fn detached() -> Self {
        Self::with_stream(None)
    }

    fn with_stream(stream: Option<OutputStream>) -> Self {
        Self {
            stream,
            sink: None,
            source_path: None,
            duration: None,
            volume: VOLUME_MAX,
        }
    }

    #[cfg(test)]
    pub(super) fn sink_volume(&self) -> Option<f32> {
        self.sink.as_ref().map(Sink::volume)
    }

    /// Create a paused sink for `source` at the current volume.
    fn sink_for(&self, source: FileDecoder) -> Sink {
        let sink = match self.stream.as_ref() {
            Some(stream) => Sink::connect_new(stream.mixer()),
            None => Sink::new().0,
        };
        sink.set_volume(self.volume / VOLUME_MAX);
        sink.append(source);
        sink.pause();
        sink
    }
}

impl AudioEngine for RodioEngine {
    fn load(&mut self, path: &Path) -> Result<(), PlayerError> {
        let (source, duration) = decode_file(path)?;

        if let Some(old) = self.sink.take() {
            old.stop();
        }
        self.sink = Some(self.sink_for(source));
        self.source_path = Some(path.to_path_buf());
        self.duration = duration;
        Ok(())
    }

    fn play(&mut self) {
        let finished = self.sink.as_ref().map(Sink::empty).unwrap_or(true);
        if finished {
            let Some(path) = self.source_path.clone() else {
                return;
            };
            match decode_file(&path) {
                Ok((source, duration)) => {
                    self.sink = Some(self.sink_for(source));
                    self.duration = duration;
                }
                Err(e) => {
                    warn!(error = %e, "could not restart stream");
                    return;
                }
            }
        }

        if let Some(sink) = self.sink.as_ref() {
            sink.play();
        }
    }

    fn pause(&mut self) {
        if let Some(sink) = self.sink.as_ref() {
            sink.pause();
        }
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    fn status(&self) -> PlaybackStatus {
        match self.sink.as_ref() {
            None => PlaybackStatus::Stopped,
            Some(s) if s.empty() => PlaybackStatus::Stopped,
            Some(s) if s.is_paused() => PlaybackStatus::Paused,
            Some(_) => PlaybackStatus::Playing,
        }
    }

    fn set_volume(&mut self, level: f32) {
        self.volume = level;
        if let Some(sink) = self.sink.as_ref() {
            sink.set_volume(level / VOLUME_MAX);
        }
    }

    fn position(&self) -> Duration {
        self.sink
            .as_ref()
            .map(Sink::get_pos)
            .unwrap_or(Duration::ZERO)
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }
}
