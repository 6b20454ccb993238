use std::collections::VecDeque;

use tracing::{info, warn};

use crate::audio::{AudioEngine, PlaybackController};
use crate::playlist::Playlist;
use crate::ui::layout::Button;

use super::prompt::AddSongPrompt;

const NO_SONG: &str = "No song to play. Add a song first.";

/// The main application model.
pub struct App {
    pub playlist: Playlist,
    /// Open while the user is typing a new song's name or path.
    pub prompt: Option<AddSongPrompt>,

    messages: VecDeque<String>,
    max_messages: usize,
    auto_advance: bool,
    running: bool,
}

impl App {
    pub fn new(max_messages: usize, auto_advance: bool) -> Self {
        Self {
            playlist: Playlist::new(),
            prompt: None,
            messages: VecDeque::new(),
            max_messages: max_messages.max(1),
            auto_advance,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Status lines, oldest first.
    pub fn messages(&self) -> &VecDeque<String> {
        &self.messages
    }

    fn push_message(&mut self, msg: String) {
        if self.messages.len() == self.max_messages {
            self.messages.pop_front();
        }
        self.messages.push_back(msg);
    }

    /// Record a status line in the message pane and the log.
    pub fn notify(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        info!("{msg}");
        self.push_message(msg);
    }

    fn warn(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        warn!("{msg}");
        self.push_message(msg);
    }

    fn current_name(&self) -> String {
        self.playlist.current_name().unwrap_or_default().to_string()
    }

    /// Dispatch a button press.
    pub fn handle_button<E: AudioEngine>(
        &mut self,
        button: Button,
        player: &mut PlaybackController<E>,
    ) {
        match button {
            Button::Add => self.open_prompt(),
            Button::Next | Button::Previous => {
                if self.playlist.is_empty() {
                    self.warn(NO_SONG);
                    return;
                }
                player.stop();
                if button == Button::Next {
                    self.playlist.next_song();
                } else {
                    self.playlist.previous_song();
                }
                self.play_current(player);
            }
            Button::VolumeUp => {
                player.increase_volume();
                self.notify(format!("Volume increased to: {:.0}", player.volume()));
            }
            Button::VolumeDown => {
                player.decrease_volume();
                self.notify(format!("Volume decreased to: {:.0}", player.volume()));
            }
            Button::Exit => self.quit(),
            Button::Pause => {
                if player.is_playing() {
                    player.pause();
                    let name = self.current_name();
                    self.notify(format!("Paused: {name}"));
                }
            }
            Button::Play => {
                if self.playlist.is_empty() {
                    self.warn(NO_SONG);
                    return;
                }
                if player.is_playing() {
                    return;
                }
                if player.is_paused() {
                    player.resume();
                    let name = self.current_name();
                    self.notify(format!("Resumed: {name}"));
                } else {
                    self.play_current(player);
                }
            }
        }
    }

    /// Start the playlist's current track, reporting the outcome.
    fn play_current<E: AudioEngine>(&mut self, player: &mut PlaybackController<E>) {
        let Some(path) = self.playlist.current_path().map(|p| p.to_path_buf()) else {
            self.warn(NO_SONG);
            return;
        };
        let name = self.current_name();

        match player.play(&path) {
            Ok(()) => self.notify(format!("Playing: {name}")),
            Err(e) => {
                warn!(error = %e, "playback failed");
                self.push_message(format!("Failed to play song: {name}"));
            }
        }
    }

    /// Per-frame housekeeping: notice a track that ended on its own and,
    /// when enabled, move on to the next one.
    pub fn tick<E: AudioEngine>(&mut self, player: &mut PlaybackController<E>) {
        if !player.take_finished() {
            return;
        }

        let name = self.current_name();
        self.notify(format!("Finished: {name}"));
        if self.auto_advance && self.playlist.has_next() {
            self.playlist.next_song();
            self.play_current(player);
        }
    }

    pub fn open_prompt(&mut self) {
        if self.prompt.is_none() {
            self.prompt = Some(AddSongPrompt::new());
        }
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt = None;
    }

    pub fn prompt_push(&mut self, c: char) {
        if let Some(p) = self.prompt.as_mut() {
            p.push(c);
        }
    }

    pub fn prompt_pop(&mut self) {
        if let Some(p) = self.prompt.as_mut() {
            p.pop();
        }
    }

    /// Confirm the prompt's current field; adds the song once both are set.
    pub fn prompt_submit(&mut self) {
        let Some(p) = self.prompt.as_mut() else {
            return;
        };
        if let Some((name, path)) = p.submit() {
            self.prompt = None;
            self.playlist.add_song(name.clone(), path);
            self.notify(format!("Added: {name}"));
        }
    }
}
