//! Application module: the model the event loop mutates and the UI reads.
//!
//! `App` owns the playlist, the add-song prompt and the message pane, and
//! translates button presses into playlist and playback operations.

mod model;
mod prompt;

pub use model::*;
pub use prompt::*;
