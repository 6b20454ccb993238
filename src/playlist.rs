//! Playlist module: the ordered list of songs the user added this session
//! and the cursor pointing at the current one.

mod model;

pub use model::*;
