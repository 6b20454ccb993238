//! Configuration loader and schema types.
//!
//! Settings are layered from struct defaults, an optional TOML file and
//! `ALLEGRO__` environment variables.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
