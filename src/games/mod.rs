//! Game sources
//!
//! Text loading for user-supplied payoff matrices and a catalog of built-in
//! example games.

pub mod catalog;
pub mod loader;

pub use catalog::{GAMES, NamedGame, find};
pub use loader::{ParseError, load_from_file, parse_matrix};
