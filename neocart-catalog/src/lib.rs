//! Static catalogue of supported titles.
//!
//! The table maps a game identifier (the MAME set name, usually the stem of
//! the input container) to its [`Game`] descriptor: parent set, expected
//! members per area with sizes and hashes, recipe binding and display
//! metadata. The table is a plain static slice; at this size a linear scan
//! is all a lookup needs.

use neocart_core::Game;

mod games;

/// Look up a title by identifier. `None` is the recoverable "game not
/// found" signal; callers decide whether to fall back or fail.
pub fn find(id: &str) -> Option<&'static Game> {
    games::GAMES.iter().find(|game| game.id == id)
}

/// All catalogued identifiers, sorted.
pub fn ids() -> Vec<&'static str> {
    let mut ids: Vec<_> = games::GAMES.iter().map(|game| game.id).collect();
    ids.sort_unstable();
    ids
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
