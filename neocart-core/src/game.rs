//! Game descriptors and the ROM source seam.

use crate::area::Area;
use crate::error::BuildError;
use crate::genre::Genre;
use crate::recipe::Recipe;

/// One expected dump file inside an input container.
///
/// `sha1` is the lowercase hex digest; directory inputs are verified against
/// it while archive inputs are verified against `crc32` from the archive
/// directory.
#[derive(Debug, Clone, Copy)]
pub struct Member {
    pub name: &'static str,
    pub size: u64,
    pub crc32: u32,
    pub sha1: &'static str,
}

/// Expected members for one area. Member order is assembly order.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaSpec {
    /// Nominal hardware size of the area. Only consulted where an area is
    /// derived rather than read (the fix layer of CMC titles); for
    /// everything else the built byte length wins.
    pub size: u64,
    pub members: &'static [Member],
}

impl AreaSpec {
    /// Size of the largest member, used as the padding stride.
    pub fn max_member_size(&self) -> u64 {
        self.members.iter().map(|m| m.size).max().unwrap_or(0)
    }
}

/// Immutable description of one catalogued title.
#[derive(Debug, Clone)]
pub struct Game {
    /// Catalogue identifier (the MAME set name).
    pub id: &'static str,
    /// Parent set searched for members the main container doesn't satisfy.
    /// Never transitive.
    pub parent: Option<&'static str>,
    pub name: &'static str,
    pub manufacturer: &'static str,
    pub year: u32,
    pub genre: Genre,
    pub screenshot: u32,
    pub recipe: Recipe,
    pub areas: [AreaSpec; Area::COUNT],
}

/// Yields the raw bytes of every expected member of one area, in descriptor
/// order. Implemented by the directory and archive adapters.
pub trait RomSource {
    fn area(&mut self, game: &Game, area: Area) -> Result<Vec<Vec<u8>>, BuildError>;
}
