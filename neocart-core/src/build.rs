//! The build pipeline: catalogue descriptor plus ROM source in, six
//! assembled areas out.

use crate::area::Area;
use crate::error::BuildError;
use crate::game::{Game, RomSource};

/// Byte offset of the NGH identifier within the program area.
pub const NGH_OFFSET: usize = 0x108;

/// The assembled areas of one cartridge build.
#[derive(Debug, Default)]
pub struct BuiltRom {
    pub areas: [Vec<u8>; Area::COUNT],
    /// The 16-bit NGH identifier read back out of the built program area,
    /// zero-extended; zero when the program is too short to hold one.
    pub ngh: u32,
}

impl BuiltRom {
    pub fn area(&self, area: Area) -> &[u8] {
        &self.areas[area.index()]
    }

    /// Actual byte length of every area, in header order.
    pub fn sizes(&self) -> [u32; Area::COUNT] {
        let mut sizes = [0u32; Area::COUNT];
        for (size, area) in sizes.iter_mut().zip(&self.areas) {
            *size = area.len() as u32;
        }
        sizes
    }
}

/// Assemble every area of `game` from `source`, in the fixed order
/// P, S, M, V1, V2, C.
pub fn build(game: &Game, source: &mut dyn RomSource) -> Result<BuiltRom, BuildError> {
    let mut built = BuiltRom::default();
    for area in Area::ALL {
        built.areas[area.index()] = game.recipe.build_area(game, area, source)?;
    }

    let p = built.area(Area::P);
    if p.len() > NGH_OFFSET + 2 {
        built.ngh = u32::from(u16::from_le_bytes([p[NGH_OFFSET], p[NGH_OFFSET + 1]]));
    }

    Ok(built)
}
