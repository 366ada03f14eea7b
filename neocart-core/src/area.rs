//! The six positional memory areas of a cartridge.

/// One of the six memory areas of a Neo Geo cartridge, in cart-file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Area {
    /// 68k program
    P = 0,
    /// Fix layer (text/tile overlay)
    S = 1,
    /// Z80 audio program
    M = 2,
    /// ADPCM-A voice samples
    V1 = 3,
    /// ADPCM-B voice samples
    V2 = 4,
    /// Sprites
    C = 5,
}

impl Area {
    /// Number of areas in a cartridge.
    pub const COUNT: usize = 6;

    /// All areas, in the order they are assembled and serialised.
    pub const ALL: [Area; Area::COUNT] = [Area::P, Area::S, Area::M, Area::V1, Area::V2, Area::C];

    /// Positional index of this area within header and body.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short display label, as printed by `info`.
    pub fn label(self) -> &'static str {
        match self {
            Area::P => "P",
            Area::S => "S",
            Area::M => "M",
            Area::V1 => "V1",
            Area::V2 => "V2",
            Area::C => "C",
        }
    }
}

#[cfg(test)]
#[path = "tests/area_tests.rs"]
mod tests;
