//! Game genres, mapping 1:1 onto the cartridge firmware's genre codes.

use std::fmt;

/// Genre code stored in the cart header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Genre {
    #[default]
    Other = 0,
    Action = 1,
    BeatEmUp = 2,
    Sports = 3,
    Driving = 4,
    Platformer = 5,
    Mahjong = 6,
    Shooter = 7,
    Quiz = 8,
    Fighting = 9,
    Puzzle = 10,
}

impl Genre {
    /// Decode a raw header code. Unknown codes are reported as `None` so the
    /// caller can fall back to printing the number.
    pub fn from_code(code: u32) -> Option<Genre> {
        match code {
            0 => Some(Genre::Other),
            1 => Some(Genre::Action),
            2 => Some(Genre::BeatEmUp),
            3 => Some(Genre::Sports),
            4 => Some(Genre::Driving),
            5 => Some(Genre::Platformer),
            6 => Some(Genre::Mahjong),
            7 => Some(Genre::Shooter),
            8 => Some(Genre::Quiz),
            9 => Some(Genre::Fighting),
            10 => Some(Genre::Puzzle),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Genre::Other => "Other",
            Genre::Action => "Action",
            Genre::BeatEmUp => "Beat 'em up",
            Genre::Sports => "Sports",
            Genre::Driving => "Driving",
            Genre::Platformer => "Platformer",
            Genre::Mahjong => "Mahjong",
            Genre::Shooter => "Shooter",
            Genre::Quiz => "Quiz",
            Genre::Fighting => "Fighting",
            Genre::Puzzle => "Puzzle",
        };
        f.write_str(name)
    }
}
