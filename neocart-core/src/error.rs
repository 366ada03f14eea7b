use thiserror::Error;

/// Errors that can occur while assembling a cartridge image.
#[derive(Debug, Error)]
pub enum BuildError {
    /// I/O error from a container or member read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Identifier not present in the catalogue.
    ///
    /// The only recoverable error in the pipeline: an outer layer may catch
    /// it and fall back to other naming logic. Everything else is terminal.
    #[error("game not found: {0}")]
    GameNotFound(String),

    /// An expected dump file is missing from the container and its parent
    #[error("ROM not found: {0}")]
    RomNotFound(String),

    /// A dump file was found but its size or hash disagrees with the catalogue
    #[error("ROM doesn't match catalogue data: {0}")]
    BadRom(String),

    /// Input container is neither a directory nor a supported archive
    #[error("unsupported container format: {0}")]
    UnsupportedFormat(String),

    /// The title's protection scheme is not implemented
    #[error("unsupported game: {0}")]
    Unsupported(String),

    /// Interleave called with a source count other than two or four
    #[error("can only interleave two or four ROMs, got {0}")]
    InvalidInterleave(usize),
}

impl BuildError {
    pub fn game_not_found(id: impl Into<String>) -> Self {
        Self::GameNotFound(id.into())
    }

    pub fn rom_not_found(msg: impl Into<String>) -> Self {
        Self::RomNotFound(msg.into())
    }

    pub fn bad_rom(msg: impl Into<String>) -> Self {
        Self::BadRom(msg.into())
    }

    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    pub fn unsupported(id: impl Into<String>) -> Self {
        Self::Unsupported(id.into())
    }
}
