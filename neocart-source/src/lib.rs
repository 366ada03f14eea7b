//! Input container adapters.
//!
//! Both adapters implement the [`RomSource`] seam of the build pipeline:
//! given a game descriptor and an area, they resolve every expected member
//! in the main container (falling back to the parent container for clone
//! sets), verify it against the catalogue hashes and return the raw bytes
//! in descriptor order.

use std::path::Path;

use neocart_core::{BuildError, RomSource};

mod archive;
mod directory;

pub use archive::ZipSource;
pub use directory::DirectorySource;

/// Open a ROM container. Directories become a [`DirectorySource`]; files
/// are sniffed for the zip magic and become a [`ZipSource`]. Anything else
/// is an unsupported format.
pub fn open(path: &Path) -> Result<Box<dyn RomSource>, BuildError> {
    let meta = std::fs::metadata(path)?;
    if meta.is_dir() {
        return Ok(Box::new(DirectorySource::new(path)));
    }

    let mut magic = [0u8; 4];
    let mut file = std::fs::File::open(path)?;
    let n = std::io::Read::read(&mut file, &mut magic)?;
    if n == magic.len() && magic == *b"PK\x03\x04" {
        return Ok(Box::new(ZipSource::new(path)));
    }

    Err(BuildError::unsupported_format(path.display().to_string()))
}
