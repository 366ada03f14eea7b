//! Zip adapter: members matched by filename or by the CRC-32 stored in the
//! archive directory, then verified against both size and CRC.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use neocart_core::{Area, BuildError, Game, Member, RomSource};

/// A container that is a zip archive of dump files.
pub struct ZipSource {
    path: PathBuf,
}

impl ZipSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The parent set is a sibling archive named after it, with the same
    /// extension as the main container.
    fn parent_path(&self, parent: &str) -> PathBuf {
        let mut name = parent.to_string();
        if let Some(ext) = self.path.extension().and_then(|e| e.to_str()) {
            name.push('.');
            name.push_str(ext);
        }
        self.path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(name)
    }
}

impl RomSource for ZipSource {
    fn area(&mut self, game: &Game, area: Area) -> Result<Vec<Vec<u8>>, BuildError> {
        let mut archives = vec![open_archive(&self.path)?];
        if let Some(parent) = game.parent {
            archives.push(open_archive(&self.parent_path(parent))?);
        }

        game.areas[area.index()]
            .members
            .iter()
            .map(|member| resolve(&mut archives, member))
            .collect()
    }
}

type Archive = ZipArchive<BufReader<File>>;

fn open_archive(path: &Path) -> Result<Archive, BuildError> {
    let file = File::open(path)?;
    ZipArchive::new(BufReader::new(file)).map_err(zip_err)
}

fn resolve(archives: &mut [Archive], member: &Member) -> Result<Vec<u8>, BuildError> {
    for archive in archives.iter_mut() {
        for i in 0..archive.len() {
            let mut entry = archive.by_index(i).map_err(zip_err)?;
            if entry.name() != member.name && entry.crc32() != member.crc32 {
                continue;
            }
            // A name or CRC hit must then agree on both.
            if entry.size() != member.size || entry.crc32() != member.crc32 {
                return Err(BuildError::bad_rom(member.name));
            }

            let mut data = Vec::with_capacity(entry.size() as usize);
            entry.read_to_end(&mut data)?;
            return Ok(data);
        }
    }
    Err(BuildError::rom_not_found(member.name))
}

fn zip_err(err: zip::result::ZipError) -> BuildError {
    BuildError::Io(std::io::Error::other(err))
}
