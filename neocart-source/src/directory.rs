//! Directory adapter: loose dump files resolved by filename, verified by
//! size and SHA-1.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};

use sha1::{Digest, Sha1};

use neocart_core::{Area, BuildError, Game, Member, RomSource};

const CHUNK_SIZE: usize = 64 * 1024;

/// A container that is a plain directory of dump files.
pub struct DirectorySource {
    path: PathBuf,
}

impl DirectorySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The parent set lives in a sibling directory named after it.
    fn parent_dir(&self, parent: &str) -> PathBuf {
        self.path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(parent)
    }

    fn resolve(&self, dirs: &[PathBuf], member: &Member) -> Result<Vec<u8>, BuildError> {
        for dir in dirs {
            let file = match File::open(dir.join(member.name)) {
                Ok(file) => file,
                Err(err) if err.kind() == ErrorKind::NotFound => continue,
                Err(err) => return Err(err.into()),
            };
            return read_verified(file, member);
        }
        Err(BuildError::rom_not_found(member.name))
    }
}

impl RomSource for DirectorySource {
    fn area(&mut self, game: &Game, area: Area) -> Result<Vec<Vec<u8>>, BuildError> {
        let mut dirs = vec![self.path.clone()];
        if let Some(parent) = game.parent {
            dirs.push(self.parent_dir(parent));
        }

        game.areas[area.index()]
            .members
            .iter()
            .map(|member| self.resolve(&dirs, member))
            .collect()
    }
}

/// Stream a file into memory, hashing as it goes, and check length and
/// SHA-1 against the member descriptor.
fn read_verified(file: File, member: &Member) -> Result<Vec<u8>, BuildError> {
    let mut reader = BufReader::new(file);
    let mut sha = Sha1::new();
    let mut data = Vec::new();
    let mut buf = vec![0u8; CHUNK_SIZE];

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        sha.update(&buf[..n]);
        data.extend_from_slice(&buf[..n]);
    }

    if data.len() as u64 != member.size || format!("{:x}", sha.finalize()) != member.sha1 {
        return Err(BuildError::bad_rom(member.name));
    }

    Ok(data)
}
