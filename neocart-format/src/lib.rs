//! Codec for the `.neo` cartridge image format.
//!
//! A cart file is a fixed 4096-byte little-endian header followed by the
//! six area bodies concatenated in the order P, S, M, V1, V2, C. The header
//! carries the area sizes, display metadata and the NGH identifier mirrored
//! out of the program area.

use thiserror::Error;

/// Conventional file extension for cart images.
pub const EXTENSION: &str = "neo";

/// Total header length, reserved tail included.
pub const HEADER_LEN: usize = 4096;

/// Number of areas in the body.
pub const AREAS: usize = 6;

/// Fixed width of the name field.
pub const NAME_LEN: usize = 33;

/// Fixed width of the manufacturer field.
pub const MANUFACTURER_LEN: usize = 17;

const SIGNATURE: [u8; 3] = *b"NEO";
const VERSION: u8 = 1;

/// Errors that can occur while encoding or decoding a cart image.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Signature or version is wrong, or the data is shorter than it
    /// declares.
    #[error("invalid cart image: {0}")]
    Invalid(String),

    /// Data continues past the declared area sizes.
    #[error("too much data after declared areas")]
    TooMuch,
}

impl FormatError {
    fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}

/// An in-memory cart image: header metadata plus the six area bodies.
#[derive(Debug, Clone, Default)]
pub struct CartFile {
    pub year: u32,
    pub genre: u32,
    pub screenshot: u32,
    pub ngh: u32,
    pub name: String,
    pub manufacturer: String,
    pub areas: [Vec<u8>; AREAS],
}

impl CartFile {
    /// Actual byte length of every area, as encoded into the header.
    pub fn sizes(&self) -> [u32; AREAS] {
        let mut sizes = [0u32; AREAS];
        for (size, area) in sizes.iter_mut().zip(&self.areas) {
            *size = area.len() as u32;
        }
        sizes
    }

    /// Serialise header and bodies.
    pub fn to_bytes(&self) -> Vec<u8> {
        let body_len: usize = self.areas.iter().map(Vec::len).sum();
        let mut out = vec![0u8; HEADER_LEN];

        out[..3].copy_from_slice(&SIGNATURE);
        out[3] = VERSION;
        for (i, size) in self.sizes().iter().enumerate() {
            out[4 + i * 4..8 + i * 4].copy_from_slice(&size.to_le_bytes());
        }
        out[28..32].copy_from_slice(&self.year.to_le_bytes());
        out[32..36].copy_from_slice(&self.genre.to_le_bytes());
        out[36..40].copy_from_slice(&self.screenshot.to_le_bytes());
        out[40..44].copy_from_slice(&self.ngh.to_le_bytes());
        copy_padded(&mut out[44..44 + NAME_LEN], self.name.as_bytes());
        copy_padded(
            &mut out[77..77 + MANUFACTURER_LEN],
            self.manufacturer.as_bytes(),
        );

        out.reserve_exact(body_len);
        for area in &self.areas {
            out.extend_from_slice(area);
        }
        out
    }

    /// Parse a cart image. Every declared area must be present in full and
    /// nothing may follow the last one.
    pub fn parse(data: &[u8]) -> Result<CartFile, FormatError> {
        if data.len() < HEADER_LEN {
            return Err(FormatError::invalid("truncated header"));
        }
        if data[..3] != SIGNATURE || data[3] != VERSION {
            return Err(FormatError::invalid("bad signature or version"));
        }

        let mut cart = CartFile {
            year: read_u32(data, 28),
            genre: read_u32(data, 32),
            screenshot: read_u32(data, 36),
            ngh: read_u32(data, 40),
            name: read_string(&data[44..44 + NAME_LEN]),
            manufacturer: read_string(&data[77..77 + MANUFACTURER_LEN]),
            ..CartFile::default()
        };

        let mut offset = HEADER_LEN;
        for i in 0..AREAS {
            let size = read_u32(data, 4 + i * 4) as usize;
            let end = offset
                .checked_add(size)
                .filter(|&end| end <= data.len())
                .ok_or_else(|| FormatError::invalid("truncated area body"))?;
            cart.areas[i] = data[offset..end].to_vec();
            offset = end;
        }

        if offset != data.len() {
            return Err(FormatError::TooMuch);
        }

        Ok(cart)
    }
}

fn copy_padded(dst: &mut [u8], src: &[u8]) {
    let n = src.len().min(dst.len());
    dst[..n].copy_from_slice(&src[..n]);
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn read_string(field: &[u8]) -> String {
    let end = field
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

#[cfg(test)]
#[path = "tests/codec_tests.rs"]
mod tests;
