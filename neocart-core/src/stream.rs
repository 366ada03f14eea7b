//! Byte-stream primitives used by the area readers.
//!
//! Everything here operates on owned byte buffers. The peak working set of a
//! build is already bounded by the sprite area, so chaining readers buys
//! nothing over plain vectors.

use crate::error::BuildError;

/// Join byte buffers in order into one buffer.
pub fn concat(parts: Vec<Vec<u8>>) -> Vec<u8> {
    let mut iter = parts.into_iter();
    let mut out = iter.next().unwrap_or_default();
    for part in iter {
        out.extend_from_slice(&part);
    }
    out
}

/// Right-pad `buf` with `fill` up to `len` bytes. Buffers already at or past
/// `len` are returned unchanged.
pub fn pad_to(mut buf: Vec<u8>, len: usize, fill: u8) -> Vec<u8> {
    if buf.len() < len {
        buf.resize(len, fill);
    }
    buf
}

/// Interleave two or four sources at a fixed stride.
///
/// Each cycle copies `width` bytes from every source. With four sources the
/// physical order within a cycle is the logical order `0, 2, 1, 3` (two
/// pairs, lower half of each pair first), matching how the boards wire the
/// ROMs. A source that runs short mid-cycle is zero-filled to the stride;
/// the output ends with the cycle in which the last remaining source runs
/// out, and any trailing strides that are zero-filled only because their
/// source was exhausted are trimmed off again.
pub fn interleave(width: usize, sources: &[&[u8]]) -> Result<Vec<u8>, BuildError> {
    let order: &[usize] = match sources.len() {
        2 => &[0, 1],
        4 => &[0, 2, 1, 3],
        n => return Err(BuildError::InvalidInterleave(n)),
    };

    let mut pos = vec![0usize; sources.len()];
    let mut live = (1usize << sources.len()) - 1;
    let mut out = Vec::new();
    // Stride lengths observed since the first source ran dry; used to trim
    // the zero padding that only exists because of exhausted sources.
    let mut tail: Vec<usize> = Vec::new();

    'cycles: loop {
        for &idx in order {
            let src = sources[idx];
            let take = width.min(src.len().saturating_sub(pos[idx]));

            out.extend_from_slice(&src[pos[idx]..pos[idx] + take]);
            if take < width {
                out.resize(out.len() + (width - take), 0);
            }

            pos[idx] += take;
            if pos[idx] >= src.len() {
                live &= !(1 << idx);
            }
            if take == 0 || !tail.is_empty() {
                tail.push(take);
            }

            if live == 0 {
                break 'cycles;
            }
        }
    }

    for &n in tail.iter().rev() {
        if n != 0 {
            break;
        }
        out.truncate(out.len() - width);
    }

    Ok(out)
}

#[cfg(test)]
#[path = "tests/stream_tests.rs"]
mod tests;
