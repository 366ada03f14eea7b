//! Reusable area readers: the composite assembly steps recipes share.
//!
//! A reader takes the area descriptor plus the member buffers the adapter
//! resolved (always in descriptor order) and produces the assembled area.

use crate::error::BuildError;
use crate::game::AreaSpec;
use crate::stream::{concat, interleave, pad_to};

pub const ONE_TWENTY_EIGHT_KIB: usize = 128 << 10;
pub const ONE_MIB: usize = 1 << 20;
pub const TWO_MIB: usize = 2 << 20;

/// True when a member name marks a patch ROM: its extension contains
/// `marker` (".ep" catches .ep1/.ep2, the convention for program patches).
fn is_patch(name: &str, marker: &str) -> bool {
    match name.rfind('.') {
        Some(dot) => name[dot..].contains(marker),
        None => false,
    }
}

/// Program reader.
///
/// Members whose extension matches `patch_marker` overlay the head of the
/// base program. A leading 2 MiB base ROM stores its upper megabyte first,
/// so its halves are swapped back before concatenation.
pub fn program(spec: &AreaSpec, bufs: Vec<Vec<u8>>, patch_marker: Option<&str>) -> Vec<u8> {
    let mut patch = Vec::new();
    let mut base: Vec<Vec<u8>> = Vec::new();
    let mut first_base_size = None;
    for (member, buf) in spec.members.iter().zip(bufs) {
        if patch_marker.is_some_and(|m| is_patch(member.name, m)) {
            patch.extend_from_slice(&buf);
        } else {
            if first_base_size.is_none() {
                first_base_size = Some(member.size);
            }
            base.push(buf);
        }
    }

    if first_base_size == Some(TWO_MIB as u64) {
        base[0].rotate_left(ONE_MIB);
    }

    let joined = concat(base);
    if patch.is_empty() {
        return joined;
    }
    let tail = &joined[patch.len().min(joined.len())..];
    patch.extend_from_slice(tail);
    patch
}

/// Padded reader for the M and V areas: every member except the last is
/// padded to the size of the largest member.
pub fn padded(spec: &AreaSpec, bufs: Vec<Vec<u8>>) -> Vec<u8> {
    let pad = spec.max_member_size() as usize;
    let last = bufs.len().saturating_sub(1);
    let parts = bufs
        .into_iter()
        .enumerate()
        .map(|(i, buf)| if i < last { pad_to(buf, pad, 0) } else { buf })
        .collect();
    concat(parts)
}

/// Sprite reader: byte-interleave each pair of members; every pair except
/// the last is padded to twice the largest member before concatenation.
pub fn sprites(spec: &AreaSpec, bufs: Vec<Vec<u8>>) -> Result<Vec<u8>, BuildError> {
    let pad = spec.max_member_size() as usize;
    let mut parts = Vec::new();
    let mut i = 0;
    while i < bufs.len() {
        let mut pair = interleave(1, &[&bufs[i], &bufs[i + 1]])?;
        if i + 2 < bufs.len() {
            pair = pad_to(pair, pad * 2, 0);
        }
        parts.push(pair);
        i += 2;
    }
    Ok(concat(parts))
}

/// Sprite reader for the `kotm2` board family: the byte-interleaved pairs
/// are interleaved again at 2 MiB granularity.
pub fn sprites_kotm2(bufs: Vec<Vec<u8>>) -> Result<Vec<u8>, BuildError> {
    let mut pairs = Vec::new();
    let mut i = 0;
    while i < bufs.len() {
        pairs.push(interleave(1, &[&bufs[i], &bufs[i + 1]])?);
        i += 2;
    }
    let refs: Vec<&[u8]> = pairs.iter().map(Vec::as_slice).collect();
    interleave(TWO_MIB, &refs)
}

/// Sprite reader for the `kotm2p` prototype boards: groups of four members
/// byte-interleaved, groups concatenated.
pub fn sprites_kotm2p(bufs: Vec<Vec<u8>>) -> Result<Vec<u8>, BuildError> {
    let mut parts = Vec::new();
    let mut i = 0;
    while i < bufs.len() {
        parts.push(interleave(
            1,
            &[&bufs[i], &bufs[i + 1], &bufs[i + 2], &bufs[i + 3]],
        )?);
        i += 4;
    }
    Ok(concat(parts))
}

/// Program reader for the `kotm2p` prototype boards: pairs byte-interleaved,
/// pairs concatenated.
pub fn program_kotm2p(bufs: Vec<Vec<u8>>) -> Result<Vec<u8>, BuildError> {
    let mut parts = Vec::new();
    let mut i = 0;
    while i < bufs.len() {
        parts.push(interleave(1, &[&bufs[i], &bufs[i + 1]])?);
        i += 2;
    }
    Ok(concat(parts))
}

/// Program reader for the `gpilotsp` prototype: as `kotm2p` but each pair is
/// wired the other way around.
pub fn program_gpilotsp(bufs: Vec<Vec<u8>>) -> Result<Vec<u8>, BuildError> {
    let mut parts = Vec::new();
    let mut i = 0;
    while i < bufs.len() {
        parts.push(interleave(1, &[&bufs[i + 1], &bufs[i]])?);
        i += 2;
    }
    Ok(concat(parts))
}

/// Sprite reader for the `viewpoin` board: a 2 MiB erased block follows each
/// byte-interleaved pair before the outer 2 MiB interleave.
pub fn sprites_viewpoin(bufs: Vec<Vec<u8>>) -> Result<Vec<u8>, BuildError> {
    let zero = vec![0u8; TWO_MIB];
    let mut parts = Vec::new();
    let mut i = 0;
    while i < bufs.len() {
        parts.push(interleave(1, &[&bufs[i], &bufs[i + 1]])?);
        parts.push(zero.clone());
        i += 2;
    }
    let refs: Vec<&[u8]> = parts.iter().map(Vec::as_slice).collect();
    interleave(TWO_MIB, &refs)
}

/// Program reader for the PVC boards: the first two members are 16-bit
/// interleaved, remaining members are appended as-is.
pub fn program_pvc(bufs: Vec<Vec<u8>>) -> Result<Vec<u8>, BuildError> {
    let mut out = interleave(2, &[&bufs[0], &bufs[1]])?;
    for tail in &bufs[2..] {
        out.extend_from_slice(tail);
    }
    Ok(out)
}

/// Program reader for the SMA boards: the SMA chip maps nothing below
/// 0xC0000, so the image starts with an erased block of that size followed
/// by the SMA ROM and the banked program ROMs.
pub fn program_sma(bufs: Vec<Vec<u8>>) -> Vec<u8> {
    let mut out = vec![0u8; 0xc0000];
    for buf in bufs {
        out.extend_from_slice(&buf);
    }
    out
}

#[cfg(test)]
#[path = "tests/readers_tests.rs"]
mod tests;
