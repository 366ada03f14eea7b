//! Bootleg board transforms: the S/C/V descrambles shared by several
//! bootleg cartridges plus the one-off program descramblers.

use crate::bits::{bitswap8, bitswap_idx};

fn read_le16(b: &[u8], off: usize) -> u16 {
    u16::from_le_bytes([b[off], b[off + 1]])
}

fn write_le16(b: &mut [u8], off: usize, v: u16) {
    b[off..off + 2].copy_from_slice(&v.to_le_bytes());
}

/// Sprite descramble common to most bootleg boards: adjacent 64-byte blocks
/// are swapped.
pub fn cx_decrypt(c: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; c.len()];
    for i in 0..c.len() / 0x40 {
        let src = (i ^ 1) * 0x40;
        out[i * 0x40..(i + 1) * 0x40].copy_from_slice(&c[src..src + 0x40]);
    }
    out
}

/// Fix layer descramble for bootleg boards. Mode 1 swaps the two 8-byte
/// halves of each 16-byte block; mode 2 permutes the bits of every byte.
/// Other modes pass the data through.
pub fn sx_decrypt(s: &[u8], mode: u32) -> Vec<u8> {
    match mode {
        1 => {
            let mut out = vec![0u8; s.len()];
            let mut i = 0;
            while i + 0x10 <= s.len() {
                out[i..i + 8].copy_from_slice(&s[i + 8..i + 0x10]);
                out[i + 8..i + 0x10].copy_from_slice(&s[i..i + 8]);
                i += 0x10;
            }
            out
        }
        2 => s
            .iter()
            .map(|&b| bitswap8(b, &[7, 6, 0, 4, 3, 2, 1, 5]))
            .collect(),
        _ => s.to_vec(),
    }
}

const TILE_SIZE: usize = 128;

/// Sprite rearrangement of the cthd2003 bootleg family: within selected
/// 512-tile stripes, groups of 16 tiles are reordered by a four-bit address
/// permutation.
pub fn cthd_decrypt(c: &[u8]) -> Vec<u8> {
    let mut out = c.to_vec();
    let mut buf = vec![0u8; 16 * TILE_SIZE];

    for i in (0..1024usize).step_by(8) {
        // (stripe start, bit3, bit2, bit1, bit0 shift); stripes 3 and 4 of
        // each group of eight are stored straight.
        for &(start, b3, b2, b1, b0) in &[
            (i * 512, 0, 3, 2, 1),
            (i * 512 + 512, 1, 0, 3, 2),
            (i * 512 + 512 * 2, 2, 1, 0, 3),
            (i * 512 + 512 * 5, 0, 1, 2, 3),
            (i * 512 + 512 * 6, 0, 1, 2, 3),
            (i * 512 + 512 * 7, 0, 2, 3, 1),
        ] {
            let mut realrom = start * TILE_SIZE;
            for _ in 0..32 {
                for k in 0..16usize {
                    let offset = ((k & 1) << b0)
                        | (((k & 2) >> 1) << b1)
                        | (((k & 4) >> 2) << b2)
                        | (((k & 8) >> 3) << b3);
                    let src = realrom + offset * TILE_SIZE;
                    buf[k * TILE_SIZE..(k + 1) * TILE_SIZE]
                        .copy_from_slice(&c[src..src + TILE_SIZE]);
                }
                out[realrom..realrom + 16 * TILE_SIZE].copy_from_slice(&buf);
                realrom += 16 * TILE_SIZE;
            }
        }
    }

    out
}

/// Program descramble for the kof97oro bootleg: a word-index permutation
/// over the whole 5 MiB image.
pub fn kof97oro_program(p: &[u8]) -> Vec<u8> {
    const BITS: [u32; 24] = [
        23, 22, 21, 20, 19, 18, 17, 16, 15, 14, 13, 12, 11, 2, 9, 8, 7, 1, 5, 4, 3, 10, 6, 0,
    ];

    let rom: Vec<u16> = p
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect();
    let mut out = Vec::with_capacity(p.len());
    for i in 0..rom.len() {
        out.extend_from_slice(&rom[bitswap_idx(i, &BITS)].to_le_bytes());
    }
    out
}

/// Program descramble for kof98: word pairs of the first megabyte are
/// interleaved with the shadow copy stored in the second megabyte, with two
/// address-dependent straight/crossed windows. The shadow megabyte is
/// dropped afterwards, so a 6 MiB input yields a 5 MiB program.
pub fn kof98_program(p: &[u8]) -> Vec<u8> {
    const SEC: [usize; 8] = [
        0x000000, 0x100000, 0x000004, 0x100004, 0x10000a, 0x00000a, 0x10000e, 0x00000e,
    ];
    const POS: [usize; 4] = [0x000, 0x004, 0x00a, 0x00e];

    let mut out = p.to_vec();
    let dst = p[..0x200000].to_vec();

    let mut i = 0x800;
    while i < 0x100000 {
        for j in (0..0x100).step_by(0x10) {
            for k in (0..16).step_by(2) {
                let sec = SEC[k / 2];
                out[i + j + k..i + j + k + 2]
                    .copy_from_slice(&dst[i + j + sec + 0x100..i + j + sec + 0x102]);
                out[i + j + k + 0x100..i + j + k + 0x102]
                    .copy_from_slice(&dst[i + j + sec..i + j + sec + 2]);
            }
            if (0x080000..0x0c0000).contains(&i) {
                for &pos in &POS {
                    out[i + j + pos..i + j + pos + 2]
                        .copy_from_slice(&dst[i + j + pos..i + j + pos + 2]);
                    out[i + j + pos + 0x100..i + j + pos + 0x102]
                        .copy_from_slice(&dst[i + j + pos + 0x100..i + j + pos + 0x102]);
                }
            } else if i >= 0x0c0000 {
                for &pos in &POS {
                    out[i + j + pos..i + j + pos + 2]
                        .copy_from_slice(&dst[i + j + pos + 0x100..i + j + pos + 0x102]);
                    out[i + j + pos + 0x100..i + j + pos + 0x102]
                        .copy_from_slice(&dst[i + j + pos..i + j + pos + 2]);
                }
            }
        }
        out[i..i + 2].copy_from_slice(&dst[i..i + 2]);
        out[i + 2..i + 4].copy_from_slice(&dst[i + 0x100000..i + 0x100002]);
        out[i + 0x100..i + 0x102].copy_from_slice(&dst[i + 0x100..i + 0x102]);
        out[i + 0x102..i + 0x104].copy_from_slice(&dst[i + 0x100100..i + 0x100102]);
        i += 0x200;
    }

    out.copy_within(0x200000.., 0x100000);
    out.truncate(p.len() - 0x100000);
    out
}

/// Program descramble for the lans2004 bootleg: an 0x20000-block shuffle of
/// the first megabyte followed by the relocations and code fixups the
/// bootleg's protection chip applies at runtime. A 6 MiB input yields a
/// 5 MiB program.
pub fn lans2004_program(p: &[u8]) -> Vec<u8> {
    const SEC: [usize; 8] = [0x3, 0x8, 0x7, 0xc, 0x1, 0xa, 0x6, 0xd];

    let mut rom = p.to_vec();

    // Sequential in-buffer moves, exactly as the original loader performs
    // them: later moves observe the results of earlier ones.
    for (i, &sec) in SEC.iter().enumerate() {
        let src = 0x080000 + sec * 0x20000;
        let chunk = rom[src..src + 0x20000].to_vec();
        rom[i * 0x20000..(i + 1) * 0x20000].copy_from_slice(&chunk);
    }

    let chunk = rom[0x045b00..0x045b00 + 0x1710].to_vec();
    rom[0x0bbb00..0x0bbb00 + 0x1710].copy_from_slice(&chunk);
    let chunk = rom[0x1a92be..0x1a92be + 0x10].to_vec();
    rom[0x02fff0..0x02fff0 + 0x10].copy_from_slice(&chunk);

    rom.copy_within(0x200000.., 0x100000);
    rom.truncate(p.len() - 0x100000);

    // JSR/LEA targets into the moved block get rebased.
    let mut i = 0x0bbb00;
    while i < 0x0be000 {
        let w = read_le16(&rom, i);
        if ((w & 0xffbf) == 0x4eb9 || (w & 0xffbf) == 0x43b9) && read_le16(&rom, i + 2) == 0 {
            write_le16(&mut rom, i + 2, 0x000b);
            let target = read_le16(&rom, i + 4);
            write_le16(&mut rom, i + 4, target.wrapping_add(0x6000));
        }
        i += 2;
    }

    write_le16(&mut rom, 0x2d15c, 0x000b);
    write_le16(&mut rom, 0x2d15e, 0xbb00);
    write_le16(&mut rom, 0x2d1e4, 0x6002);
    write_le16(&mut rom, 0x2ea7e, 0x6002);
    write_le16(&mut rom, 0xbbcd0, 0x6002);
    write_le16(&mut rom, 0xbbdf2, 0x6002);
    write_le16(&mut rom, 0xbbe42, 0x6002);

    rom
}

/// Voice descramble for the lans2004 bootleg: a per-byte bit permutation.
pub fn lans2004_voice(v: &[u8]) -> Vec<u8> {
    v.iter()
        .map(|&b| bitswap8(b, &[2, 7, 4, 1, 6, 3, 0, 5]))
        .collect()
}

/// Audio program descramble for the matrimbl bootleg. The low XOR plus the
/// conditional odd-byte and bank swaps are not obvious from the board
/// wiring; they match dumped hardware output.
pub fn matrimbl_audio(m: &[u8]) -> Vec<u8> {
    fn scramble(i: usize) -> usize {
        i ^ 0x5
    }

    let mut out = vec![0u8; m.len()];
    for i in 0..m.len().min(0x20000) {
        let j = if i & 0x10000 != 0 {
            if i & 0x800 != 0 {
                scramble(i) ^ 0x10000
            } else {
                scramble(i ^ 0x01)
            }
        } else if i & 0x800 != 0 {
            scramble(i ^ 0x01) ^ 0x10000
        } else {
            scramble(i)
        };
        out[j] = m[i];
    }
    out
}

/// Voice descramble for the matrimbl bootleg: the second and fourth 4 MiB
/// ROMs are byte-pair swapped on the board. Kept as observed; not obvious
/// from the reference wiring.
pub fn matrimbl_voice(v: &[u8]) -> Vec<u8> {
    let mut out = v.to_vec();
    for start in [0x400000usize, 0xc00000] {
        let end = (start + 0x400000).min(out.len());
        let mut i = start;
        while i + 1 < end {
            out.swap(i, i + 1);
            i += 2;
        }
    }
    out
}
