//! SMA program descrambler family.
//!
//! The SMA chip scrambles the banked program ROMs on three axes: a data-line
//! swap over every 16-bit word, an address-line swap within fixed-size
//! blocks of the banked region, and a relocated, address-swapped copy of the
//! vector/fixed region pulled from a per-title offset. All key material is
//! per title.

use crate::bits::{bitswap16, bitswap_idx};

/// Word index of the first banked program word: the SMA maps nothing below
/// 0xC0000 and its own 0x40000-byte ROM sits directly above that.
const BANK_BASE: usize = 0x100000 / 2;

/// Length of the relocated fixed region, in words.
const FIXED_WORDS: usize = 0xc0000 / 2;

/// Per-title SMA key material.
#[derive(Debug, PartialEq, Eq)]
pub struct SmaKeys {
    /// Data-line swap applied to every banked word.
    pub data_bits: [u32; 16],
    /// The chips differ in whether the fixed region is pulled before or
    /// after the banked address swap.
    pub fixed_first: bool,
    /// Word offset the fixed region is relocated from.
    pub fixed_base: usize,
    /// Address permutation for the fixed-region relocation.
    pub fixed_bits: [u32; 24],
    /// Length, in words, of the banked region covered by the block swap.
    pub bank_words: usize,
    /// Words per address-swapped block.
    pub block_words: usize,
    /// Address permutation within each block.
    pub block_bits: [u32; 24],
    /// Sprite scheme the same board carries: CMC50 on kof2000, CMC42
    /// otherwise, with the per-title XOR byte.
    pub cmc50: bool,
    pub gfx_xor: u8,
}

/// Descramble an SMA program image (0xC0000 erased header + SMA ROM +
/// banked ROMs) in place of its scrambled layout.
pub fn sma_program(p: Vec<u8>, keys: &SmaKeys) -> Vec<u8> {
    let mut rom: Vec<u16> = p
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect();

    for w in rom[BANK_BASE..].iter_mut() {
        *w = bitswap16(*w, &keys.data_bits);
    }

    if keys.fixed_first {
        relocate_fixed(&mut rom, keys);
        swap_banks(&mut rom, keys);
    } else {
        swap_banks(&mut rom, keys);
        relocate_fixed(&mut rom, keys);
    }

    rom.iter().flat_map(|w| w.to_le_bytes()).collect()
}

fn swap_banks(rom: &mut [u16], keys: &SmaKeys) {
    let mut block = vec![0u16; keys.block_words];
    let mut i = 0;
    while i < keys.bank_words {
        let start = BANK_BASE + i;
        block.copy_from_slice(&rom[start..start + keys.block_words]);
        for j in 0..keys.block_words {
            rom[start + j] = block[bitswap_idx(j, &keys.block_bits)];
        }
        i += keys.block_words;
    }
}

fn relocate_fixed(rom: &mut [u16], keys: &SmaKeys) {
    for i in 0..FIXED_WORDS {
        rom[i] = rom[keys.fixed_base + bitswap_idx(i, &keys.fixed_bits)];
    }
}

pub static KOF99: SmaKeys = SmaKeys {
    data_bits: [13, 7, 3, 0, 9, 4, 5, 6, 1, 12, 8, 14, 10, 11, 2, 15],
    fixed_first: false,
    fixed_base: 0x700000 / 2,
    fixed_bits: [
        23, 22, 21, 20, 19, 18, 11, 6, 14, 17, 16, 5, 8, 10, 12, 0, 4, 3, 2, 7, 9, 15, 13, 1,
    ],
    bank_words: 0x600000 / 2,
    block_words: 0x800 / 2,
    block_bits: [
        23, 22, 21, 20, 19, 18, 17, 16, 15, 14, 13, 12, 11, 10, 6, 2, 4, 9, 8, 3, 1, 7, 0, 5,
    ],
    cmc50: false,
    gfx_xor: 0x00,
};

pub static GAROU: SmaKeys = SmaKeys {
    data_bits: [13, 12, 14, 10, 8, 2, 3, 1, 5, 9, 11, 4, 15, 0, 6, 7],
    fixed_first: true,
    fixed_base: 0x710000 / 2,
    fixed_bits: [
        23, 22, 21, 20, 19, 18, 4, 5, 16, 14, 7, 9, 6, 13, 17, 15, 3, 1, 2, 12, 11, 8, 10, 0,
    ],
    bank_words: 0x800000 / 2,
    block_words: 0x8000 / 2,
    block_bits: [
        23, 22, 21, 20, 19, 18, 17, 16, 15, 14, 9, 4, 8, 3, 13, 6, 2, 7, 0, 12, 1, 11, 10, 5,
    ],
    cmc50: false,
    gfx_xor: 0x06,
};

pub static GAROUH: SmaKeys = SmaKeys {
    data_bits: [14, 5, 1, 11, 7, 4, 10, 15, 3, 12, 8, 13, 0, 2, 9, 6],
    fixed_first: true,
    fixed_base: 0x7f8000 / 2,
    fixed_bits: [
        23, 22, 21, 20, 19, 18, 5, 16, 11, 2, 6, 7, 17, 3, 12, 8, 14, 4, 0, 9, 1, 10, 15, 13,
    ],
    bank_words: 0x800000 / 2,
    block_words: 0x8000 / 2,
    block_bits: [
        23, 22, 21, 20, 19, 18, 17, 16, 15, 14, 12, 8, 1, 7, 11, 3, 13, 10, 6, 9, 5, 4, 0, 2,
    ],
    cmc50: false,
    gfx_xor: 0x06,
};

pub static MSLUG3: SmaKeys = SmaKeys {
    data_bits: [4, 11, 14, 3, 1, 13, 0, 7, 2, 8, 12, 15, 10, 9, 5, 6],
    fixed_first: true,
    fixed_base: 0x5d0000 / 2,
    fixed_bits: [
        23, 22, 21, 20, 19, 18, 15, 2, 1, 13, 3, 0, 9, 6, 16, 4, 11, 5, 7, 12, 17, 14, 10, 8,
    ],
    bank_words: 0x800000 / 2,
    block_words: 0x10000 / 2,
    block_bits: [
        23, 22, 21, 20, 19, 18, 17, 16, 15, 2, 11, 0, 14, 6, 4, 13, 8, 9, 3, 10, 7, 5, 12, 1,
    ],
    cmc50: false,
    gfx_xor: 0xad,
};

/// Later mslug3 revision with its own SMA programming.
pub static MSLUG3A: SmaKeys = SmaKeys {
    data_bits: [2, 11, 0, 14, 6, 4, 13, 8, 9, 3, 10, 7, 5, 12, 1, 15],
    fixed_first: true,
    fixed_base: 0x5d0000 / 2,
    fixed_bits: [
        23, 22, 21, 20, 19, 18, 12, 14, 1, 10, 3, 0, 9, 6, 16, 4, 11, 5, 7, 2, 17, 15, 13, 8,
    ],
    bank_words: 0x800000 / 2,
    block_words: 0x10000 / 2,
    block_bits: [
        23, 22, 21, 20, 19, 18, 17, 16, 15, 12, 11, 0, 14, 6, 4, 13, 8, 9, 3, 10, 7, 5, 2, 1,
    ],
    cmc50: false,
    gfx_xor: 0xad,
};

pub static KOF2000: SmaKeys = SmaKeys {
    data_bits: [12, 8, 11, 3, 15, 14, 7, 0, 10, 13, 6, 5, 9, 2, 1, 4],
    fixed_first: false,
    fixed_base: 0x73a000 / 2,
    fixed_bits: [
        23, 22, 21, 20, 19, 18, 8, 4, 15, 13, 3, 14, 16, 2, 6, 17, 7, 12, 10, 0, 5, 11, 1, 9,
    ],
    bank_words: 0x63a000 / 2,
    block_words: 0x800 / 2,
    block_bits: [
        23, 22, 21, 20, 19, 18, 17, 16, 15, 14, 13, 12, 11, 10, 4, 1, 3, 8, 6, 2, 7, 0, 9, 5,
    ],
    cmc50: true,
    gfx_xor: 0x00,
};
