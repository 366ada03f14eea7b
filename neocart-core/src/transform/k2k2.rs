//! 2002-generation program block shuffle.
//!
//! These boards store the banked program as 0x80000-byte blocks in a
//! shuffled order; the block table and the offset of the shuffled span are
//! per title. The 16-block titles shuffle from the start of the image, the
//! 8-block ones leave the first megabyte alone.

/// Reorder the shuffled span: output block `i` is taken from byte offset
/// `blocks[i]` within the span.
pub fn k2k2_program(p: &[u8], offset: usize, blocks: &[usize]) -> Vec<u8> {
    const BLOCK: usize = 0x80000;

    let mut out = p.to_vec();
    let span = &p[offset..offset + blocks.len() * BLOCK];
    for (i, &blk) in blocks.iter().enumerate() {
        out[offset + i * BLOCK..offset + (i + 1) * BLOCK].copy_from_slice(&span[blk..blk + BLOCK]);
    }
    out
}

pub static KOF2002_BLOCKS: [usize; 8] = [
    0x100000, 0x280000, 0x300000, 0x180000, 0x000000, 0x380000, 0x200000, 0x080000,
];

pub static MATRIM_BLOCKS: [usize; 8] = [
    0x100000, 0x280000, 0x300000, 0x180000, 0x000000, 0x380000, 0x200000, 0x080000,
];

pub static SAMSHO5_BLOCKS: [usize; 16] = [
    0x000000, 0x080000, 0x700000, 0x680000, 0x500000, 0x180000, 0x200000, 0x480000, 0x300000,
    0x780000, 0x600000, 0x280000, 0x100000, 0x580000, 0x400000, 0x380000,
];

pub static SAMSH5SP_BLOCKS: [usize; 16] = [
    0x000000, 0x080000, 0x500000, 0x480000, 0x600000, 0x580000, 0x700000, 0x280000, 0x100000,
    0x680000, 0x400000, 0x780000, 0x200000, 0x380000, 0x300000, 0x180000,
];
