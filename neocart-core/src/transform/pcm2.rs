//! NEO-PCM2 voice ROM descrambling.

use crate::bits::bitswap_idx;

/// Address XOR mode, used by the 1999 SNK boards. `value` is the stride in
/// bytes: 4 (pnyaa), 8 (mslug4), or 16 (rotd). Word `j` within each stride
/// swaps with word `j ^ value/4`, which makes the transform an involution.
pub fn pcm2_decrypt(v: &[u8], value: usize) -> Vec<u8> {
    let mut rom: Vec<u16> = v
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect();

    let words = value / 2;
    let mut buf = vec![0u16; words];

    let mut i = 0;
    while i + words <= rom.len() {
        buf.copy_from_slice(&rom[i..i + words]);
        for j in 0..words {
            rom[i + j] = buf[j ^ (value / 4)];
        }
        i += words;
    }

    rom.iter().flat_map(|w| w.to_le_bytes()).collect()
}

/// Address permutation rows for [`pcm2_swap`]: (offset, address XOR) and the
/// eight-byte data XOR stream, one row per title generation.
const SWAP_ADDRS: [(usize, usize); 7] = [
    (0x000000, 0x0a5000), // kof2002
    (0xffce20, 0x001000), // matrim
    (0xfe2cf6, 0x04e001), // mslug5
    (0xffac28, 0x0c2000), // svc
    (0xfeb2c0, 0x00a000), // samsho5
    (0xff14ea, 0x0a7001), // kof2003
    (0xffb440, 0x002000), // samsh5sp
];

const SWAP_XOR: [[u8; 8]; 7] = [
    [0xf9, 0xe0, 0x5d, 0xf3, 0xea, 0x92, 0xbe, 0xef],
    [0xc4, 0x83, 0xa8, 0x5f, 0x21, 0x27, 0x64, 0xaf],
    [0xc3, 0xfd, 0x81, 0xac, 0x6d, 0xe7, 0xbf, 0x9e],
    [0xc3, 0xfd, 0x81, 0xac, 0x6d, 0xe7, 0xbf, 0x9e],
    [0xcb, 0x29, 0x7d, 0x43, 0xd2, 0x3a, 0xc2, 0xb4],
    [0x4b, 0xa4, 0x63, 0x46, 0xf0, 0x91, 0xea, 0x62],
    [0x4b, 0xa4, 0x63, 0x46, 0xf0, 0x91, 0xea, 0x62],
];

/// Address swap mode, used by the PVC and 2002-generation boards. `value`
/// selects the per-title row of [`SWAP_ADDRS`]/[`SWAP_XOR`]. The voice area
/// must span the full 16 MiB address space of the chip.
pub fn pcm2_swap(v: &[u8], value: usize) -> Vec<u8> {
    const SWAP_BITS: [u32; 24] = [
        23, 22, 21, 20, 19, 18, 17, 0, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 16,
    ];

    let (offset, addr_xor) = SWAP_ADDRS[value];
    let xor = &SWAP_XOR[value];

    let mut out = v.to_vec();
    for i in 0..v.len().min(0x1000000) {
        let j = bitswap_idx(i, &SWAP_BITS) ^ addr_xor;
        let d = (i + offset) & 0xffffff;
        out[j] = v[d] ^ xor[j & 7];
    }
    out
}
