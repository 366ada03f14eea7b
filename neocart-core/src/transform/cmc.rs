//! CMC42/CMC50 graphics, fix-layer and audio decryption.
//!
//! Both chip generations scramble the sprite ROMs the same way: a
//! table-driven XOR over each longword's byte pairs followed by a
//! table-driven address-line XOR. They differ only in their internal
//! tables and, for the CMC50, the additional audio CPU scramble. The
//! table contents below are transcriptions of the chip behaviour; any
//! change to them must be validated against known-good decrypted dumps.

use crate::bits::bitswap16;

/// The internal table set of one CMC chip generation.
struct GfxTables {
    type0_t03: &'static [u8; 256],
    type0_t12: &'static [u8; 256],
    type1_t03: &'static [u8; 256],
    type1_t12: &'static [u8; 256],
    address_8_15_xor1: &'static [u8; 256],
    address_8_15_xor2: &'static [u8; 256],
    address_16_23_xor1: &'static [u8; 256],
    address_16_23_xor2: &'static [u8; 256],
    address_0_7_xor: &'static [u8; 256],
}

static CMC42: GfxTables = GfxTables {
    type0_t03: &CMC42_TYPE0_T03,
    type0_t12: &CMC42_TYPE0_T12,
    type1_t03: &CMC42_TYPE1_T03,
    type1_t12: &CMC42_TYPE1_T12,
    address_8_15_xor1: &CMC42_ADDRESS_8_15_XOR1,
    address_8_15_xor2: &CMC42_ADDRESS_8_15_XOR2,
    address_16_23_xor1: &CMC42_ADDRESS_16_23_XOR1,
    address_16_23_xor2: &CMC42_ADDRESS_16_23_XOR2,
    address_0_7_xor: &CMC42_ADDRESS_0_7_XOR,
};

static CMC50: GfxTables = GfxTables {
    type0_t03: &CMC50_TYPE0_T03,
    type0_t12: &CMC50_TYPE0_T12,
    type1_t03: &CMC50_TYPE1_T03,
    type1_t12: &CMC50_TYPE1_T12,
    address_8_15_xor1: &CMC50_ADDRESS_8_15_XOR1,
    address_8_15_xor2: &CMC50_ADDRESS_8_15_XOR2,
    address_16_23_xor1: &CMC50_ADDRESS_16_23_XOR1,
    address_16_23_xor2: &CMC50_ADDRESS_16_23_XOR2,
    address_0_7_xor: &CMC50_ADDRESS_0_7_XOR,
};

/// Decrypt a CMC42-protected sprite area with the per-title XOR byte.
pub fn cmc42_gfx(c: &[u8], xor: u8) -> Vec<u8> {
    gfx_decrypt(&CMC42, c, xor)
}

/// Decrypt a CMC50-protected sprite area with the per-title XOR byte.
pub fn cmc50_gfx(c: &[u8], xor: u8) -> Vec<u8> {
    gfx_decrypt(&CMC50, c, xor)
}

fn decrypt_pair(
    t: &GfxTables,
    c0: u8,
    c1: u8,
    base: usize,
    table0hi: &[u8; 256],
    table0lo: &[u8; 256],
    table1: &[u8; 256],
    invert: bool,
) -> (u8, u8) {
    let tmp = table1[(base ^ usize::from(t.address_0_7_xor[(base >> 8) & 0xff])) & 0xff];
    let xor0 = (table0hi[(base >> 8) & 0xff] & 0xfe) | (tmp & 0x01);
    let xor1 = (tmp & 0xfe) | (table0lo[(base >> 8) & 0xff] & 0x01);

    if invert {
        (c1 ^ xor0, c0 ^ xor1)
    } else {
        (c0 ^ xor0, c1 ^ xor1)
    }
}

fn gfx_decrypt(t: &GfxTables, rom: &[u8], extra_xor: u8) -> Vec<u8> {
    let size = rom.len();
    let mut buf = vec![0u8; size];

    // Data lines.
    for rpos in 0..size / 4 {
        let (b0, b1) = decrypt_pair(
            t,
            rom[4 * rpos],
            rom[4 * rpos + 1],
            rpos,
            t.type0_t03,
            t.type0_t12,
            t.type1_t03,
            (rpos >> 8) & 1 != 0,
        );
        let (b2, b3) = decrypt_pair(
            t,
            rom[4 * rpos + 2],
            rom[4 * rpos + 3],
            rpos,
            t.type0_t12,
            t.type0_t03,
            t.type1_t12,
            ((rpos >> 16) ^ usize::from(t.address_16_23_xor2[(rpos >> 8) & 0xff])) & 1 != 0,
        );
        buf[4 * rpos..4 * rpos + 4].copy_from_slice(&[b0, b1, b2, b3]);
    }

    // Address lines.
    let mut out = vec![0u8; size];
    for rpos in 0..size / 4 {
        let mut baser = rpos ^ usize::from(extra_xor);

        baser ^= usize::from(t.address_8_15_xor1[(baser >> 16) & 0xff]) << 8;
        baser ^= usize::from(t.address_8_15_xor2[baser & 0xff]) << 8;
        baser ^= usize::from(t.address_16_23_xor1[baser & 0xff]) << 16;
        baser ^= usize::from(t.address_16_23_xor2[(baser >> 8) & 0xff]) << 16;
        baser ^= usize::from(t.address_0_7_xor[(baser >> 8) & 0xff]);

        if size == 0x3000000 {
            // preisle2's board decodes 32 MiB and 16 MiB banks separately.
            if rpos < 0x2000000 / 4 {
                baser &= 0x2000000 / 4 - 1;
            } else {
                baser = 0x2000000 / 4 + (baser & (0x1000000 / 4 - 1));
            }
        } else {
            baser &= size / 4 - 1;
        }

        out[4 * rpos..4 * rpos + 4].copy_from_slice(&buf[4 * baser..4 * baser + 4]);
    }

    out
}

/// Extract the fix layer from a decrypted sprite area. The CMC maps the S
/// tiles onto scattered sprite bytes; `len` is the nominal fix-layer size
/// from the catalogue.
pub fn cmc_sfix(sprites: &[u8], len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    for (i, b) in out.iter_mut().enumerate() {
        *b = sprites[(i & !0x1f) + ((i & 7) << 2) + ((!i & 8) >> 2) + ((i & 0x10) >> 4)];
    }
    out
}

/// Decrypt a CMC50 audio CPU ROM (a gather over the scrambled address
/// space; the image must span the chip's full 512 KiB).
pub fn cmc50_m1(m: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; m.len()];
    for (i, b) in out.iter_mut().enumerate() {
        *b = m[m1_address_scramble(i)];
    }
    out
}

fn m1_address_scramble(address: usize) -> usize {
    // Per-bank address permutations.
    const P1: [[u32; 16]; 8] = [
        [15, 14, 10, 7, 1, 2, 3, 8, 0, 12, 11, 13, 6, 9, 5, 4],
        [7, 1, 8, 11, 15, 9, 2, 3, 5, 13, 4, 14, 10, 0, 6, 12],
        [8, 6, 14, 3, 10, 7, 15, 1, 4, 0, 2, 5, 13, 11, 9, 12],
        [2, 8, 15, 9, 3, 4, 11, 7, 13, 6, 0, 10, 1, 12, 14, 5],
        [1, 13, 6, 15, 2, 11, 5, 3, 9, 14, 12, 0, 7, 10, 8, 4],
        [11, 15, 3, 4, 7, 0, 9, 2, 6, 10, 12, 1, 8, 14, 13, 5],
        [10, 5, 13, 8, 6, 15, 1, 2, 0, 3, 4, 9, 12, 14, 7, 11],
        [2, 9, 12, 3, 8, 14, 0, 6, 4, 13, 7, 15, 10, 1, 5, 11],
    ];

    let block = (address >> 16) & 7;
    let mut aux = (address & 0xffff) as u16;

    aux ^= bitswap16(0x9c43, &[12, 0, 2, 4, 8, 15, 7, 13, 10, 1, 3, 6, 11, 9, 14, 5]);
    aux = bitswap16(aux, &P1[block]);
    // Cross-byte XOR rounds: each half is rewritten from the other, so the
    // scramble stays a bijection over the bank.
    aux ^= u16::from(M1_ADDRESS_0_7_XOR[usize::from(aux >> 8)]);
    aux ^= u16::from(M1_ADDRESS_8_15_XOR1[usize::from(aux & 0xff)]) << 8;
    aux = bitswap16(aux, &[7, 15, 14, 6, 5, 13, 12, 4, 11, 3, 10, 2, 9, 1, 8, 0]);
    aux ^= u16::from(M1_ADDRESS_8_15_XOR2[usize::from(aux & 0xff)]) << 8;

    (block << 16) | usize::from(aux)
}

#[rustfmt::skip]
static CMC42_TYPE0_T03: [u8; 256] = [
    0x0f, 0xfe, 0x21, 0xe4, 0x64, 0x66, 0xb7, 0x27, 0x92, 0x5a, 0x20, 0xad, 0x57, 0xf9, 0xcb, 0x13,
    0x8e, 0x6b, 0xf1, 0x7d, 0xb2, 0x91, 0x1f, 0x3c, 0xeb, 0x31, 0xfe, 0x2b, 0x96, 0x52, 0x93, 0xd2,
    0x5e, 0x6c, 0x7b, 0xe4, 0x89, 0x54, 0xa9, 0x11, 0xf7, 0x30, 0xf1, 0x73, 0x35, 0xb0, 0x54, 0xcf,
    0x25, 0x5b, 0xd5, 0x8a, 0xef, 0xf2, 0x8f, 0xeb, 0xee, 0x75, 0x52, 0xa2, 0x12, 0x16, 0xfb, 0x8c,
    0x00, 0x53, 0x06, 0x92, 0x90, 0x96, 0xd7, 0x04, 0xdf, 0x7c, 0xfa, 0x08, 0xa6, 0xbf, 0xd1, 0x73,
    0xc8, 0xd4, 0x44, 0x9a, 0x9f, 0x08, 0x8a, 0x17, 0x75, 0xd6, 0x58, 0xab, 0xe1, 0x8a, 0x38, 0x4e,
    0xb8, 0x66, 0xaf, 0x35, 0xe2, 0x6c, 0x99, 0x35, 0xd2, 0x9d, 0x4b, 0x06, 0xdf, 0x3e, 0x43, 0x29,
    0x62, 0xd3, 0xd1, 0x1c, 0x59, 0xd4, 0x91, 0x3a, 0x45, 0xc3, 0x1f, 0x6b, 0x6f, 0x5f, 0x36, 0xe7,
    0xc1, 0x6a, 0x65, 0xa4, 0x1a, 0xcd, 0xc4, 0x7a, 0x4e, 0x12, 0x07, 0x42, 0xa6, 0xee, 0xe4, 0x27,
    0xeb, 0xa5, 0x84, 0x7c, 0x56, 0x9c, 0xd3, 0xd3, 0x78, 0x9d, 0x17, 0x0b, 0x39, 0x3e, 0x80, 0x0b,
    0xea, 0xc3, 0x81, 0xe3, 0xf2, 0x1b, 0xe8, 0xc8, 0x09, 0x20, 0x53, 0x5e, 0x6d, 0xa9, 0x29, 0xcc,
    0x86, 0x86, 0x78, 0x2c, 0xec, 0xdc, 0x48, 0x50, 0x62, 0x76, 0x71, 0xcf, 0x1e, 0x61, 0x5f, 0xfd,
    0x53, 0xa4, 0x6f, 0xb3, 0x01, 0x79, 0x84, 0x9f, 0xe4, 0x9c, 0xad, 0x26, 0x07, 0x7c, 0x61, 0x89,
    0x4b, 0x97, 0x2f, 0x8f, 0xf4, 0xef, 0x91, 0xdc, 0xb0, 0xba, 0xf6, 0x5c, 0xca, 0x69, 0x15, 0x5a,
    0xca, 0x79, 0x2d, 0x4d, 0xec, 0x3e, 0x57, 0x23, 0x88, 0x04, 0xcf, 0x45, 0x0f, 0xc1, 0xc8, 0x7e,
    0xce, 0x5c, 0xd3, 0x50, 0x51, 0x71, 0xc4, 0x49, 0x56, 0xd1, 0xf5, 0x5d, 0xdf, 0x8d, 0x0a, 0x59,
];

#[rustfmt::skip]
static CMC42_TYPE0_T12: [u8; 256] = [
    0xc4, 0xf4, 0x27, 0x21, 0x01, 0x05, 0x3d, 0xae, 0x6b, 0x01, 0x87, 0xe6, 0x19, 0x6b, 0xe4, 0x8a,
    0x0d, 0x38, 0x48, 0xc5, 0xf0, 0xee, 0x59, 0x01, 0x7a, 0x57, 0xd2, 0xa6, 0x84, 0xc4, 0x5b, 0x92,
    0xcc, 0x30, 0x23, 0x59, 0x92, 0x6e, 0x79, 0x65, 0x13, 0xae, 0xd1, 0xe9, 0xaa, 0x2e, 0xae, 0x06,
    0xfe, 0x4a, 0x6c, 0x7e, 0x92, 0xff, 0xaf, 0xad, 0xb6, 0xeb, 0x9d, 0xad, 0x43, 0xf4, 0xea, 0xeb,
    0xab, 0x57, 0x34, 0x44, 0xc9, 0x85, 0x12, 0x91, 0x13, 0xe5, 0x52, 0x9d, 0xf3, 0xc5, 0xbb, 0x78,
    0x60, 0x47, 0x9c, 0x57, 0xd2, 0xca, 0x2e, 0x15, 0x79, 0x07, 0xc6, 0xe0, 0x87, 0x64, 0x13, 0x23,
    0x65, 0xd6, 0xec, 0xac, 0x1f, 0x70, 0xab, 0x6a, 0x17, 0xa4, 0x57, 0xd0, 0xae, 0xa9, 0x87, 0x29,
    0xc4, 0xaa, 0x2f, 0x0a, 0xdc, 0x6d, 0x24, 0xf1, 0x49, 0x00, 0x72, 0xbf, 0x7f, 0x42, 0x13, 0xda,
    0x12, 0x38, 0x30, 0x54, 0x94, 0x01, 0x2f, 0xbe, 0xc8, 0x94, 0xdf, 0xfc, 0xc0, 0x2f, 0x8a, 0x62,
    0xe1, 0xb7, 0x54, 0x72, 0xe6, 0x72, 0xb7, 0x90, 0x9d, 0xcc, 0xa9, 0xd9, 0xf9, 0x66, 0x81, 0xad,
    0x80, 0x0f, 0x9f, 0xb5, 0xcf, 0x8d, 0xe3, 0x96, 0x70, 0xbb, 0x4f, 0xab, 0xaf, 0x8b, 0x4d, 0x04,
    0xf0, 0x21, 0xdb, 0x25, 0xb0, 0xc0, 0x5d, 0x16, 0xf3, 0x85, 0xf9, 0x7b, 0x96, 0xed, 0xc0, 0xc0,
    0xc3, 0x59, 0xe0, 0x33, 0xbf, 0x70, 0xd8, 0x5f, 0x56, 0xa0, 0x8b, 0xb4, 0xa7, 0xe5, 0xf1, 0x89,
    0x8f, 0x31, 0xe5, 0xd0, 0xd0, 0x7f, 0xbd, 0x4d, 0xd8, 0x6f, 0x1a, 0x70, 0xda, 0x0d, 0xd0, 0x55,
    0xc1, 0xa9, 0x6d, 0x0c, 0xdc, 0x39, 0x89, 0xa0, 0xf3, 0xcd, 0xf9, 0xe6, 0xd8, 0x4a, 0x21, 0xde,
    0x9c, 0x5e, 0x6c, 0x1b, 0xd0, 0xc4, 0xea, 0xf7, 0xfe, 0xd1, 0xe1, 0x2c, 0xbf, 0xa0, 0x62, 0xf9,
];

#[rustfmt::skip]
static CMC42_TYPE1_T03: [u8; 256] = [
    0x22, 0x41, 0x45, 0x7e, 0x36, 0xd3, 0xf3, 0x8c, 0x2d, 0xc8, 0x34, 0x75, 0xc3, 0x33, 0x2a, 0x05,
    0xcb, 0xaa, 0x2b, 0x14, 0xf1, 0xaf, 0x17, 0xfd, 0x12, 0x4d, 0x0e, 0x40, 0x6f, 0xc5, 0x60, 0x8b,
    0x65, 0x39, 0x78, 0x33, 0x55, 0xc9, 0x86, 0x9f, 0xe8, 0xc7, 0x62, 0xda, 0x74, 0x97, 0x9e, 0xf3,
    0xdf, 0xe3, 0xd1, 0x76, 0x0e, 0x14, 0xb4, 0xd9, 0x46, 0x0c, 0x9b, 0x45, 0xcc, 0x1c, 0x86, 0xa3,
    0x50, 0xae, 0x30, 0xcb, 0x7f, 0x2f, 0xf8, 0x50, 0x92, 0x72, 0xb3, 0x46, 0x5e, 0x96, 0xb6, 0xe7,
    0x0b, 0xc9, 0xcd, 0xdf, 0x33, 0xca, 0xa5, 0x21, 0x3d, 0xf2, 0x1b, 0xa2, 0x33, 0x1f, 0xef, 0xa0,
    0x07, 0xbc, 0x48, 0x5d, 0x8f, 0xf0, 0xe0, 0xd8, 0x34, 0x62, 0x95, 0x20, 0x85, 0x9b, 0x31, 0xe8,
    0xf5, 0x95, 0xd5, 0x6a, 0x12, 0x71, 0x40, 0x7f, 0x6d, 0x33, 0x6f, 0x4e, 0xaa, 0x78, 0xff, 0xa1,
    0xd0, 0xb6, 0xfc, 0x6f, 0xb8, 0x84, 0x50, 0x95, 0xa5, 0x2b, 0x97, 0x05, 0x52, 0xc7, 0xc2, 0xd5,
    0x5d, 0x09, 0xad, 0x46, 0xa8, 0xfd, 0xc9, 0xa3, 0xb7, 0xea, 0x3b, 0x03, 0x11, 0x5f, 0x20, 0x6d,
    0x59, 0xbd, 0xf4, 0x7e, 0x21, 0x62, 0xbb, 0xeb, 0x41, 0x12, 0xe0, 0x16, 0xcc, 0x3c, 0x95, 0x3c,
    0x69, 0x4c, 0xa7, 0x51, 0xa4, 0xf4, 0x2a, 0xc0, 0xc7, 0x9c, 0x00, 0x16, 0xfc, 0x82, 0x9d, 0xf7,
    0x45, 0x33, 0x3b, 0x66, 0x4e, 0x16, 0x4b, 0x07, 0xc8, 0x17, 0x52, 0xe1, 0x44, 0xd6, 0xea, 0x61,
    0xee, 0xf3, 0x8e, 0x62, 0xac, 0x20, 0xcc, 0x8e, 0x3c, 0x20, 0x37, 0x8b, 0x4f, 0x41, 0xfe, 0x65,
    0x93, 0xaf, 0xed, 0x9f, 0x75, 0x44, 0xc8, 0xf2, 0x6b, 0x8b, 0x0c, 0xb5, 0xb5, 0xc2, 0xb2, 0xf8,
    0xf1, 0x48, 0x2a, 0x15, 0x4c, 0x5c, 0x4a, 0x63, 0xd8, 0x14, 0x91, 0x33, 0x06, 0xb4, 0x8a, 0xdd,
];

#[rustfmt::skip]
static CMC42_TYPE1_T12: [u8; 256] = [
    0xf3, 0x86, 0x7a, 0x0e, 0x03, 0xeb, 0x0b, 0x2a, 0x88, 0x9d, 0xa7, 0xae, 0xf5, 0x72, 0xca, 0xee,
    0x87, 0x70, 0x99, 0xf9, 0x45, 0x66, 0xae, 0x5b, 0xc9, 0x48, 0x49, 0xba, 0xc5, 0x48, 0x63, 0xc6,
    0x6a, 0x15, 0xf0, 0xb5, 0xee, 0xee, 0x26, 0xae, 0x06, 0x80, 0x74, 0xc7, 0x6d, 0x15, 0x20, 0x59,
    0xd4, 0x1a, 0xb8, 0xb2, 0x9f, 0x3d, 0x68, 0x6b, 0x95, 0xb7, 0xc2, 0x4a, 0x03, 0x1b, 0x7f, 0xe6,
    0x61, 0x3e, 0xab, 0x76, 0x84, 0xe3, 0x4b, 0xb7, 0x36, 0x46, 0x35, 0x65, 0x07, 0x51, 0x0f, 0x88,
    0xf9, 0x13, 0x2a, 0x55, 0x09, 0xd1, 0x78, 0x7f, 0xd1, 0xef, 0x2b, 0x7c, 0x62, 0x5f, 0x34, 0xbd,
    0x5a, 0xfd, 0x90, 0x77, 0xf6, 0x53, 0xe5, 0x55, 0x46, 0x69, 0xd6, 0xa2, 0x82, 0xb7, 0xb4, 0xae,
    0x18, 0xec, 0x8c, 0x0e, 0xfd, 0x6b, 0xe8, 0x25, 0x64, 0xc8, 0xef, 0x42, 0x95, 0x6c, 0x75, 0x6d,
    0x40, 0xf0, 0x3b, 0x0f, 0xc6, 0x05, 0x9d, 0x55, 0xc0, 0x54, 0xad, 0x52, 0x51, 0x43, 0x56, 0x0f,
    0xe2, 0x5d, 0x14, 0x81, 0x63, 0xe7, 0xfa, 0xb7, 0x44, 0x8e, 0xec, 0x3a, 0xcc, 0xcf, 0x30, 0x58,
    0x51, 0xd3, 0xf0, 0x1b, 0x7e, 0x6f, 0x44, 0xbe, 0x92, 0x65, 0xf4, 0x09, 0x5c, 0x81, 0x33, 0x87,
    0x48, 0x74, 0xc1, 0x30, 0x74, 0x1d, 0x82, 0x90, 0x53, 0xaf, 0x4d, 0xcc, 0xd1, 0xbf, 0xcd, 0x93,
    0x1a, 0xd6, 0xa2, 0xb5, 0x30, 0x06, 0x40, 0xa0, 0x97, 0xc8, 0xe5, 0xe7, 0x08, 0x25, 0x11, 0xad,
    0x0b, 0x80, 0x1e, 0x96, 0xfc, 0xa1, 0x9f, 0xee, 0x56, 0xe6, 0xe1, 0x62, 0x9e, 0xa8, 0xe0, 0x06,
    0x4c, 0x9c, 0x6e, 0x00, 0x59, 0xe6, 0xdd, 0x24, 0xb8, 0xe4, 0x5d, 0x23, 0x61, 0x71, 0xbf, 0xe7,
    0x1d, 0x55, 0xf4, 0x8a, 0x64, 0xfa, 0x97, 0xf4, 0xc3, 0x03, 0xab, 0x9f, 0xf0, 0xf7, 0x0f, 0xad,
];

#[rustfmt::skip]
static CMC42_ADDRESS_8_15_XOR1: [u8; 256] = [
    0xa0, 0xba, 0xeb, 0x2a, 0xc6, 0xd1, 0x61, 0x94, 0x7a, 0xd1, 0xa7, 0x5f, 0xd8, 0x6e, 0xb2, 0x7c,
    0xf5, 0x83, 0x97, 0xe4, 0x6e, 0xcd, 0x8c, 0x73, 0xd5, 0x2d, 0x91, 0x2b, 0x4f, 0xc3, 0x9f, 0xda,
    0xdf, 0xd5, 0x40, 0x68, 0xf1, 0x5e, 0x34, 0x85, 0x06, 0x8c, 0x87, 0xd8, 0x37, 0x6f, 0x2e, 0xca,
    0x9d, 0xfb, 0xce, 0xae, 0xf6, 0x3b, 0x6f, 0xa3, 0x94, 0x15, 0x69, 0xe2, 0x3a, 0x05, 0x6e, 0xf3,
    0x47, 0x93, 0x70, 0xda, 0x8d, 0xc4, 0xa6, 0x7a, 0x62, 0xb7, 0x37, 0x84, 0xbd, 0x6c, 0x94, 0xc5,
    0x08, 0xa0, 0x95, 0x30, 0x2d, 0xd6, 0x58, 0x1b, 0x5a, 0x2e, 0xf3, 0xe3, 0x7b, 0xf6, 0xe9, 0x40,
    0xd9, 0x98, 0xe8, 0xd4, 0xd9, 0xbe, 0x9e, 0x9b, 0xfc, 0x49, 0x69, 0x47, 0xdf, 0x6b, 0x1c, 0x59,
    0x61, 0xec, 0x07, 0x78, 0xc0, 0xe1, 0xdf, 0x40, 0x52, 0x0b, 0xd2, 0xc8, 0x91, 0xd1, 0xf4, 0xe2,
    0xc9, 0x4d, 0x29, 0x0f, 0xcc, 0x99, 0x28, 0xb9, 0x4a, 0xee, 0xa8, 0xf7, 0x8b, 0x71, 0x27, 0xdc,
    0xd6, 0xb1, 0xb6, 0xc4, 0xec, 0x44, 0x49, 0x14, 0xa0, 0xed, 0x56, 0x20, 0x0c, 0x23, 0xec, 0x7a,
    0x5b, 0xe5, 0x19, 0x3d, 0xc3, 0x61, 0x12, 0x46, 0xba, 0x0f, 0x11, 0x97, 0x41, 0x32, 0xad, 0x30,
    0x9c, 0xde, 0xb5, 0x04, 0x53, 0x14, 0x50, 0x4d, 0x2d, 0x71, 0x9d, 0xc1, 0xd9, 0xf2, 0x94, 0x16,
    0x96, 0x37, 0x65, 0x68, 0x2b, 0x75, 0xf1, 0x2f, 0x7d, 0x01, 0x01, 0x07, 0x29, 0xd8, 0x05, 0xf3,
    0x7a, 0xc6, 0x5b, 0xbf, 0x7f, 0xf0, 0x22, 0x64, 0x6c, 0x99, 0xd5, 0x0c, 0x93, 0xc5, 0xdb, 0x5b,
    0x18, 0xf9, 0xa3, 0x15, 0x07, 0x61, 0x25, 0x90, 0x9e, 0x84, 0x9f, 0x8a, 0xde, 0x37, 0xf2, 0x1f,
    0xa4, 0x3d, 0x9d, 0xc5, 0x1e, 0x95, 0x19, 0x2e, 0xa8, 0x4e, 0x91, 0xfc, 0x67, 0x86, 0x28, 0x84,
];

#[rustfmt::skip]
static CMC42_ADDRESS_8_15_XOR2: [u8; 256] = [
    0x8c, 0x53, 0xc1, 0xca, 0x49, 0x35, 0x59, 0x4e, 0x4d, 0x5f, 0xde, 0x03, 0xdf, 0x7b, 0x7d, 0x83,
    0x8e, 0x08, 0x23, 0xa0, 0x0d, 0x37, 0x3a, 0x86, 0x5d, 0x48, 0xa1, 0xa2, 0x0d, 0xb8, 0x48, 0xa1,
    0xc7, 0x10, 0xf5, 0xb6, 0x29, 0xcd, 0xc3, 0x57, 0x11, 0x65, 0xe2, 0xce, 0x56, 0x95, 0xfb, 0xeb,
    0x1f, 0x09, 0x59, 0xc2, 0xf9, 0x0f, 0x0f, 0xd5, 0xcb, 0x88, 0x0f, 0xf9, 0xf6, 0xe7, 0x96, 0x7d,
    0x1a, 0xd8, 0x45, 0x4a, 0xa6, 0x47, 0x87, 0x7f, 0x82, 0x8b, 0x35, 0x91, 0xc0, 0x0f, 0x01, 0xf8,
    0xf5, 0x57, 0xab, 0x30, 0xe4, 0x12, 0xea, 0x37, 0xd2, 0x42, 0x81, 0x11, 0xb0, 0xd8, 0xa3, 0x0e,
    0xb0, 0xa4, 0x80, 0xeb, 0xc2, 0xcb, 0x9f, 0xe5, 0x4c, 0x3b, 0x10, 0xf1, 0x6e, 0x04, 0x54, 0x8c,
    0xb0, 0x1c, 0xe9, 0x32, 0x1b, 0xbb, 0x4c, 0xe4, 0x27, 0x9b, 0x47, 0x44, 0xc9, 0x75, 0x91, 0x34,
    0x75, 0xdc, 0xb3, 0x90, 0xac, 0xbc, 0xf5, 0xfe, 0x8c, 0x30, 0x7f, 0x24, 0x73, 0x68, 0xb9, 0x3c,
    0xeb, 0x04, 0xe5, 0xd3, 0x24, 0x72, 0xc0, 0xd8, 0xfe, 0x34, 0x43, 0x77, 0xf9, 0xc4, 0x83, 0x8a,
    0x9f, 0x5c, 0x35, 0xbd, 0xd1, 0x2c, 0x1e, 0x84, 0xce, 0x73, 0xc4, 0x91, 0x6b, 0x01, 0x49, 0xe4,
    0x14, 0x4c, 0xc9, 0x90, 0xef, 0x43, 0x83, 0x64, 0x92, 0x46, 0x93, 0xd3, 0x65, 0xb3, 0xba, 0x1d,
    0x36, 0x3f, 0x64, 0x1e, 0x28, 0x86, 0xa5, 0x18, 0xa8, 0x19, 0xd0, 0x5e, 0xe0, 0x8e, 0x61, 0x28,
    0xe6, 0x96, 0xb5, 0x9c, 0x2f, 0x3b, 0xdb, 0x18, 0x39, 0xee, 0xdd, 0xc3, 0x36, 0x17, 0xfc, 0xe4,
    0xc0, 0xb3, 0x42, 0x1c, 0xf5, 0x5d, 0xbb, 0x07, 0xdd, 0xf8, 0xb5, 0x41, 0xab, 0xa0, 0xdf, 0x6a,
    0xf9, 0x62, 0x96, 0x61, 0x00, 0xde, 0xdf, 0x77, 0x12, 0xa7, 0xef, 0x47, 0x56, 0xa2, 0xf8, 0x81,
];

#[rustfmt::skip]
static CMC42_ADDRESS_16_23_XOR1: [u8; 256] = [
    0x40, 0x06, 0x6d, 0xe2, 0x51, 0x72, 0xcb, 0x36, 0xe9, 0x54, 0xc9, 0x50, 0xca, 0x18, 0xd6, 0xe0,
    0xc4, 0xec, 0x35, 0xbe, 0xef, 0xcb, 0xcf, 0x1e, 0x92, 0x20, 0xc9, 0x5f, 0x2e, 0xbe, 0xa1, 0x2c,
    0x22, 0x13, 0xc6, 0x33, 0x08, 0xc8, 0x97, 0x96, 0x69, 0xd6, 0x1b, 0x7f, 0xc4, 0x6e, 0x7c, 0x0b,
    0x1c, 0x3c, 0x50, 0xad, 0xb5, 0x74, 0xcf, 0x2a, 0x01, 0xa7, 0x55, 0xa6, 0x99, 0xf1, 0x82, 0xee,
    0xf4, 0x4a, 0xb3, 0x88, 0xff, 0x27, 0x43, 0x0b, 0x35, 0xb8, 0xd1, 0xa5, 0x90, 0x9a, 0xa3, 0x8b,
    0xa5, 0x29, 0xab, 0x66, 0x7b, 0x06, 0x5f, 0x98, 0x81, 0x4f, 0x24, 0x12, 0x56, 0x4a, 0x50, 0x9a,
    0xf7, 0xa8, 0xbc, 0x9a, 0x7f, 0xdd, 0xa1, 0x95, 0xc1, 0xd3, 0x83, 0x4c, 0x25, 0x9d, 0xbd, 0xe1,
    0xe5, 0xae, 0x5e, 0x7e, 0xdc, 0xd0, 0x9b, 0x46, 0x2b, 0x18, 0x29, 0x6d, 0xb1, 0x32, 0xaf, 0x4d,
    0x31, 0xc4, 0x0f, 0x42, 0x5a, 0x8c, 0x85, 0x07, 0x5e, 0xaf, 0x5f, 0xff, 0x5e, 0x46, 0x2c, 0x6c,
    0x1c, 0xf2, 0x7f, 0x49, 0x7e, 0x01, 0x94, 0x81, 0x84, 0xb5, 0xf2, 0xd9, 0xc1, 0xe3, 0x2f, 0xa1,
    0xb2, 0x27, 0xc4, 0x5a, 0xf3, 0x13, 0xdc, 0xcd, 0xb0, 0x8f, 0xd9, 0xb3, 0x22, 0x92, 0x69, 0x47,
    0xa4, 0x37, 0x69, 0x13, 0x46, 0x91, 0xd7, 0x85, 0xbf, 0x40, 0x6a, 0xda, 0xbe, 0xad, 0xb9, 0x58,
    0x05, 0xb5, 0xbf, 0xcd, 0x25, 0xfa, 0xdb, 0xbf, 0x45, 0xb5, 0x30, 0xef, 0x5f, 0xaa, 0x2c, 0xa9,
    0x47, 0xa9, 0xe0, 0x1f, 0xf8, 0x82, 0x8f, 0x34, 0x56, 0xdb, 0x70, 0x2f, 0xb1, 0x77, 0xdc, 0x7e,
    0x75, 0xae, 0x80, 0x1a, 0x42, 0x76, 0x6d, 0x90, 0xb7, 0x17, 0xaf, 0x2e, 0x3c, 0xa2, 0xcf, 0x5a,
    0xb9, 0x7f, 0x3d, 0xf4, 0x16, 0xe4, 0xa3, 0x81, 0x08, 0x71, 0x5c, 0x15, 0xa5, 0x79, 0xd5, 0x9a,
];

#[rustfmt::skip]
static CMC42_ADDRESS_16_23_XOR2: [u8; 256] = [
    0x54, 0x73, 0xc3, 0x48, 0x48, 0x3f, 0xbc, 0x17, 0x03, 0x96, 0xb6, 0x5f, 0x8f, 0x33, 0xd4, 0x38,
    0x07, 0xc4, 0xea, 0x2d, 0xf3, 0xdf, 0xae, 0x65, 0xe6, 0xf4, 0x6e, 0x35, 0x0f, 0x36, 0x9f, 0xe0,
    0x0d, 0xc3, 0x7d, 0x2d, 0x1c, 0xdb, 0x53, 0x20, 0x9f, 0x97, 0x9e, 0x89, 0xff, 0x65, 0x23, 0xfb,
    0x00, 0x72, 0xbc, 0xda, 0x71, 0x97, 0x95, 0x23, 0x8f, 0x2d, 0x94, 0xe7, 0x9e, 0xfd, 0xe6, 0x62,
    0x5b, 0xc4, 0xbd, 0xe1, 0x54, 0xf3, 0x26, 0xf7, 0x59, 0xd8, 0x7d, 0x7e, 0x1e, 0x47, 0x30, 0x07,
    0x37, 0x8f, 0xd6, 0xeb, 0xcd, 0xab, 0x5f, 0x87, 0xd7, 0x66, 0xd9, 0x7b, 0x45, 0x2a, 0x45, 0x78,
    0xc4, 0x35, 0xb6, 0xf7, 0xe8, 0xec, 0x5f, 0xdf, 0xa0, 0x33, 0x66, 0xdb, 0x4d, 0xf2, 0x74, 0x1c,
    0x3f, 0x76, 0x85, 0x32, 0xff, 0x7c, 0x3c, 0xac, 0xe2, 0x2e, 0x14, 0x5f, 0x71, 0x1d, 0x4e, 0x49,
    0x37, 0xfc, 0x32, 0x48, 0xd7, 0x62, 0xc5, 0xc5, 0x78, 0x9e, 0x9e, 0xa4, 0x47, 0x8c, 0x39, 0x3f,
    0x11, 0x30, 0x74, 0x56, 0x7c, 0x31, 0xb9, 0xa7, 0x9b, 0x76, 0x49, 0xde, 0xba, 0xa7, 0x3d, 0x1a,
    0x8f, 0xbd, 0x07, 0xe0, 0x11, 0x73, 0x00, 0x8e, 0x72, 0x86, 0xd1, 0x9b, 0x3e, 0xb1, 0x03, 0xcb,
    0xf1, 0xa8, 0x4e, 0x97, 0xc5, 0x16, 0xbb, 0x01, 0x9d, 0xa4, 0x30, 0x11, 0x44, 0xed, 0x8d, 0x73,
    0x4c, 0xfc, 0x03, 0x47, 0x40, 0x18, 0xf9, 0x83, 0xee, 0xce, 0x4a, 0x4d, 0xd8, 0xdd, 0xc3, 0xbb,
    0xeb, 0x68, 0xc0, 0xd0, 0xd5, 0x11, 0x08, 0x73, 0x87, 0xb3, 0x41, 0x84, 0x48, 0xa1, 0x71, 0xb1,
    0x74, 0x17, 0xb4, 0x6c, 0x7d, 0xe3, 0x22, 0xb7, 0xbf, 0x8e, 0x7c, 0x8f, 0x3e, 0x25, 0xf2, 0xc3,
    0x38, 0x8e, 0xef, 0x93, 0xdd, 0xaa, 0x5d, 0x0a, 0x20, 0xe1, 0xc3, 0x12, 0x73, 0xd9, 0x1d, 0x06,
];

#[rustfmt::skip]
static CMC42_ADDRESS_0_7_XOR: [u8; 256] = [
    0x0c, 0xcc, 0x42, 0x10, 0x7d, 0x98, 0x8b, 0x89, 0x54, 0x3e, 0x83, 0x5b, 0xa7, 0x72, 0x10, 0xb8,
    0x2a, 0xc7, 0x5a, 0x55, 0xe5, 0xd4, 0xe1, 0x34, 0x23, 0x92, 0x0c, 0x17, 0xaf, 0x54, 0xca, 0xbc,
    0x48, 0xb5, 0x15, 0x3e, 0x41, 0x01, 0xa3, 0x9a, 0xff, 0xd4, 0xd2, 0x39, 0x1e, 0xcd, 0xa8, 0x81,
    0x1c, 0x04, 0x20, 0x6a, 0x36, 0x3d, 0xa5, 0x41, 0x6c, 0xde, 0x06, 0xb3, 0x5a, 0xb9, 0x89, 0x04,
    0xd5, 0xe9, 0x69, 0x49, 0x9d, 0x42, 0xc4, 0x65, 0xc1, 0x3f, 0x6c, 0x1e, 0x25, 0x75, 0x6c, 0xbf,
    0xa8, 0xc1, 0xbd, 0x4c, 0xcc, 0x00, 0x5e, 0xf1, 0x92, 0x24, 0x45, 0xb4, 0xeb, 0xda, 0xd3, 0x59,
    0xce, 0xd3, 0x4d, 0x93, 0x0c, 0xc1, 0x77, 0x5d, 0x81, 0x99, 0x43, 0x42, 0xe8, 0x65, 0x90, 0x59,
    0x91, 0x51, 0x61, 0x17, 0xe0, 0x9d, 0x7d, 0xfb, 0x2b, 0x59, 0xea, 0x91, 0xc8, 0x82, 0x33, 0xef,
    0xef, 0x97, 0x63, 0x21, 0x79, 0xe9, 0x28, 0xc5, 0x0e, 0x71, 0x48, 0x31, 0x28, 0xdb, 0xd4, 0x86,
    0xe6, 0x6f, 0xd9, 0xb5, 0x45, 0x6a, 0x22, 0xfa, 0xa0, 0x96, 0xdc, 0xb3, 0x3f, 0x2c, 0xc9, 0x79,
    0x7f, 0x9d, 0xb4, 0x5e, 0x7c, 0x78, 0xfc, 0xef, 0xfc, 0x8a, 0xcf, 0xda, 0x32, 0x6e, 0x13, 0x68,
    0x28, 0xab, 0xd2, 0x41, 0x8a, 0xf2, 0x3b, 0xc0, 0x85, 0x69, 0xad, 0x88, 0xbe, 0x69, 0xf0, 0x53,
    0xdd, 0x73, 0xd6, 0x57, 0x76, 0x9c, 0xe7, 0x0a, 0x94, 0x3e, 0x9a, 0x8e, 0xb8, 0x40, 0xcb, 0xc4,
    0x1e, 0x0c, 0xfd, 0xc1, 0xae, 0x57, 0x68, 0x7c, 0x30, 0x0a, 0x63, 0xc2, 0x30, 0x08, 0xf2, 0x14,
    0x4b, 0x7a, 0xb9, 0x13, 0x23, 0xf2, 0x09, 0xca, 0xcd, 0x62, 0x71, 0xf8, 0x39, 0xf3, 0xe9, 0x2f,
    0xca, 0xd8, 0xd3, 0xeb, 0x3a, 0x55, 0x24, 0x7d, 0xa1, 0xcd, 0x61, 0xf0, 0x5f, 0x67, 0xd9, 0x6e,
];

#[rustfmt::skip]
static CMC50_TYPE0_T03: [u8; 256] = [
    0x66, 0xc3, 0x1e, 0x25, 0xad, 0x2d, 0xaf, 0xab, 0x7e, 0x31, 0xec, 0x94, 0x40, 0xc5, 0x51, 0xa5,
    0xae, 0x8d, 0x6e, 0x0f, 0xad, 0x56, 0x25, 0x7b, 0x7f, 0x33, 0x74, 0xcb, 0xa0, 0x69, 0x85, 0x2f,
    0x5a, 0x16, 0x47, 0x0c, 0x83, 0x14, 0x0d, 0x6b, 0x51, 0x32, 0x1f, 0x5a, 0xc0, 0xca, 0xbf, 0x8a,
    0x63, 0x2f, 0xa1, 0x63, 0x0c, 0x8b, 0x36, 0xa2, 0x15, 0xdc, 0x6d, 0xd5, 0xfe, 0xdf, 0x20, 0x3f,
    0xb3, 0xed, 0x91, 0xda, 0xb2, 0x5d, 0x8f, 0xe7, 0xcf, 0x7d, 0x3c, 0xb0, 0x7d, 0xfd, 0xfd, 0x9b,
    0xbb, 0x72, 0x94, 0xb5, 0xbe, 0x68, 0xc1, 0x86, 0x44, 0x3c, 0x19, 0x33, 0x99, 0xc8, 0xb5, 0x26,
    0xd1, 0xeb, 0xcf, 0xde, 0xef, 0x34, 0xd7, 0xec, 0x7b, 0xce, 0xe6, 0x18, 0xd8, 0x5e, 0x93, 0xb9,
    0x23, 0x7b, 0x57, 0xb7, 0x38, 0x81, 0xb9, 0xd0, 0x92, 0x67, 0x30, 0x97, 0xf0, 0xc7, 0x70, 0x23,
    0x25, 0xa4, 0xe7, 0x5d, 0xcc, 0x5d, 0x47, 0xab, 0x45, 0x26, 0x5d, 0x03, 0x9d, 0x3f, 0x09, 0xf5,
    0x54, 0xc8, 0x4a, 0x50, 0x42, 0xec, 0x0d, 0x76, 0x57, 0x9f, 0xe0, 0x80, 0x95, 0xbb, 0x37, 0xf5,
    0xaf, 0x99, 0x06, 0x94, 0xac, 0x4b, 0x8e, 0x8f, 0x2b, 0xba, 0xd6, 0x0a, 0xc1, 0xdb, 0x45, 0x8c,
    0x52, 0x7b, 0x49, 0x31, 0x34, 0xe7, 0xf7, 0x99, 0x81, 0x8f, 0x8a, 0x12, 0xb0, 0x52, 0x35, 0xc0,
    0x3c, 0xc0, 0x7b, 0x81, 0x34, 0xb8, 0xe7, 0x2b, 0x88, 0x01, 0xd0, 0x4a, 0x66, 0xf7, 0xc7, 0x74,
    0x72, 0xc8, 0xb8, 0xdc, 0xe6, 0xee, 0x29, 0xf8, 0x03, 0x7c, 0xdc, 0x69, 0xba, 0xe2, 0x40, 0x4c,
    0x53, 0x51, 0x4d, 0x4d, 0x65, 0x99, 0x6d, 0x8b, 0x06, 0x35, 0x83, 0xf6, 0x31, 0xe1, 0x4f, 0x77,
    0x36, 0x2b, 0x3c, 0xbc, 0xb4, 0x88, 0x8f, 0x6b, 0x23, 0x29, 0x4c, 0xcb, 0x7c, 0xfd, 0x71, 0x76,
];

#[rustfmt::skip]
static CMC50_TYPE0_T12: [u8; 256] = [
    0xa6, 0x5a, 0xa3, 0x9a, 0x69, 0xa0, 0x51, 0x1c, 0xe3, 0x96, 0xff, 0xa6, 0xec, 0x50, 0x31, 0xb4,
    0x07, 0xf3, 0x21, 0xaf, 0x39, 0xe5, 0xf2, 0x24, 0x49, 0xa8, 0xa3, 0xd6, 0xfd, 0xad, 0x60, 0xb5,
    0x21, 0x38, 0x13, 0xee, 0x7a, 0x17, 0xf7, 0xad, 0xc7, 0xf2, 0x18, 0x2f, 0x12, 0xa3, 0xfd, 0xe3,
    0xab, 0x11, 0x13, 0x8e, 0x9d, 0xa1, 0xb3, 0x7f, 0xef, 0x3c, 0xcd, 0xda, 0xd1, 0x3f, 0x1f, 0x3d,
    0xd9, 0x9e, 0x3a, 0x10, 0x7e, 0x66, 0xf2, 0x0c, 0xae, 0xbc, 0xf0, 0xa8, 0xfd, 0x76, 0x21, 0xf2,
    0x20, 0xd7, 0x3a, 0x0a, 0x76, 0x75, 0x6b, 0x4a, 0x3e, 0xae, 0xe6, 0xae, 0xeb, 0x1c, 0xf4, 0x38,
    0xd2, 0x41, 0x81, 0x57, 0xce, 0x8d, 0x9c, 0x9a, 0x62, 0xf8, 0x9a, 0x67, 0x4b, 0xdb, 0xde, 0xf0,
    0xc6, 0x31, 0x95, 0x64, 0xb2, 0x96, 0xce, 0x96, 0x3b, 0x33, 0xcb, 0x40, 0x78, 0x87, 0x8f, 0xbe,
    0x0f, 0x10, 0x16, 0xed, 0x5b, 0x1b, 0x6d, 0x5b, 0x80, 0x4e, 0xf2, 0xac, 0x1e, 0x80, 0xab, 0xf1,
    0xbf, 0x04, 0x24, 0x4a, 0xfe, 0x70, 0xb4, 0x5b, 0xc0, 0x6e, 0x46, 0xdd, 0xc2, 0x69, 0xaf, 0xfe,
    0xaf, 0x4c, 0x7f, 0xf0, 0xd7, 0x4e, 0xaa, 0x26, 0xaa, 0xdc, 0x7a, 0xba, 0x16, 0x2d, 0x25, 0x21,
    0xe0, 0x35, 0x96, 0xfd, 0x1a, 0xd6, 0xec, 0xb0, 0xaf, 0xc6, 0xb2, 0xe6, 0x23, 0x66, 0xaa, 0x67,
    0x68, 0x03, 0x31, 0xda, 0x1b, 0x22, 0x93, 0xea, 0xb3, 0x16, 0xd9, 0x0a, 0x16, 0xd2, 0x09, 0x3f,
    0x1b, 0xbc, 0x46, 0xcb, 0xb2, 0x17, 0xc5, 0xd9, 0x70, 0xaa, 0xe0, 0xc8, 0x3b, 0x31, 0xf9, 0xb0,
    0xa9, 0x57, 0xd2, 0x66, 0x94, 0xac, 0x7c, 0x19, 0x06, 0xa0, 0x3e, 0x8c, 0xa8, 0xf5, 0x92, 0x52,
    0xe6, 0x17, 0x26, 0x8b, 0x5d, 0x74, 0xe7, 0xb2, 0x0f, 0x4b, 0xf4, 0x24, 0x1b, 0x17, 0x87, 0x4c,
];

#[rustfmt::skip]
static CMC50_TYPE1_T03: [u8; 256] = [
    0x6f, 0xd9, 0xc6, 0x41, 0xdd, 0x4a, 0x22, 0x3d, 0x7b, 0xee, 0x56, 0x53, 0x27, 0xa3, 0x99, 0x38,
    0x55, 0x71, 0xc4, 0x86, 0xda, 0x9d, 0xff, 0xfc, 0x6b, 0x07, 0xb3, 0x28, 0xd8, 0x79, 0xa6, 0x75,
    0x9f, 0xac, 0x4e, 0x2c, 0x74, 0x72, 0x63, 0x9e, 0x49, 0x0c, 0x27, 0x2e, 0x46, 0xd2, 0x1f, 0x0d,
    0x83, 0x5c, 0xdd, 0x2a, 0x26, 0x29, 0x78, 0xfc, 0xbb, 0x74, 0x2f, 0x9a, 0xa2, 0x6a, 0xc1, 0xbe,
    0x3d, 0x27, 0x7a, 0xbb, 0x04, 0x4d, 0x9d, 0x3e, 0xac, 0x89, 0xec, 0x35, 0x2d, 0x85, 0xff, 0x7f,
    0x93, 0x71, 0x7e, 0x6e, 0xdd, 0x00, 0x67, 0x7c, 0x01, 0xc7, 0x0b, 0x0a, 0x8d, 0xde, 0x87, 0x5d,
    0x06, 0x6c, 0x4e, 0xd8, 0xdb, 0xa1, 0xe2, 0xd3, 0xb8, 0x04, 0xb9, 0x53, 0xd0, 0xf1, 0x25, 0xf8,
    0x68, 0x8c, 0xbb, 0x86, 0x5a, 0x81, 0x77, 0xf8, 0x9f, 0xae, 0x10, 0xcd, 0xc6, 0x4b, 0x80, 0x23,
    0x68, 0x06, 0xc7, 0x78, 0xa4, 0x32, 0x77, 0xb5, 0x68, 0x36, 0x7e, 0x35, 0xfe, 0xa0, 0xbc, 0x17,
    0xb6, 0x67, 0x9a, 0xa8, 0x2f, 0xc4, 0xf6, 0x7a, 0x4f, 0x56, 0x91, 0x9c, 0x99, 0x5a, 0xdd, 0xca,
    0xa6, 0x89, 0x91, 0x56, 0xc1, 0x39, 0x0d, 0x66, 0x91, 0x88, 0x0c, 0x97, 0x14, 0x27, 0xf7, 0xd2,
    0xa1, 0xef, 0x1f, 0x53, 0x00, 0x09, 0x64, 0x38, 0x37, 0x75, 0x32, 0xd6, 0x81, 0xe3, 0xc1, 0xf9,
    0x2b, 0x0b, 0x1b, 0x0a, 0xc5, 0xdc, 0xb8, 0xcb, 0x4a, 0x5f, 0x64, 0x15, 0x2a, 0x13, 0xcb, 0xfe,
    0x31, 0x3d, 0x54, 0x38, 0x8b, 0xbb, 0x42, 0xa1, 0xfa, 0xee, 0x34, 0xae, 0x98, 0x6a, 0x1a, 0xf5,
    0x18, 0xab, 0xc5, 0xf2, 0x35, 0x55, 0x03, 0xa3, 0x9f, 0x19, 0x57, 0x08, 0x54, 0x3a, 0xb3, 0x95,
    0x47, 0x11, 0x2e, 0x84, 0xf2, 0x63, 0x26, 0xf6, 0x1b, 0xc9, 0x37, 0x0d, 0x49, 0xd3, 0x53, 0x24,
];

#[rustfmt::skip]
static CMC50_TYPE1_T12: [u8; 256] = [
    0x94, 0x93, 0xff, 0x81, 0xbe, 0xad, 0x7c, 0xf0, 0x4c, 0x18, 0x82, 0x7c, 0x2e, 0xd6, 0x5f, 0x45,
    0x63, 0x1a, 0xb2, 0x6a, 0xad, 0x37, 0xf0, 0x14, 0x26, 0x46, 0x0c, 0x8a, 0xf4, 0x02, 0xf1, 0x40,
    0x47, 0x90, 0x54, 0x8f, 0x5f, 0x95, 0x28, 0xc1, 0x15, 0xfa, 0x8d, 0x6e, 0xfb, 0x3f, 0x9e, 0x08,
    0xe3, 0xfd, 0x20, 0x9b, 0x50, 0xfa, 0x5e, 0xdc, 0xeb, 0xb1, 0x8b, 0x2e, 0xc8, 0x21, 0x3a, 0xfb,
    0x08, 0x5c, 0x55, 0x1f, 0x5d, 0x9e, 0x3e, 0xab, 0x6e, 0x04, 0x49, 0xa7, 0x4e, 0x70, 0x4a, 0xf9,
    0x8f, 0x47, 0x9c, 0x6b, 0x6a, 0xdb, 0xa6, 0x30, 0x5c, 0x61, 0x36, 0x62, 0xb8, 0x26, 0x06, 0xb1,
    0x5b, 0x71, 0x73, 0xc8, 0xe1, 0x6b, 0x98, 0x59, 0x57, 0xad, 0xde, 0x0d, 0xeb, 0x69, 0xdf, 0x1f,
    0x08, 0x86, 0xa4, 0xac, 0x70, 0x60, 0xc2, 0xcc, 0xb1, 0xbe, 0xbc, 0x27, 0xd1, 0x33, 0x15, 0x6e,
    0xa2, 0x33, 0xbd, 0xe8, 0x28, 0x48, 0xaf, 0x72, 0xe2, 0x12, 0x5f, 0x73, 0x83, 0xc4, 0x86, 0x64,
    0xeb, 0x3f, 0x72, 0x0c, 0x09, 0xe6, 0x22, 0xd3, 0xab, 0x43, 0xec, 0xb8, 0x26, 0xc2, 0xef, 0xbe,
    0x70, 0x31, 0xb2, 0x3c, 0x62, 0xcd, 0xcf, 0x53, 0x03, 0xd1, 0x17, 0x99, 0xf2, 0xbf, 0x34, 0xce,
    0xc7, 0xa1, 0xc0, 0xe7, 0x2e, 0x6b, 0x65, 0xf7, 0xd1, 0x33, 0x78, 0xc8, 0xce, 0x72, 0x2e, 0xca,
    0x18, 0xb0, 0x96, 0x48, 0x6b, 0x85, 0x38, 0x1f, 0x16, 0x24, 0x82, 0xe8, 0xd2, 0x3a, 0xbe, 0x77,
    0xdd, 0x22, 0x3a, 0x49, 0x47, 0xe3, 0x62, 0x66, 0x15, 0x13, 0x89, 0xae, 0x03, 0xce, 0x9a, 0x2d,
    0x7f, 0xcf, 0x6a, 0x2a, 0x59, 0xa3, 0x5c, 0x0e, 0x60, 0xa7, 0xf8, 0x6e, 0x8a, 0xe4, 0xc4, 0xb2,
    0xf2, 0xce, 0x51, 0x54, 0xec, 0x66, 0x61, 0x7a, 0xf4, 0x98, 0x62, 0x2f, 0x9f, 0x17, 0x38, 0x18,
];

#[rustfmt::skip]
static CMC50_ADDRESS_8_15_XOR1: [u8; 256] = [
    0xc9, 0xc4, 0xd5, 0xd7, 0x36, 0x1d, 0xcb, 0x85, 0xe2, 0x54, 0x5e, 0xea, 0xb3, 0x3c, 0x37, 0xd9,
    0x30, 0x28, 0x2b, 0x72, 0xf4, 0xae, 0x4d, 0x3a, 0xe2, 0xbd, 0x85, 0x6b, 0x38, 0x72, 0x10, 0xf3,
    0x1e, 0x73, 0xe3, 0xb2, 0xaf, 0x16, 0xea, 0x85, 0xfc, 0x1c, 0x22, 0x8b, 0x4c, 0x2b, 0xec, 0xf6,
    0x76, 0x52, 0xc8, 0x46, 0x0f, 0xf8, 0x3b, 0xc7, 0x1e, 0x84, 0xfa, 0x9b, 0x6f, 0xad, 0xa5, 0xa3,
    0xb2, 0xf2, 0x24, 0x6c, 0xb3, 0x67, 0x53, 0xae, 0xca, 0x77, 0xd9, 0x79, 0xf7, 0xc2, 0x7b, 0x9c,
    0x00, 0xe8, 0xae, 0x6c, 0xae, 0x67, 0x8f, 0xe1, 0xdf, 0xcc, 0x1f, 0x2f, 0x2b, 0x70, 0x92, 0xe9,
    0x9a, 0x9d, 0xa7, 0x5f, 0x06, 0x23, 0x6d, 0x1b, 0xf7, 0xa1, 0x13, 0x9f, 0x23, 0xbb, 0x66, 0x8d,
    0xe0, 0x9d, 0x42, 0x82, 0xad, 0xf7, 0xe2, 0x30, 0xfa, 0xd2, 0xde, 0x80, 0x6e, 0xc5, 0x4a, 0x00,
    0x61, 0xf8, 0xd0, 0x08, 0x86, 0x5a, 0x97, 0xbf, 0xec, 0x54, 0x3d, 0x53, 0x13, 0xca, 0x0a, 0x05,
    0xd6, 0xb1, 0xe1, 0x63, 0xcc, 0x0b, 0x39, 0x23, 0x7a, 0x3c, 0x53, 0xba, 0x9c, 0xc6, 0x4b, 0xfe,
    0x83, 0xd0, 0xcb, 0x59, 0xf7, 0x55, 0xae, 0xc8, 0xcc, 0x02, 0x99, 0xf4, 0xad, 0xf5, 0xc2, 0x7a,
    0xd7, 0x65, 0xb6, 0xde, 0xd7, 0x1a, 0x54, 0x3e, 0x06, 0xb9, 0x44, 0x62, 0xa4, 0x54, 0x2b, 0x62,
    0xcc, 0x3f, 0x8b, 0xf9, 0x65, 0x84, 0x9c, 0xba, 0xad, 0x89, 0x20, 0x99, 0xc1, 0x84, 0x65, 0x90,
    0x6e, 0x3d, 0xc8, 0x57, 0xd4, 0x09, 0x53, 0x8d, 0x7f, 0x1c, 0x55, 0xc0, 0x17, 0x33, 0x0c, 0x0d,
    0xb9, 0x56, 0x57, 0x09, 0x51, 0xd8, 0xf7, 0xbe, 0xb2, 0xe3, 0xdb, 0x22, 0xc2, 0x56, 0xa2, 0xcc,
    0x71, 0x05, 0xd5, 0xe0, 0xe9, 0x24, 0xb3, 0x43, 0xf3, 0xd9, 0x4c, 0x51, 0xcf, 0x17, 0x1b, 0xae,
];

#[rustfmt::skip]
static CMC50_ADDRESS_8_15_XOR2: [u8; 256] = [
    0x02, 0x51, 0x88, 0x07, 0x94, 0x0c, 0x61, 0x55, 0x2c, 0x98, 0x81, 0x18, 0x96, 0xcd, 0xc9, 0xbe,
    0x3f, 0x43, 0x5e, 0xb8, 0x9b, 0x41, 0x2a, 0xed, 0x59, 0xdb, 0x1e, 0x7b, 0x0e, 0x0e, 0xb1, 0x29,
    0x4f, 0xd7, 0xaf, 0xbb, 0x42, 0x53, 0x3c, 0x71, 0x83, 0x5d, 0x68, 0x66, 0xb2, 0x72, 0xa4, 0x67,
    0xd8, 0x5a, 0x3d, 0x43, 0x30, 0x85, 0x53, 0xe4, 0x7e, 0x9f, 0x35, 0x2c, 0xf9, 0xc1, 0xf0, 0x1c,
    0xcd, 0xcd, 0x87, 0x34, 0xe1, 0xad, 0x46, 0xde, 0xe4, 0xd0, 0x9f, 0xd8, 0xf7, 0x5a, 0xd7, 0xb1,
    0x12, 0x4c, 0x3b, 0x63, 0xf4, 0x26, 0x65, 0xf9, 0x86, 0x84, 0x59, 0x2d, 0xec, 0xa2, 0x30, 0x2f,
    0x48, 0xbe, 0x4c, 0x7f, 0xba, 0x4e, 0x9b, 0x1f, 0xfd, 0x47, 0x58, 0x3e, 0x74, 0xc8, 0x77, 0x21,
    0x0f, 0x6b, 0xea, 0xee, 0x0a, 0xcd, 0xe6, 0x18, 0xec, 0x6b, 0x10, 0x88, 0x11, 0xa3, 0x9e, 0xc5,
    0x0e, 0xbd, 0x75, 0xa3, 0xb0, 0x2a, 0x43, 0xc5, 0x9d, 0xf9, 0xd9, 0xfd, 0x4f, 0x87, 0xae, 0x3e,
    0xf3, 0x56, 0x7e, 0x38, 0xe1, 0x5b, 0x84, 0xdc, 0xb8, 0x72, 0xb2, 0x9c, 0xac, 0x4f, 0x02, 0xfa,
    0xab, 0x56, 0x54, 0x27, 0x1f, 0x9c, 0xba, 0x04, 0x12, 0xac, 0x1d, 0x9e, 0xb3, 0x53, 0xbe, 0xad,
    0xd3, 0x8e, 0x46, 0xc1, 0xd1, 0x43, 0xd8, 0xdc, 0xe0, 0xac, 0x49, 0x13, 0x57, 0x29, 0x2f, 0x8f,
    0x3b, 0xf7, 0xaa, 0x6f, 0x4a, 0x62, 0xfa, 0x80, 0xce, 0x50, 0xf5, 0xdc, 0x5a, 0xc9, 0xaf, 0x37,
    0x0f, 0x6c, 0x79, 0xda, 0xa8, 0x90, 0x73, 0xba, 0x12, 0x34, 0xbb, 0x05, 0x1d, 0xe1, 0x79, 0xda,
    0xa1, 0x95, 0x67, 0x63, 0xac, 0x16, 0x88, 0x3d, 0x4f, 0x6b, 0x33, 0x0f, 0xea, 0xe4, 0xe4, 0xca,
    0xb1, 0x1d, 0x71, 0x9b, 0x3b, 0x22, 0x2e, 0x2a, 0x54, 0xe9, 0x16, 0x34, 0xdb, 0x08, 0xca, 0x1a,
];

#[rustfmt::skip]
static CMC50_ADDRESS_16_23_XOR1: [u8; 256] = [
    0xa0, 0xdc, 0x8e, 0xf9, 0x50, 0xf4, 0xc3, 0xe8, 0x1e, 0x2f, 0xc7, 0x30, 0x9f, 0x08, 0x3f, 0xad,
    0xbf, 0x71, 0x6d, 0x24, 0xaa, 0xe5, 0x0a, 0x60, 0x72, 0x02, 0xa4, 0x1c, 0x2a, 0x61, 0xb5, 0xce,
    0x78, 0xa3, 0x26, 0xca, 0xea, 0x97, 0x58, 0x58, 0x1c, 0xd4, 0x4b, 0xb7, 0x19, 0x5a, 0x11, 0x2d,
    0x7b, 0x44, 0x00, 0x76, 0x05, 0x3b, 0x04, 0x26, 0x4a, 0x75, 0xea, 0x88, 0x9c, 0xa1, 0x80, 0x4a,
    0xb2, 0xca, 0x85, 0x37, 0xc7, 0x23, 0x30, 0xbe, 0xeb, 0xbe, 0xd5, 0x18, 0x86, 0x31, 0x43, 0x98,
    0x45, 0x2f, 0x5c, 0x3f, 0xd2, 0x75, 0x5c, 0x94, 0xfb, 0xcb, 0x91, 0xab, 0xbb, 0xc6, 0xa7, 0x35,
    0xf3, 0xe5, 0x1e, 0x18, 0xb5, 0x87, 0xf6, 0x31, 0x5b, 0x3e, 0xef, 0xc0, 0x72, 0x3b, 0x66, 0xa8,
    0x68, 0x32, 0x70, 0xa3, 0x1d, 0x90, 0x55, 0x36, 0xdd, 0xe8, 0x0e, 0x24, 0x87, 0x50, 0x02, 0x8c,
    0xaa, 0x5f, 0x73, 0xba, 0x8a, 0x8b, 0x35, 0xd2, 0x8f, 0xeb, 0x1f, 0x08, 0x94, 0x30, 0x21, 0xb2,
    0x00, 0x3e, 0x1f, 0xce, 0x5b, 0x41, 0x2c, 0x93, 0xc6, 0x10, 0x44, 0x2a, 0x82, 0x26, 0xbd, 0x08,
    0xe9, 0x50, 0xe2, 0x94, 0x33, 0xd9, 0xe8, 0xe1, 0x4a, 0xc0, 0xa2, 0x3c, 0xed, 0x63, 0x12, 0xbc,
    0xfc, 0x47, 0x3c, 0xda, 0xa3, 0xb2, 0xe7, 0x28, 0x57, 0xa6, 0xbd, 0x65, 0xc4, 0x2a, 0x5f, 0x65,
    0xbd, 0x30, 0x81, 0x65, 0xbe, 0x71, 0x07, 0x21, 0xfc, 0x65, 0xcf, 0x9e, 0x85, 0xcf, 0x9b, 0x20,
    0x99, 0x7d, 0xd9, 0x5f, 0x55, 0x67, 0xd5, 0x9c, 0x51, 0x3c, 0x29, 0x96, 0x77, 0xc2, 0xe8, 0x34,
    0xb4, 0xdc, 0x3c, 0x15, 0x91, 0x5b, 0xe9, 0x52, 0xc2, 0xa9, 0x5b, 0x80, 0x60, 0x46, 0x67, 0x95,
    0x91, 0xb9, 0xa6, 0x0e, 0x48, 0x71, 0x34, 0xe1, 0x73, 0xe3, 0xb9, 0x89, 0xf0, 0x78, 0x10, 0x8c,
];

#[rustfmt::skip]
static CMC50_ADDRESS_16_23_XOR2: [u8; 256] = [
    0xd6, 0x12, 0x96, 0x04, 0x19, 0xba, 0xf4, 0xd8, 0x5f, 0x85, 0xd4, 0x87, 0x5b, 0xa9, 0x7c, 0xde,
    0xe2, 0x0e, 0x9c, 0x69, 0x9e, 0x1a, 0xa4, 0xd1, 0x9f, 0x01, 0x5c, 0x07, 0xec, 0xa5, 0x7a, 0x67,
    0x6f, 0xc5, 0x16, 0x53, 0x39, 0x41, 0xb0, 0xe2, 0xae, 0x58, 0x69, 0xd5, 0xae, 0xcd, 0x3d, 0x61,
    0xd5, 0x5a, 0xa4, 0x6f, 0x99, 0x47, 0xa7, 0xb8, 0xb0, 0x43, 0xd4, 0xfe, 0xa5, 0xda, 0x3f, 0x72,
    0xda, 0xcd, 0x12, 0x4d, 0x02, 0x88, 0x79, 0x9a, 0x4c, 0xba, 0xf2, 0xa7, 0x06, 0xfc, 0xe6, 0x34,
    0xef, 0xf2, 0x02, 0x80, 0x1e, 0x6e, 0x92, 0x11, 0x6e, 0x86, 0x99, 0xcc, 0xf9, 0xd8, 0x53, 0xb2,
    0x69, 0x09, 0x7f, 0x20, 0x0f, 0x4b, 0xcc, 0x76, 0x9b, 0x45, 0x9b, 0xb1, 0xba, 0x83, 0x9a, 0x9d,
    0x2b, 0xb5, 0xbf, 0x34, 0x52, 0x6d, 0x6c, 0x95, 0xa7, 0xaf, 0x8c, 0xab, 0x9c, 0x6f, 0x7f, 0xd3,
    0xa2, 0xd2, 0x04, 0x51, 0x40, 0x97, 0x99, 0x29, 0x34, 0x95, 0x41, 0xf7, 0x92, 0xb8, 0x4c, 0x00,
    0x59, 0x3d, 0xff, 0xaf, 0x82, 0x0c, 0xe7, 0x53, 0x2d, 0xc7, 0xe4, 0x81, 0x86, 0x16, 0x05, 0x0e,
    0x2a, 0xb7, 0x6a, 0x2b, 0x69, 0x7f, 0xc0, 0x6a, 0xb3, 0xc6, 0x0d, 0x14, 0xc5, 0x4a, 0x03, 0xec,
    0xab, 0x02, 0x09, 0x62, 0xe0, 0x6c, 0x36, 0xb5, 0xd2, 0xeb, 0xf1, 0x9f, 0x6c, 0xae, 0xfe, 0x33,
    0xcc, 0xe3, 0x1d, 0xaa, 0xdb, 0x36, 0xa4, 0x91, 0x79, 0x85, 0x57, 0xcb, 0xc5, 0x36, 0x45, 0x32,
    0x7d, 0xbf, 0x81, 0x73, 0xb5, 0x83, 0xdd, 0x0b, 0x7b, 0x6d, 0xa3, 0x5c, 0x06, 0xb6, 0xa4, 0xfd,
    0x4c, 0x82, 0xdc, 0x62, 0x94, 0x5e, 0xb4, 0x41, 0xaf, 0x4d, 0xd3, 0x73, 0x17, 0xb1, 0xb3, 0x14,
    0x23, 0x9a, 0xf0, 0x70, 0xa5, 0xf3, 0x3b, 0x69, 0x29, 0x4d, 0x30, 0x50, 0xbf, 0x11, 0xb0, 0xbd,
];

#[rustfmt::skip]
static CMC50_ADDRESS_0_7_XOR: [u8; 256] = [
    0x1e, 0x1b, 0xc7, 0xce, 0x57, 0xf5, 0xf5, 0x12, 0xad, 0xbc, 0x09, 0x8c, 0xc1, 0xf4, 0xce, 0x9e,
    0x15, 0x75, 0x29, 0x0e, 0x89, 0xe6, 0x77, 0x52, 0x4b, 0x07, 0x5c, 0x7f, 0xfd, 0x86, 0x8f, 0xf2,
    0x9f, 0x35, 0xaf, 0x52, 0x82, 0x41, 0xb3, 0x4d, 0x89, 0x3f, 0x9c, 0xe1, 0x5c, 0x92, 0xed, 0x0e,
    0x88, 0xe1, 0x6f, 0x0c, 0x6f, 0x67, 0xee, 0x6d, 0x99, 0x99, 0xd2, 0xde, 0x39, 0x69, 0x44, 0x89,
    0x7e, 0x87, 0x40, 0x5c, 0xce, 0xd1, 0xfe, 0x18, 0x63, 0xa0, 0xd2, 0xa5, 0x61, 0x91, 0x29, 0x2f,
    0xfe, 0xd4, 0x09, 0x88, 0x39, 0x82, 0x9b, 0xac, 0xc7, 0x69, 0x23, 0xe6, 0x1f, 0xf7, 0x9c, 0x79,
    0xa5, 0x92, 0x0f, 0xf4, 0xa9, 0x1b, 0x7b, 0x7f, 0x1d, 0xde, 0x47, 0x12, 0x40, 0x38, 0x85, 0xd3,
    0xeb, 0xf0, 0xc5, 0xba, 0x21, 0xb2, 0xba, 0xd3, 0x05, 0x5e, 0xf3, 0x9d, 0x98, 0x5f, 0x85, 0xce,
    0xd2, 0x16, 0x89, 0x0b, 0xb3, 0x2b, 0xc0, 0x64, 0x4c, 0x6e, 0xa2, 0x4f, 0x36, 0xa3, 0xb3, 0xea,
    0x61, 0x8b, 0x94, 0x70, 0x2f, 0x82, 0x31, 0x50, 0x9b, 0x29, 0x9d, 0x9a, 0xee, 0x1d, 0x2f, 0xeb,
    0x10, 0x89, 0x99, 0x7f, 0xe0, 0xfe, 0x4a, 0xd6, 0xab, 0xe5, 0x1b, 0xe7, 0x9f, 0x05, 0x30, 0xc7,
    0x1a, 0x18, 0x87, 0x4d, 0x66, 0x69, 0x92, 0x23, 0x17, 0xa0, 0x67, 0xc8, 0x61, 0xeb, 0x34, 0x50,
    0x31, 0x2d, 0xa7, 0xdf, 0x32, 0x2a, 0x15, 0xeb, 0x36, 0x35, 0x6f, 0x98, 0x32, 0x64, 0x0d, 0x93,
    0xdd, 0x3e, 0x73, 0xe2, 0x13, 0x8f, 0xa1, 0x6c, 0x64, 0x9c, 0xaa, 0x1e, 0x74, 0x85, 0xe0, 0xa0,
    0xcf, 0xd2, 0xc7, 0xaf, 0xd4, 0x5c, 0xd4, 0xcf, 0x50, 0xe2, 0x4c, 0xb3, 0xcc, 0x6e, 0x1b, 0x57,
    0x89, 0x05, 0x95, 0xc2, 0x46, 0xbf, 0xb1, 0xc0, 0xac, 0x33, 0xbe, 0xcf, 0x15, 0x0c, 0x3d, 0xb9,
];

#[rustfmt::skip]
static M1_ADDRESS_0_7_XOR: [u8; 256] = [
    0x52, 0x7e, 0xbd, 0x93, 0x7d, 0x88, 0xde, 0x9d, 0xba, 0x54, 0x78, 0xe6, 0x6a, 0x15, 0x32, 0x7e,
    0x3a, 0x3e, 0x41, 0xb4, 0xa2, 0xf4, 0xb3, 0xf4, 0x1f, 0x6f, 0x5b, 0xf9, 0x82, 0x9d, 0xeb, 0x23,
    0x0b, 0xdb, 0x4d, 0x93, 0x0d, 0x2e, 0xfe, 0xd2, 0xd0, 0x59, 0x5d, 0xcb, 0x9d, 0xaf, 0x99, 0x0e,
    0x99, 0x42, 0x32, 0x09, 0x83, 0x59, 0x2b, 0x4e, 0x8a, 0x68, 0x51, 0x3d, 0x57, 0xe4, 0x18, 0x69,
    0xc3, 0xec, 0x67, 0x58, 0x12, 0xed, 0xf5, 0x90, 0x85, 0x9d, 0x6f, 0xc4, 0x21, 0xa0, 0x52, 0xd2,
    0xdd, 0xa7, 0xd6, 0xd2, 0xb5, 0xea, 0x2a, 0x60, 0x79, 0xbe, 0xe4, 0xb7, 0x1f, 0xb1, 0x11, 0xac,
    0x5c, 0x43, 0x01, 0x02, 0x05, 0x55, 0x9b, 0x0f, 0x77, 0x12, 0xfe, 0xc1, 0xbd, 0x5e, 0x46, 0x74,
    0x1d, 0xf2, 0x29, 0x5a, 0x68, 0x99, 0x0b, 0x19, 0x7c, 0x5b, 0x5d, 0xbf, 0xa8, 0x41, 0x7b, 0xd6,
    0x9b, 0xaf, 0x79, 0x4a, 0xf6, 0x28, 0xc7, 0x14, 0x2c, 0x54, 0x66, 0x2e, 0xb9, 0xac, 0xe6, 0xf9,
    0xd8, 0xb1, 0xde, 0x7f, 0x7e, 0x3f, 0x42, 0xc4, 0x92, 0x5e, 0x48, 0xf4, 0x16, 0x31, 0xb1, 0xf0,
    0x32, 0xbb, 0xf4, 0x05, 0x6c, 0x42, 0xfb, 0xb0, 0x1e, 0xf0, 0xf9, 0xd8, 0x0b, 0x6b, 0xf5, 0x43,
    0xc8, 0xaa, 0x8a, 0xca, 0x98, 0x91, 0x83, 0xf8, 0x07, 0x22, 0x91, 0xbd, 0xde, 0x0d, 0x83, 0xae,
    0x9a, 0xd9, 0x7c, 0x71, 0xf1, 0x84, 0xae, 0x59, 0x85, 0x05, 0x11, 0xe4, 0x73, 0x9f, 0x0d, 0x0c,
    0x91, 0x14, 0x16, 0x60, 0x49, 0x37, 0x1b, 0xb4, 0xbd, 0xde, 0x5f, 0x49, 0xc5, 0x9d, 0xc6, 0x9a,
    0x29, 0xcd, 0x60, 0x3a, 0x6d, 0x8d, 0x35, 0x33, 0xb2, 0xe6, 0xbd, 0x46, 0x23, 0x0e, 0x24, 0x2f,
    0x99, 0xbd, 0x75, 0xea, 0x7e, 0x26, 0x6d, 0x4b, 0x63, 0x81, 0x3e, 0xf2, 0x4c, 0x7a, 0x5b, 0x0b,
];

#[rustfmt::skip]
static M1_ADDRESS_8_15_XOR1: [u8; 256] = [
    0x0e, 0xa1, 0xf1, 0x7d, 0x95, 0x0a, 0x1a, 0x78, 0xdd, 0x62, 0x69, 0x09, 0xdf, 0xd0, 0x75, 0x9c,
    0x9a, 0xcf, 0xf3, 0x05, 0x40, 0x26, 0xb9, 0x04, 0xec, 0x75, 0x8e, 0xa1, 0xb1, 0x97, 0x6e, 0xb4,
    0xdd, 0x77, 0x9b, 0x38, 0x32, 0xab, 0x0d, 0xd4, 0x4e, 0xa1, 0xad, 0x29, 0x14, 0x3e, 0xe3, 0xc2,
    0x29, 0x61, 0xb1, 0x93, 0xca, 0x5d, 0xc9, 0x9a, 0x6d, 0x26, 0xfc, 0x21, 0x55, 0x29, 0xd5, 0x56,
    0xe8, 0x4a, 0xb3, 0xaf, 0xf9, 0xff, 0x96, 0xe5, 0x68, 0x22, 0xf0, 0xa5, 0x01, 0x08, 0x17, 0x4d,
    0xef, 0xfc, 0xb4, 0x35, 0x64, 0x3b, 0x42, 0xf5, 0x14, 0xa8, 0x21, 0xb4, 0xd2, 0x62, 0xf3, 0x0f,
    0x73, 0x1a, 0x9f, 0x61, 0x35, 0xd5, 0x50, 0x66, 0xcb, 0xd0, 0x55, 0xf9, 0xf0, 0x2e, 0x9b, 0x95,
    0x0e, 0x03, 0xda, 0x28, 0xad, 0x3a, 0x51, 0x51, 0x12, 0xa4, 0xc6, 0x81, 0x6f, 0xf6, 0x78, 0x5b,
    0x81, 0xfb, 0x1b, 0x47, 0x1c, 0xcc, 0x58, 0xe3, 0xb2, 0xee, 0x45, 0x86, 0xc8, 0x4e, 0x8c, 0x77,
    0xaf, 0xe4, 0x57, 0x9a, 0x7c, 0xed, 0x33, 0x8f, 0x30, 0x94, 0x94, 0xe2, 0x61, 0xb7, 0x58, 0x14,
    0x34, 0x11, 0xbf, 0x7f, 0xbf, 0xa9, 0xc0, 0xed, 0x80, 0x0b, 0xf4, 0xc5, 0x90, 0x95, 0x3c, 0x03,
    0x99, 0xac, 0x8a, 0x5b, 0x47, 0x38, 0xa7, 0x98, 0x45, 0xc8, 0x28, 0x12, 0x41, 0x45, 0x8f, 0xe9,
    0x84, 0x1d, 0xc2, 0x22, 0xb7, 0x78, 0x98, 0xc3, 0xa8, 0xe0, 0x0b, 0xb9, 0x9e, 0x21, 0x2a, 0x3e,
    0xa1, 0x5e, 0x91, 0x71, 0x63, 0x50, 0xf0, 0x42, 0xb0, 0xa8, 0xa7, 0xdb, 0x61, 0x2f, 0x06, 0xb3,
    0x0f, 0xd3, 0x0f, 0xd9, 0x94, 0x8d, 0x5e, 0x91, 0x3f, 0x9d, 0x2b, 0x28, 0x12, 0xea, 0xf0, 0x81,
    0x82, 0xab, 0xb1, 0x16, 0xaa, 0x88, 0x6f, 0x2c, 0xa8, 0xf3, 0x54, 0xfc, 0xfd, 0xf3, 0x78, 0x14,
];

#[rustfmt::skip]
static M1_ADDRESS_8_15_XOR2: [u8; 256] = [
    0x10, 0x6a, 0x93, 0x4c, 0x48, 0xb7, 0x80, 0x37, 0xb3, 0x5a, 0x8b, 0x1b, 0x65, 0xc9, 0x3f, 0xb2,
    0xa9, 0xd4, 0x8d, 0x79, 0xb2, 0x9a, 0xc8, 0x70, 0x4a, 0xbb, 0xa0, 0x32, 0xbb, 0xc6, 0xfc, 0xef,
    0xf9, 0x22, 0xd0, 0x90, 0xc1, 0xe4, 0xdf, 0x94, 0xc1, 0x45, 0xbc, 0xc1, 0xb5, 0xa8, 0x09, 0xd9,
    0x35, 0x68, 0x55, 0x81, 0x13, 0xa0, 0x3c, 0xb9, 0xce, 0x0b, 0x24, 0xed, 0xb1, 0xb9, 0xc3, 0xbe,
    0x02, 0x14, 0x6d, 0x6a, 0x75, 0xf3, 0xaa, 0xd2, 0x07, 0x6c, 0x55, 0xb2, 0xc3, 0x9d, 0xb4, 0x97,
    0xf7, 0x0a, 0xde, 0x4a, 0x94, 0xd4, 0x8e, 0x8e, 0xbb, 0x17, 0x8b, 0x85, 0xb9, 0xf7, 0x8b, 0x8b,
    0x98, 0x3f, 0xd9, 0x56, 0x12, 0x96, 0x27, 0x5b, 0xb2, 0x92, 0x99, 0x7c, 0x09, 0x03, 0x13, 0xbe,
    0xb1, 0xfa, 0x99, 0xa6, 0x16, 0x2a, 0x3d, 0x12, 0x7f, 0x48, 0x42, 0xc9, 0x13, 0xd8, 0x5d, 0x72,
    0xf7, 0xc0, 0x40, 0xab, 0xa3, 0x38, 0x30, 0x61, 0x2d, 0xea, 0x6a, 0xc7, 0x2b, 0x7b, 0x5e, 0x1b,
    0x55, 0x50, 0xc7, 0x0b, 0x87, 0xb4, 0xe8, 0x49, 0xd8, 0xe9, 0x51, 0x76, 0xc3, 0x86, 0x8f, 0x00,
    0x77, 0x19, 0xe4, 0xd1, 0xec, 0x09, 0xab, 0x95, 0x13, 0xdd, 0x1b, 0x79, 0x20, 0xb9, 0x7f, 0x60,
    0xab, 0x1b, 0x9b, 0xf1, 0xea, 0x62, 0xcd, 0x9b, 0xea, 0x6e, 0xb8, 0x33, 0x63, 0xe3, 0x36, 0x9d,
    0x7e, 0xf4, 0xc5, 0x98, 0x33, 0xa7, 0x66, 0x2a, 0x8b, 0x73, 0xcf, 0x35, 0xac, 0x84, 0xef, 0x23,
    0xf4, 0x9b, 0xe3, 0x4d, 0x27, 0x0b, 0x90, 0x86, 0xad, 0x63, 0xc0, 0x46, 0x8d, 0x64, 0x06, 0x9f,
    0xd3, 0x82, 0x1f, 0x1a, 0xee, 0xbf, 0x10, 0x68, 0x7f, 0xa9, 0x31, 0x43, 0x76, 0x7e, 0x23, 0xb3,
    0xbf, 0x5f, 0xb3, 0x6a, 0xa6, 0x4d, 0x8a, 0x3d, 0x21, 0xdb, 0x07, 0x86, 0x45, 0x8f, 0xba, 0xb1,
];
