use super::*;

#[test]
fn test_bitswap8_identity() {
    for n in 0..=255u8 {
        assert_eq!(bitswap8(n, &[7, 6, 5, 4, 3, 2, 1, 0]), n);
    }
}

#[test]
fn test_bitswap8_reverse() {
    assert_eq!(bitswap8(0b1000_0000, &[0, 1, 2, 3, 4, 5, 6, 7]), 0b0000_0001);
    assert_eq!(bitswap8(0b1100_0101, &[0, 1, 2, 3, 4, 5, 6, 7]), 0b1010_0011);
}

#[test]
fn test_bitswap8_msb_first_orientation() {
    // The first list entry selects the most significant output bit.
    assert_eq!(bitswap8(0b0000_0001, &[0, 7, 7, 7, 7, 7, 7, 7]), 0b1000_0000);
}

#[test]
fn test_bitswap16_identity() {
    let id = [15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
    for n in [0u16, 1, 0x8000, 0xa5a5, 0xffff] {
        assert_eq!(bitswap16(n, &id), n);
    }
}

fn invert16(bits: &[u32; 16]) -> [u32; 16] {
    let mut inv = [0u32; 16];
    for (i, &b) in bits.iter().enumerate() {
        inv[15 - b as usize] = 15 - i as u32;
    }
    inv
}

#[test]
fn test_bitswap16_inverse_composition() {
    // Applying a permutation and then its inverse restores the input.
    let perm = [13, 7, 3, 0, 9, 4, 5, 6, 1, 12, 8, 14, 10, 11, 2, 15];
    let inv = invert16(&perm);
    for n in [0u16, 1, 0x1234, 0x8001, 0xfedc, 0xffff] {
        assert_eq!(bitswap16(bitswap16(n, &perm), &inv), n);
    }
}

#[test]
fn test_bitswap_idx_matches_bitswap16_on_low_bits() {
    let bits: Vec<u32> = vec![15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
    for n in [0usize, 5, 0x1234, 0xffff] {
        assert_eq!(bitswap_idx(n, &bits), n);
    }
}

#[test]
fn test_bitswap_idx_wide() {
    // 24-bit identity with the two lowest bits swapped.
    let mut bits: Vec<u32> = (0..24).rev().collect();
    bits.swap(22, 23);
    assert_eq!(bitswap_idx(0x000001, &bits), 0x000002);
    assert_eq!(bitswap_idx(0x000002, &bits), 0x000001);
    assert_eq!(bitswap_idx(0xabcdec, &bits), 0xabcdec);
}
