use super::boot;
use super::cmc;
use super::k2k2;
use super::pcm2;
use super::pvc;
use super::sma;

/// Deterministic filler so permutation bugs show up as content changes.
fn ramp(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + (i >> 8)) as u8).collect()
}

// -- PCM2 --

#[test]
fn test_pcm2_decrypt_known_stride() {
    // value = 4: the two words of each stride swap places.
    let out = pcm2::pcm2_decrypt(&[1, 2, 3, 4], 4);
    assert_eq!(out, vec![3, 4, 1, 2]);
}

#[test]
fn test_pcm2_decrypt_is_involution() {
    for value in [4, 8, 16] {
        let v = ramp(0x100);
        let twice = pcm2::pcm2_decrypt(&pcm2::pcm2_decrypt(&v, value), value);
        assert_eq!(twice, v, "value {value}");
    }
}

#[test]
fn test_pcm2_decrypt_preserves_length() {
    assert_eq!(pcm2::pcm2_decrypt(&ramp(0x400), 16).len(), 0x400);
}

#[test]
fn test_pcm2_swap_full_space() {
    let v = ramp(0x1000000);
    let out = pcm2::pcm2_swap(&v, 2);
    assert_eq!(out.len(), v.len());
    assert_ne!(out, v);
    // Deterministic.
    assert_eq!(out, pcm2::pcm2_swap(&v, 2));
}

// -- bootleg S/C --

#[test]
fn test_sx_mode1_swaps_block_halves() {
    let s: Vec<u8> = (0..0x10).collect();
    let out = boot::sx_decrypt(&s, 1);
    assert_eq!(
        out,
        vec![8, 9, 10, 11, 12, 13, 14, 15, 0, 1, 2, 3, 4, 5, 6, 7]
    );
}

#[test]
fn test_sx_mode1_is_involution() {
    let s = ramp(0x100);
    assert_eq!(boot::sx_decrypt(&boot::sx_decrypt(&s, 1), 1), s);
}

#[test]
fn test_sx_mode2_is_involution() {
    // The mode-2 bit permutation only exchanges bits 5 and 0.
    let s = ramp(0x100);
    assert_eq!(boot::sx_decrypt(&boot::sx_decrypt(&s, 2), 2), s);
}

#[test]
fn test_sx_unknown_mode_passthrough() {
    let s = ramp(0x20);
    assert_eq!(boot::sx_decrypt(&s, 0), s);
}

#[test]
fn test_cx_swaps_adjacent_blocks() {
    let mut c = vec![0u8; 0x100];
    c[0x40..0x80].fill(1);
    c[0xc0..].fill(3);
    let out = boot::cx_decrypt(&c);
    assert!(out[..0x40].iter().all(|&b| b == 1));
    assert!(out[0x40..0x80].iter().all(|&b| b == 0));
    assert!(out[0x80..0xc0].iter().all(|&b| b == 3));
    assert!(out[0xc0..].iter().all(|&b| b == 0));
}

#[test]
fn test_cx_is_involution() {
    let c = ramp(0x400);
    assert_eq!(boot::cx_decrypt(&boot::cx_decrypt(&c)), c);
}

#[test]
fn test_cthd_straight_stripes_untouched() {
    // Stripes 3 and 4 of each group of eight are stored straight.
    let c = ramp(0x4000000);
    let out = boot::cthd_decrypt(&c);
    assert_eq!(out.len(), c.len());
    let stripe = 512 * 128;
    assert_eq!(out[3 * stripe..5 * stripe], c[3 * stripe..5 * stripe]);
    assert_ne!(out[..stripe], c[..stripe]);
}

// -- bootleg programs --

#[test]
fn test_kof97oro_program_is_word_permutation() {
    let p = ramp(0x500000);
    let out = boot::kof97oro_program(&p);
    assert_eq!(out.len(), p.len());
    // Index 0 maps to itself under the permutation.
    assert_eq!(&out[..2], &p[..2]);
    assert_ne!(out, p);
}

#[test]
fn test_kof98_program_drops_shadow_megabyte() {
    let p = ramp(0x600000);
    let out = boot::kof98_program(&p);
    assert_eq!(out.len(), 0x500000);
    // The first 0x800 bytes sit below the scrambled window.
    assert_eq!(out[..0x800], p[..0x800]);
    // Everything past the dropped shadow megabyte is the plain second ROM.
    assert_eq!(out[0x100000..], p[0x200000..]);
}

#[test]
fn test_lans2004_program_layout() {
    let p = ramp(0x600000);
    let out = boot::lans2004_program(&p);
    assert_eq!(out.len(), 0x500000);
    // First block comes from 0x080000 + 3 * 0x20000.
    assert_eq!(out[..0x10], p[0x0e0000..0x0e0010]);
    // The tail is the relocated upper ROMs.
    assert_eq!(out[0x4f0000..], p[0x5f0000..]);
}

#[test]
fn test_lans2004_voice_known_mapping() {
    // Input bit 2 lands in output bit 7, input bit 7 in output bit 6.
    assert_eq!(boot::lans2004_voice(&[0b0000_0100]), vec![0b1000_0000]);
    assert_eq!(boot::lans2004_voice(&[0b1000_0000]), vec![0b0100_0000]);
}

#[test]
fn test_matrimbl_audio_scatter() {
    let m = ramp(0x20000);
    let out = boot::matrimbl_audio(&m);
    assert_eq!(out.len(), m.len());
    // i = 0: plain xor-5 scatter.
    assert_eq!(out[5], m[0]);
    // i = 0x800: odd-byte variant with the bank flip.
    assert_eq!(out[(0x800 ^ 0x01 ^ 0x5) ^ 0x10000], m[0x800]);
}

#[test]
fn test_matrimbl_voice_swaps_second_and_fourth_roms() {
    let v = ramp(0x1000000);
    let out = boot::matrimbl_voice(&v);
    assert_eq!(out[..0x400000], v[..0x400000]);
    assert_eq!(out[0x400000], v[0x400001]);
    assert_eq!(out[0x400001], v[0x400000]);
    assert_eq!(out[0x800000..0xc00000], v[0x800000..0xc00000]);
    assert_eq!(out[0xc00000], v[0xc00001]);
}

// -- K2K2 --

#[test]
fn test_k2k2_program_reorders_blocks() {
    const BLOCK: usize = 0x80000;
    let mut p = vec![0u8; 0x500000];
    for (i, chunk) in p.chunks_mut(BLOCK).enumerate() {
        chunk.fill(i as u8);
    }
    let out = k2k2::k2k2_program(&p, 0x100000, &k2k2::KOF2002_BLOCKS);

    // The first megabyte is left alone.
    assert_eq!(out[..0x100000], p[..0x100000]);
    for (i, &src) in k2k2::KOF2002_BLOCKS.iter().enumerate() {
        let expect = ((0x100000 + src) / BLOCK) as u8;
        assert_eq!(out[0x100000 + i * BLOCK], expect, "block {i}");
    }
}

#[test]
fn test_k2k2_sixteen_block_tables_cover_span() {
    for blocks in [&k2k2::SAMSHO5_BLOCKS, &k2k2::SAMSH5SP_BLOCKS] {
        let mut seen: Vec<usize> = blocks.to_vec();
        seen.sort_unstable();
        let expect: Vec<usize> = (0..16).map(|i| i * 0x80000).collect();
        assert_eq!(seen, expect);
    }
}

// -- SMA --

fn identity_sma() -> sma::SmaKeys {
    sma::SmaKeys {
        data_bits: [15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
        fixed_first: false,
        fixed_base: 0x700000 / 2,
        fixed_bits: [
            23, 22, 21, 20, 19, 18, 17, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0,
        ],
        bank_words: 0x600000 / 2,
        block_words: 0x800 / 2,
        block_bits: [
            23, 22, 21, 20, 19, 18, 17, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0,
        ],
        cmc50: false,
        gfx_xor: 0,
    }
}

#[test]
fn test_sma_identity_keys_relocate_fixed_region_only() {
    let p = ramp(0x900000);
    let keys = identity_sma();
    let out = sma::sma_program(p.clone(), &keys);

    assert_eq!(out.len(), p.len());
    // Banked region untouched under identity permutations.
    assert_eq!(out[0x100000..], p[0x100000..]);
    // Fixed region pulled verbatim from the per-title base.
    assert_eq!(out[..0xc0000], p[0x700000..0x7c0000]);
}

#[test]
fn test_sma_data_bitswap_applies_to_banked_words() {
    let mut keys = identity_sma();
    // Swap the two halves of every word.
    keys.data_bits = [7, 6, 5, 4, 3, 2, 1, 0, 15, 14, 13, 12, 11, 10, 9, 8];
    let mut p = vec![0u8; 0x900000];
    p[0x100000] = 0x12; // LE word 0x0012 at the first banked word
    let out = sma::sma_program(p, &keys);
    assert_eq!(u16::from_le_bytes([out[0x100000], out[0x100001]]), 0x1200);
}

#[test]
fn test_sma_title_keys_preserve_length() {
    let p = ramp(0x900000);
    let out = sma::sma_program(p, &sma::KOF99);
    assert_eq!(out.len(), 0x900000);
}

// -- PVC --

fn identity_pvc() -> pvc::PvcKeys {
    pvc::PvcKeys {
        tail_xor: false,
        xor1: [0; 32],
        xor2: [0; 32],
        word_bits: [15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
        block_bits: [7, 6, 5, 4, 3, 2, 1, 0],
        page_keep_mask: 0x000f00,
        page_xor: 0,
        page_swap_mask: 0x0ff000,
        page_shift: 12,
        page_bits: [7, 6, 5, 4, 3, 2, 1, 0],
        gfx_xor: 0,
        pcm2_swap: 2,
    }
}

#[test]
fn test_pvc_identity_keys_reduce_to_bank_rotation() {
    let mut p = vec![0u8; 0x800000];
    for (i, chunk) in p.chunks_mut(0x100000).enumerate() {
        chunk.fill(i as u8);
    }
    let keys = identity_pvc();
    let out = pvc::pvc_program(p, &keys);

    // Vector megabyte stays, the last bank rotates in front of the rest.
    let banks: Vec<u8> = out.chunks(0x100000).map(|c| c[0]).collect();
    assert_eq!(banks, vec![0, 7, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_pvc_title_keys_preserve_length() {
    let out = pvc::pvc_program(ramp(0x800000), &pvc::MSLUG5);
    assert_eq!(out.len(), 0x800000);
    let out = pvc::pvc_program(ramp(0x900000), &pvc::KOF2003);
    assert_eq!(out.len(), 0x900000);
}

// -- CMC --

#[test]
fn test_cmc_sfix_address_mapping() {
    let sprites = ramp(0x1000);
    let s = cmc::cmc_sfix(&sprites, 0x40);
    // Hand-computed source offsets of the scatter formula.
    assert_eq!(s[0x00], sprites[0x02]);
    assert_eq!(s[0x01], sprites[0x06]);
    assert_eq!(s[0x08], sprites[0x00]);
    assert_eq!(s[0x10], sprites[0x03]);
    assert_eq!(s[0x20], sprites[0x22]);
}

#[test]
fn test_cmc_sfix_respects_requested_length() {
    let sprites = ramp(0x100000);
    assert_eq!(cmc::cmc_sfix(&sprites, 0x20000).len(), 0x20000);
}

#[test]
fn test_cmc42_gfx_preserves_length_and_is_deterministic() {
    let c = ramp(0x100000);
    let a = cmc::cmc42_gfx(&c, 0xff);
    assert_eq!(a.len(), c.len());
    assert_eq!(a, cmc::cmc42_gfx(&c, 0xff));
    assert_ne!(a, c);
}

#[test]
fn test_cmc42_and_cmc50_differ() {
    let c = ramp(0x100000);
    assert_ne!(cmc::cmc42_gfx(&c, 0x00), cmc::cmc50_gfx(&c, 0x00));
}

#[test]
fn test_cmc42_xor_byte_changes_output() {
    let c = ramp(0x100000);
    assert_ne!(cmc::cmc42_gfx(&c, 0x00), cmc::cmc42_gfx(&c, 0xad));
}

#[test]
fn test_cmc50_m1_is_permutation_of_address_space() {
    let m = ramp(0x80000);
    let out = cmc::cmc50_m1(&m);
    assert_eq!(out.len(), m.len());
    // A gather over a bijective address scramble preserves the byte
    // population of every 64 KiB bank pair.
    let mut a = m.clone();
    let mut b = out.clone();
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b);
}
