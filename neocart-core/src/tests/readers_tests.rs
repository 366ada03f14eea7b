use super::*;
use crate::game::{AreaSpec, Member};

fn spec(members: Vec<(&'static str, u64)>) -> AreaSpec {
    let members: Vec<Member> = members
        .into_iter()
        .map(|(name, size)| Member {
            name,
            size,
            crc32: 0,
            sha1: "",
        })
        .collect();
    AreaSpec {
        size: 0,
        members: Box::leak(members.into_boxed_slice()),
    }
}

#[test]
fn test_program_concatenates_bases_in_order() {
    let s = spec(vec![("game.p1", 4), ("game.p2", 4)]);
    let out = program(&s, vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]], Some(".ep"));
    assert_eq!(out, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_program_patch_overlays_head() {
    let s = spec(vec![("game.p1", 8), ("game.ep1", 2)]);
    let base = vec![0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17];
    let out = program(&s, vec![base, vec![0xa0, 0xa1]], Some(".ep"));
    assert_eq!(out, vec![0xa0, 0xa1, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17]);
}

#[test]
fn test_program_multiple_patches_concatenate() {
    let s = spec(vec![("game.p1", 4), ("game.ep1", 1), ("game.ep2", 1)]);
    let out = program(&s, vec![vec![1, 2, 3, 4], vec![0xaa], vec![0xbb]], Some(".ep"));
    assert_eq!(out, vec![0xaa, 0xbb, 3, 4]);
}

#[test]
fn test_program_two_mib_base_swaps_halves() {
    // A 2 MiB leading base ROM stores its upper megabyte first.
    let mut base = vec![0xaa; ONE_MIB];
    base.extend(vec![0xbb; ONE_MIB]);
    let s = spec(vec![("game.p1", TWO_MIB as u64)]);
    let out = program(&s, vec![base], Some(".ep"));
    assert_eq!(out.len(), TWO_MIB);
    assert_eq!(out[0], 0xbb);
    assert_eq!(out[ONE_MIB - 1], 0xbb);
    assert_eq!(out[ONE_MIB], 0xaa);
    assert_eq!(out[TWO_MIB - 1], 0xaa);
}

#[test]
fn test_program_patch_with_two_mib_base() {
    // The fightfeva layout: a half-swapped 2 MiB base under a 32 KiB patch.
    let patch_len = 32 << 10;
    let mut base = vec![0xaa; ONE_MIB];
    base.extend(vec![0xbb; ONE_MIB]);
    let s = spec(vec![("prog.p1", TWO_MIB as u64), ("prog.sp2", patch_len as u64)]);
    let out = program(&s, vec![base, vec![0xcc; patch_len]], Some(".sp"));

    assert_eq!(out.len(), TWO_MIB);
    assert!(out[..patch_len].iter().all(|&b| b == 0xcc));
    assert!(out[patch_len..ONE_MIB].iter().all(|&b| b == 0xbb));
    assert!(out[ONE_MIB..].iter().all(|&b| b == 0xaa));
}

#[test]
fn test_program_small_first_base_is_not_swapped() {
    let s = spec(vec![("game.p1", 4)]);
    let out = program(&s, vec![vec![1, 2, 3, 4]], Some(".ep"));
    assert_eq!(out, vec![1, 2, 3, 4]);
}

#[test]
fn test_padded_length_rule() {
    // Every member except the last is padded to the largest member size.
    let s = spec(vec![("m1", 0x100), ("m2", 0x80), ("m3", 0x40)]);
    let out = padded(
        &s,
        vec![vec![1; 0x100], vec![2; 0x80], vec![3; 0x40]],
    );
    assert_eq!(out.len(), 0x100 + 0x100 + 0x40);
    assert_eq!(out[0x100], 2);
    assert_eq!(out[0x180], 0); // padding after the 0x80 member
    assert_eq!(out[0x200], 3);
}

#[test]
fn test_padded_single_member_untouched() {
    let s = spec(vec![("m1", 0x10)]);
    assert_eq!(padded(&s, vec![vec![7; 0x10]]), vec![7; 0x10]);
}

#[test]
fn test_sprites_interleaves_pairs_and_pads() {
    // First pair is shorter and gets padded to twice the largest member.
    let s = spec(vec![("c1", 2), ("c2", 2), ("c3", 4), ("c4", 4)]);
    let out = sprites(
        &s,
        vec![
            vec![0x10, 0x11],
            vec![0x20, 0x21],
            vec![0x30, 0x31, 0x32, 0x33],
            vec![0x40, 0x41, 0x42, 0x43],
        ],
    )
    .unwrap();

    assert_eq!(out.len(), 8 + 8);
    assert_eq!(&out[..4], &[0x10, 0x20, 0x11, 0x21]);
    assert_eq!(&out[4..8], &[0, 0, 0, 0]);
    assert_eq!(&out[8..], &[0x30, 0x40, 0x31, 0x41, 0x32, 0x42, 0x33, 0x43]);
}

#[test]
fn test_sprites_last_pair_not_padded() {
    let s = spec(vec![("c1", 2), ("c2", 2)]);
    let out = sprites(&s, vec![vec![1, 2], vec![3, 4]]).unwrap();
    assert_eq!(out, vec![1, 3, 2, 4]);
}

#[test]
fn test_sprites_kotm2_outer_interleave() {
    // Four 2 MiB members: the two byte-interleaved pairs are woven together
    // again at 2 MiB granularity.
    let c: Vec<Vec<u8>> = (0..4).map(|i| vec![i as u8 + 1; TWO_MIB]).collect();
    let out = sprites_kotm2(c).unwrap();

    assert_eq!(out.len(), 4 * TWO_MIB);
    // pair 0 = roms 1+2 interleaved, pair 1 = roms 3+4 interleaved
    assert_eq!(&out[..2], &[1, 2]);
    assert_eq!(&out[TWO_MIB..TWO_MIB + 2], &[3, 4]);
    assert_eq!(&out[2 * TWO_MIB..2 * TWO_MIB + 2], &[1, 2]);
    assert_eq!(&out[3 * TWO_MIB..3 * TWO_MIB + 2], &[3, 4]);
}

#[test]
fn test_program_kotm2p_pairs() {
    let out = program_kotm2p(vec![vec![1, 3], vec![2, 4]]).unwrap();
    assert_eq!(out, vec![1, 2, 3, 4]);
}

#[test]
fn test_program_gpilotsp_reverses_pairs() {
    let out = program_gpilotsp(vec![vec![2, 4], vec![1, 3]]).unwrap();
    assert_eq!(out, vec![1, 2, 3, 4]);
}

#[test]
fn test_sprites_kotm2p_groups_of_four() {
    let out = sprites_kotm2p(vec![vec![b'a'], vec![b'b'], vec![b'c'], vec![b'd']]).unwrap();
    assert_eq!(out, vec![b'a', b'c', b'b', b'd']);
}

#[test]
fn test_sprites_viewpoin_inserts_erased_blocks() {
    let c = vec![vec![0x11; TWO_MIB], vec![0x22; TWO_MIB]];
    let out = sprites_viewpoin(c).unwrap();

    // One 4 MiB pair plus a 2 MiB erased block, woven at 2 MiB width; the
    // trailing erased stride is trimmed.
    assert_eq!(out.len(), 3 * TWO_MIB);
    assert_eq!(&out[..2], &[0x11, 0x22]);
    assert!(out[TWO_MIB..2 * TWO_MIB].iter().all(|&b| b == 0));
    assert_eq!(&out[2 * TWO_MIB..2 * TWO_MIB + 2], &[0x11, 0x22]);
}

#[test]
fn test_program_pvc_interleaves_head_and_appends_tail() {
    let out = program_pvc(vec![vec![1, 2, 5, 6], vec![3, 4, 7, 8], vec![9, 10]]).unwrap();
    assert_eq!(out, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn test_program_sma_prepends_erased_header() {
    let out = program_sma(vec![vec![0xaa; 4], vec![0xbb; 4]]);
    assert_eq!(out.len(), 0xc0000 + 8);
    assert!(out[..0xc0000].iter().all(|&b| b == 0));
    assert_eq!(&out[0xc0000..], &[0xaa, 0xaa, 0xaa, 0xaa, 0xbb, 0xbb, 0xbb, 0xbb]);
}
