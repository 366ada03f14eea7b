use super::*;
use crate::error::BuildError;

#[test]
fn test_concat_preserves_order() {
    let out = concat(vec![vec![1, 2], vec![], vec![3], vec![4, 5]]);
    assert_eq!(out, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_concat_empty() {
    assert!(concat(Vec::new()).is_empty());
}

#[test]
fn test_pad_to_extends_short_buffers() {
    assert_eq!(pad_to(vec![1, 2], 5, 0), vec![1, 2, 0, 0, 0]);
    assert_eq!(pad_to(vec![1, 2], 4, 0xff), vec![1, 2, 0xff, 0xff]);
}

#[test]
fn test_pad_to_leaves_long_buffers_alone() {
    assert_eq!(pad_to(vec![1, 2, 3], 2, 0), vec![1, 2, 3]);
    assert_eq!(pad_to(vec![1, 2, 3], 3, 0), vec![1, 2, 3]);
}

#[test]
fn test_interleave_two_sources() {
    let out = interleave(1, &[&[1, 3, 5], &[2, 4, 6]]).unwrap();
    assert_eq!(out, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_interleave_four_sources_hardware_order() {
    // Physical order within a cycle is 0, 2, 1, 3.
    let out = interleave(1, &[&[b'a'], &[b'b'], &[b'c'], &[b'd']]).unwrap();
    assert_eq!(out, vec![b'a', b'c', b'b', b'd']);
}

#[test]
fn test_interleave_rejects_other_counts() {
    let a: &[u8] = &[1];
    for sources in [vec![a], vec![a, a, a], vec![a, a, a, a, a]] {
        match interleave(1, &sources) {
            Err(BuildError::InvalidInterleave(n)) => assert_eq!(n, sources.len()),
            other => panic!("expected InvalidInterleave, got {other:?}"),
        }
    }
}

#[test]
fn test_interleave_zero_fills_exhausted_source_mid_stream() {
    // The shorter source keeps contributing erased strides while the longer
    // one still has data.
    let out = interleave(1, &[&[0xaa], &[0xbb, 0xcc]]).unwrap();
    assert_eq!(out, vec![0xaa, 0xbb, 0x00, 0xcc]);
}

#[test]
fn test_interleave_trims_trailing_zero_strides() {
    // The zero stride owed to the short second source falls at the very end
    // and is trimmed away again.
    let out = interleave(1, &[&[0xaa, 0xdd], &[0xbb]]).unwrap();
    assert_eq!(out, vec![0xaa, 0xbb, 0xdd]);
}

#[test]
fn test_interleave_keeps_real_zero_data() {
    // Zero bytes that were actually read are data, not padding.
    let out = interleave(1, &[&[1, 0], &[0, 0]]).unwrap();
    assert_eq!(out, vec![1, 0, 0, 0]);
}

#[test]
fn test_interleave_short_read_zero_filled_to_stride() {
    let out = interleave(2, &[&[1, 2, 3], &[4, 5, 6, 7]]).unwrap();
    assert_eq!(out, vec![1, 2, 4, 5, 3, 0, 6, 7]);
}

#[test]
fn test_interleave_deterministic() {
    let s0: Vec<u8> = (0..=255).collect();
    let s1: Vec<u8> = (0..=255).rev().collect();
    let a = interleave(4, &[&s0, &s1]).unwrap();
    let b = interleave(4, &[&s0, &s1]).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 512);
}

#[test]
fn test_interleave_empty_sources() {
    let out = interleave(1, &[&[], &[]]).unwrap();
    assert!(out.is_empty());
}
