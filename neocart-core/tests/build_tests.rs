//! End-to-end build pipeline tests over an in-memory ROM source.

use std::collections::HashMap;

use neocart_core::{build, Area, AreaSpec, BuildError, Game, Genre, Member, Recipe, RomSource};

/// A ROM source backed by a name → bytes map, standing in for the directory
/// and archive adapters.
struct MapSource {
    files: HashMap<String, Vec<u8>>,
}

impl MapSource {
    fn new(files: Vec<(&str, Vec<u8>)>) -> Self {
        Self {
            files: files
                .into_iter()
                .map(|(name, data)| (name.to_string(), data))
                .collect(),
        }
    }
}

impl RomSource for MapSource {
    fn area(&mut self, game: &Game, area: Area) -> Result<Vec<Vec<u8>>, BuildError> {
        game.areas[area.index()]
            .members
            .iter()
            .map(|m| {
                self.files
                    .get(m.name)
                    .cloned()
                    .ok_or_else(|| BuildError::rom_not_found(m.name))
            })
            .collect()
    }
}

fn spec(members: &[(&'static str, u64)]) -> AreaSpec {
    let members: Vec<Member> = members
        .iter()
        .map(|&(name, size)| Member {
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

fn game(recipe: Recipe, areas: [AreaSpec; 6]) -> Game {
    Game {
        id: "fake1",
        parent: None,
        name: "Fake Game",
        manufacturer: "Nobody",
        year: 1999,
        genre: Genre::Fighting,
        screenshot: 0,
        recipe,
        areas,
    }
}

/// Fill a buffer with a value and plant a little-endian NGH at 0x108.
fn program_image(len: usize, fill: u8, ngh: u16) -> Vec<u8> {
    let mut p = vec![fill; len];
    p[0x108..0x10a].copy_from_slice(&ngh.to_le_bytes());
    p
}

#[test]
fn test_common_build_layout() {
    const MIB: usize = 1 << 20;
    let p = program_image(MIB, 0x11, 0x0251);
    let s = vec![0x22u8; 8 << 10];
    let m = vec![0x33u8; 128 << 10];
    let c: Vec<Vec<u8>> = (0..4).map(|i| vec![0x40 + i as u8; 2 * MIB]).collect();

    let two_mib = 2 * MIB as u64;
    let g = game(
        Recipe::Common,
        [
            spec(&[("fake1.p1", MIB as u64)]),
            spec(&[("fake1.s1", 8 << 10)]),
            spec(&[("fake1.m1", 128 << 10)]),
            AreaSpec::default(),
            AreaSpec::default(),
            spec(&[
                ("fake1.c1", two_mib),
                ("fake1.c2", two_mib),
                ("fake1.c3", two_mib),
                ("fake1.c4", two_mib),
            ]),
        ],
    );

    let mut source = MapSource::new(vec![
        ("fake1.p1", p.clone()),
        ("fake1.s1", s.clone()),
        ("fake1.m1", m.clone()),
        ("fake1.c1", c[0].clone()),
        ("fake1.c2", c[1].clone()),
        ("fake1.c3", c[2].clone()),
        ("fake1.c4", c[3].clone()),
    ]);

    let built = build(&g, &mut source).unwrap();

    assert_eq!(
        built.sizes(),
        [
            MIB as u32,
            8 << 10,
            128 << 10,
            0,
            0,
            8 * MIB as u32,
        ]
    );
    // The program area is the member verbatim.
    assert_eq!(built.area(Area::P), &p[..]);
    assert_eq!(built.area(Area::S), &s[..]);
    assert_eq!(built.area(Area::M), &m[..]);
    // Sprites are pairwise byte-interleaved.
    let spr = built.area(Area::C);
    assert_eq!(&spr[..4], &[0x40, 0x41, 0x40, 0x41]);
    assert_eq!(&spr[4 * MIB..4 * MIB + 4], &[0x42, 0x43, 0x42, 0x43]);
    // NGH mirrors the program area.
    assert_eq!(built.ngh, 0x0251);
}

#[test]
fn test_patch_recipe_overlays_and_half_swaps() {
    const MIB: usize = 1 << 20;
    const PATCH: usize = 32 << 10;

    let mut base = program_image(2 * MIB, 0xaa, 0x1234);
    base[MIB..].fill(0xbb);
    let patch = vec![0xcc; PATCH];

    let g = game(
        Recipe::FightFever,
        [
            spec(&[("prog.p1", 2 * MIB as u64), ("prog.sp2", PATCH as u64)]),
            AreaSpec::default(),
            AreaSpec::default(),
            AreaSpec::default(),
            AreaSpec::default(),
            AreaSpec::default(),
        ],
    );

    let mut source = MapSource::new(vec![("prog.p1", base), ("prog.sp2", patch)]);
    let built = build(&g, &mut source).unwrap();

    let p = built.area(Area::P);
    assert_eq!(p.len(), 2 * MIB);
    assert!(p[..PATCH].iter().all(|&b| b == 0xcc));
    // The half-swapped base shows through after the patch: upper megabyte
    // first.
    assert_eq!(p[PATCH], 0xbb);
    assert_eq!(p[2 * MIB - 1], 0xaa);
}

#[test]
fn test_unsupported_recipe_fails() {
    let g = game(Recipe::Unsupported, Default::default());
    let mut source = MapSource::new(vec![]);
    match build(&g, &mut source) {
        Err(BuildError::Unsupported(id)) => assert_eq!(id, "fake1"),
        other => panic!("expected Unsupported, got {other:?}"),
    }
}

#[test]
fn test_missing_member_fails() {
    let g = game(
        Recipe::Common,
        [
            spec(&[("fake1.p1", 16)]),
            AreaSpec::default(),
            AreaSpec::default(),
            AreaSpec::default(),
            AreaSpec::default(),
            AreaSpec::default(),
        ],
    );
    let mut source = MapSource::new(vec![]);
    assert!(matches!(
        build(&g, &mut source),
        Err(BuildError::RomNotFound(_))
    ));
}

#[test]
fn test_short_program_has_zero_ngh() {
    let g = game(
        Recipe::Common,
        [
            spec(&[("tiny.p1", 0x100)]),
            AreaSpec::default(),
            AreaSpec::default(),
            AreaSpec::default(),
            AreaSpec::default(),
            AreaSpec::default(),
        ],
    );
    let mut source = MapSource::new(vec![("tiny.p1", vec![0xff; 0x100])]);
    let built = build(&g, &mut source).unwrap();
    assert_eq!(built.ngh, 0);
}

#[test]
fn test_voice_prefix_recipe() {
    const MIB: usize = 1 << 20;
    let g = game(
        Recipe::PBobbleNB,
        [
            spec(&[("pb.p1", 0x1000)]),
            AreaSpec::default(),
            AreaSpec::default(),
            spec(&[("pb.v4", 0x1000)]),
            AreaSpec::default(),
            AreaSpec::default(),
        ],
    );
    let mut source = MapSource::new(vec![
        ("pb.p1", vec![1u8; 0x1000]),
        ("pb.v4", vec![2u8; 0x1000]),
    ]);
    let built = build(&g, &mut source).unwrap();

    let v1 = built.area(Area::V1);
    assert_eq!(v1.len(), 2 * MIB + 0x1000);
    assert!(v1[..2 * MIB].iter().all(|&b| b == 0));
    assert!(v1[2 * MIB..].iter().all(|&b| b == 2));
}

#[test]
fn test_erased_area_recipe() {
    // dragonsh replaces its missing audio and voice dumps with erased
    // images.
    let g = game(
        Recipe::DragonsH,
        [
            spec(&[("dr.p1", 0x100), ("dr.p2", 0x100)]),
            AreaSpec::default(),
            AreaSpec::default(),
            AreaSpec::default(),
            AreaSpec::default(),
            AreaSpec::default(),
        ],
    );
    let mut source = MapSource::new(vec![
        ("dr.p1", vec![1u8; 0x100]),
        ("dr.p2", vec![2u8; 0x100]),
    ]);
    let built = build(&g, &mut source).unwrap();

    assert_eq!(built.area(Area::M).len(), 128 << 10);
    assert!(built.area(Area::M).iter().all(|&b| b == 0xff));
    assert_eq!(built.area(Area::V1).len(), 2 << 20);
    assert!(built.area(Area::V1).iter().all(|&b| b == 0xff));
    // gpilotsp-style program pairing: second member first within each pair.
    assert_eq!(built.area(Area::P)[0], 2);
    assert_eq!(built.area(Area::P)[1], 1);
}
