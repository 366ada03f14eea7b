//! Adapter tests over synthetic containers on disk.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use sha1::{Digest, Sha1};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use neocart_core::{Area, AreaSpec, BuildError, Game, Genre, Member, Recipe};

fn sha1_hex(data: &[u8]) -> String {
    let mut sha = Sha1::new();
    sha.update(data);
    format!("{:x}", sha.finalize())
}

fn member(name: &'static str, data: &[u8]) -> Member {
    Member {
        name,
        size: data.len() as u64,
        crc32: crc32fast::hash(data),
        sha1: Box::leak(sha1_hex(data).into_boxed_str()),
    }
}

fn game(parent: Option<&'static str>, members: Vec<Member>) -> Game {
    let mut areas: [AreaSpec; 6] = Default::default();
    areas[Area::P.index()] = AreaSpec {
        size: 0,
        members: Box::leak(members.into_boxed_slice()),
    };
    Game {
        id: "fake1",
        parent,
        name: "Fake Game",
        manufacturer: "Nobody",
        year: 2000,
        genre: Genre::Other,
        screenshot: 0,
        recipe: Recipe::Common,
        areas,
    }
}

fn write_zip(path: &Path, files: &[(&str, &[u8])]) {
    let mut writer = ZipWriter::new(File::create(path).unwrap());
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, data) in files {
        writer.start_file(*name, options).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap();
}

// -- directory adapter --

#[test]
fn test_directory_resolves_members_in_order() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("fake1");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("a.p1"), b"first").unwrap();
    fs::write(dir.join("b.p2"), b"second").unwrap();

    let g = game(None, vec![member("a.p1", b"first"), member("b.p2", b"second")]);
    let mut source = neocart_source::open(&dir).unwrap();
    let bufs = source.area(&g, Area::P).unwrap();

    assert_eq!(bufs, vec![b"first".to_vec(), b"second".to_vec()]);
}

#[test]
fn test_directory_missing_member() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("fake1");
    fs::create_dir(&dir).unwrap();

    let g = game(None, vec![member("a.p1", b"first")]);
    let mut source = neocart_source::open(&dir).unwrap();
    assert!(matches!(
        source.area(&g, Area::P),
        Err(BuildError::RomNotFound(_))
    ));
}

#[test]
fn test_directory_corrupt_member() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("fake1");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("a.p1"), b"fXrst").unwrap();

    let g = game(None, vec![member("a.p1", b"first")]);
    let mut source = neocart_source::open(&dir).unwrap();
    assert!(matches!(
        source.area(&g, Area::P),
        Err(BuildError::BadRom(_))
    ));
}

#[test]
fn test_directory_wrong_size_member() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("fake1");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("a.p1"), b"firstfirst").unwrap();

    let g = game(None, vec![member("a.p1", b"first")]);
    let mut source = neocart_source::open(&dir).unwrap();
    assert!(matches!(
        source.area(&g, Area::P),
        Err(BuildError::BadRom(_))
    ));
}

#[test]
fn test_directory_parent_fallback() {
    let tmp = TempDir::new().unwrap();
    let clone = tmp.path().join("fake1");
    let parent = tmp.path().join("parent1");
    fs::create_dir(&clone).unwrap();
    fs::create_dir(&parent).unwrap();
    fs::write(clone.join("a.p1"), b"clone data").unwrap();
    fs::write(parent.join("b.p2"), b"parent data").unwrap();

    let g = game(
        Some("parent1"),
        vec![member("a.p1", b"clone data"), member("b.p2", b"parent data")],
    );
    let mut source = neocart_source::open(&clone).unwrap();
    let bufs = source.area(&g, Area::P).unwrap();

    assert_eq!(bufs[0], b"clone data");
    assert_eq!(bufs[1], b"parent data");
}

#[test]
fn test_directory_main_container_wins_over_parent() {
    let tmp = TempDir::new().unwrap();
    let clone = tmp.path().join("fake1");
    let parent = tmp.path().join("parent1");
    fs::create_dir(&clone).unwrap();
    fs::create_dir(&parent).unwrap();
    fs::write(clone.join("a.p1"), b"same bytes").unwrap();
    fs::write(parent.join("a.p1"), b"other stuff").unwrap();

    let g = game(Some("parent1"), vec![member("a.p1", b"same bytes")]);
    let mut source = neocart_source::open(&clone).unwrap();
    assert_eq!(source.area(&g, Area::P).unwrap()[0], b"same bytes");
}

#[test]
fn test_empty_area_yields_no_buffers() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("fake1");
    fs::create_dir(&dir).unwrap();

    let g = game(None, Vec::new());
    let mut source = neocart_source::open(&dir).unwrap();
    assert!(source.area(&g, Area::V2).unwrap().is_empty());
}

// -- zip adapter --

#[test]
fn test_zip_resolves_by_name() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("fake1.zip");
    write_zip(&path, &[("a.p1", b"first"), ("b.p2", b"second")]);

    let g = game(None, vec![member("a.p1", b"first"), member("b.p2", b"second")]);
    let mut source = neocart_source::open(&path).unwrap();
    let bufs = source.area(&g, Area::P).unwrap();

    assert_eq!(bufs, vec![b"first".to_vec(), b"second".to_vec()]);
}

#[test]
fn test_zip_resolves_by_crc_when_renamed() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("fake1.zip");
    write_zip(&path, &[("renamed.bin", b"first")]);

    let g = game(None, vec![member("a.p1", b"first")]);
    let mut source = neocart_source::open(&path).unwrap();
    assert_eq!(source.area(&g, Area::P).unwrap()[0], b"first");
}

#[test]
fn test_zip_name_match_with_wrong_content_is_bad_rom() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("fake1.zip");
    write_zip(&path, &[("a.p1", b"corrupted!")]);

    let g = game(None, vec![member("a.p1", b"first")]);
    let mut source = neocart_source::open(&path).unwrap();
    assert!(matches!(
        source.area(&g, Area::P),
        Err(BuildError::BadRom(_))
    ));
}

#[test]
fn test_zip_missing_member() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("fake1.zip");
    write_zip(&path, &[("other.bin", b"unrelated")]);

    let g = game(None, vec![member("a.p1", b"first")]);
    let mut source = neocart_source::open(&path).unwrap();
    assert!(matches!(
        source.area(&g, Area::P),
        Err(BuildError::RomNotFound(_))
    ));
}

#[test]
fn test_zip_parent_fallback() {
    let tmp = TempDir::new().unwrap();
    let clone = tmp.path().join("fake1.zip");
    let parent = tmp.path().join("parent1.zip");
    write_zip(&clone, &[("a.p1", b"clone data")]);
    write_zip(&parent, &[("b.p2", b"parent data")]);

    let g = game(
        Some("parent1"),
        vec![member("a.p1", b"clone data"), member("b.p2", b"parent data")],
    );
    let mut source = neocart_source::open(&clone).unwrap();
    let bufs = source.area(&g, Area::P).unwrap();

    assert_eq!(bufs[0], b"clone data");
    assert_eq!(bufs[1], b"parent data");
}

// -- container sniffing --

#[test]
fn test_open_rejects_unknown_file_format() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("fake1.7z");
    fs::write(&path, b"7z\xbc\xaf\x27\x1c junk").unwrap();

    assert!(matches!(
        neocart_source::open(&path),
        Err(BuildError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_open_missing_path_is_io_error() {
    let tmp = TempDir::new().unwrap();
    assert!(matches!(
        neocart_source::open(&tmp.path().join("nope")),
        Err(BuildError::Io(_))
    ));
}
