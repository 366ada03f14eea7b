//! Core ROM reassembly pipeline for Neo Geo flash cartridge images.
//!
//! A cartridge image is built from six memory areas (program, fix layer,
//! audio CPU, two voice banks, sprites). Each supported title binds to a
//! [`Recipe`] that turns the raw dump files of that title into the in-memory
//! layout the cartridge firmware expects: concatenation, padding,
//! interleaving, and (for the later protected boards) the CMC, SMA, PVC
//! and PCM2 descrambling schemes.
//!
//! The crate is deliberately I/O free: dump bytes come in through the
//! [`RomSource`] seam (implemented by the directory and archive adapters in
//! `neocart-source`) and the built areas come out as plain byte vectors.

pub mod area;
pub mod bits;
pub mod build;
pub mod error;
pub mod game;
pub mod genre;
pub mod readers;
pub mod recipe;
pub mod stream;
pub mod transform;

pub use area::Area;
pub use build::{build, BuiltRom};
pub use error::BuildError;
pub use game::{AreaSpec, Game, Member, RomSource};
pub use genre::Genre;
pub use recipe::Recipe;
