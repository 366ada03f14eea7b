//! The `info` subcommand: decode a cart image and print its header.

use std::fs;
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use sha1::{Digest, Sha1};

use neocart_core::Genre;
use neocart_format::CartFile;

use crate::error::CliError;

const AREA_LABELS: [&str; neocart_format::AREAS] = ["P", "S", "M", "V1", "V2", "C"];

pub(crate) fn run(cart_path: &Path, verbose: bool) -> Result<(), CliError> {
    let data = fs::read(cart_path)?;
    let cart = CartFile::parse(&data)?;

    let genre = match Genre::from_code(cart.genre) {
        Some(genre) => genre.to_string(),
        None => cart.genre.to_string(),
    };

    print_field("Name:", &cart.name);
    print_field("Manufacturer:", &cart.manufacturer);
    print_field("Year:", &cart.year.to_string());
    print_field("Genre:", &genre);
    print_field("Screenshot:", &cart.screenshot.to_string());
    print_field("NGH:", &format!("{:#x}", cart.ngh));

    if verbose {
        println!();
        println!(
            "{:<4} {:>10}  {}",
            "ROM".if_supports_color(Stdout, |t| t.bold()),
            "Size".if_supports_color(Stdout, |t| t.bold()),
            "SHA1".if_supports_color(Stdout, |t| t.bold()),
        );
        for (label, area) in AREA_LABELS.iter().zip(&cart.areas) {
            if area.is_empty() {
                println!("{label:<4} {:>10}  -", 0);
                continue;
            }
            let mut sha = Sha1::new();
            sha.update(area);
            println!("{label:<4} {:>10}  {:x}", area.len(), sha.finalize());
        }
    }

    Ok(())
}

fn print_field(key: &str, value: &str) {
    println!(
        "{:<14} {}",
        key.if_supports_color(Stdout, |t| t.cyan()),
        value,
    );
}
