//! The `convert` subcommand: resolve the catalogue entry, run the build
//! pipeline and write the cart image.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use neocart_core::BuildError;
use neocart_format::{CartFile, EXTENSION};

use crate::error::CliError;

pub(crate) struct Options {
    pub container: PathBuf,
    pub directory: Option<PathBuf>,
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    pub year: Option<u32>,
    pub genre: Option<u32>,
    pub screenshot: Option<u32>,
}

pub(crate) fn run(options: Options) -> Result<(), CliError> {
    let stem = options
        .container
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| CliError::bad_path(options.container.display().to_string()))?;

    let game = neocart_catalog::find(stem)
        .ok_or_else(|| BuildError::game_not_found(stem))?;

    let mut source = neocart_source::open(&options.container)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .expect("static template")
            .tick_chars("/-\\| "),
    );
    spinner.set_message(format!("Assembling {}", game.id));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let built = neocart_core::build(game, source.as_mut())?;

    spinner.finish_and_clear();

    let cart = CartFile {
        year: options.year.unwrap_or(game.year),
        genre: options.genre.unwrap_or_else(|| game.genre.code()),
        screenshot: options.screenshot.unwrap_or(game.screenshot),
        ngh: built.ngh,
        name: options.name.unwrap_or_else(|| game.name.to_string()),
        manufacturer: options
            .manufacturer
            .unwrap_or_else(|| game.manufacturer.to_string()),
        areas: built.areas,
    };

    let out_dir = match options.directory {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let out_path = out_dir.join(format!("{stem}.{EXTENSION}"));
    let bytes = cart.to_bytes();
    fs::write(&out_path, &bytes)?;

    println!(
        "{} {} ({} bytes)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        out_path.display(),
        bytes.len(),
    );

    Ok(())
}
