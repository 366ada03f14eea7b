//! neocart CLI
//!
//! Converts Neo Geo arcade ROM sets (a zip archive or a directory of dump
//! files) into `.neo` cartridge images, and inspects existing images.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;
mod error;

#[derive(Parser)]
#[command(name = "neocart")]
#[command(version)]
#[command(about = "Convert Neo Geo ROM sets into .neo cartridge images", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the metadata of a .neo cartridge image
    Info {
        /// Path to the cartridge image
        cart: PathBuf,

        /// Also print per-area sizes and SHA-1 digests
        #[arg(short, long)]
        verbose: bool,
    },

    /// Build a .neo cartridge image from a ROM set
    Convert {
        /// Path to the ROM container (zip archive or directory); its stem
        /// selects the catalogue entry
        container: PathBuf,

        /// Output directory (defaults to the current directory)
        #[arg(short, long)]
        directory: Option<PathBuf>,

        /// Override the game name stored in the header
        #[arg(long)]
        name: Option<String>,

        /// Override the manufacturer stored in the header
        #[arg(long)]
        manufacturer: Option<String>,

        /// Override the release year stored in the header
        #[arg(long)]
        year: Option<u32>,

        /// Override the genre code stored in the header
        #[arg(long)]
        genre: Option<u32>,

        /// Override the screenshot id stored in the header
        #[arg(long)]
        screenshot: Option<u32>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Info { cart, verbose } => commands::info::run(&cart, verbose),
        Commands::Convert {
            container,
            directory,
            name,
            manufacturer,
            year,
            genre,
            screenshot,
        } => commands::convert::run(commands::convert::Options {
            container,
            directory,
            name,
            manufacturer,
            year,
            genre,
            screenshot,
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("neocart: {err}");
            ExitCode::FAILURE
        }
    }
}
