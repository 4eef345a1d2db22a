//! Command-line interface for the pattern codec and catalogue

use crate::catalogue::Catalogue;
use crate::codec::decode::deserialize_bounded;
use crate::codec::pattern::PatternObject;
use crate::codec::reencode::to_grid_text;
use crate::codec::serialize;
use crate::codec::soup::random_soup;
use crate::codec::validate::parse_package;
use crate::io::configuration::{
    DEFAULT_CATALOGUE_PATH, DEFAULT_RENDER_SCALE, DEFAULT_SEED, DEFAULT_SOUP_DENSITY,
    DEFAULT_SOUP_SIZE, PATTERN_FILE_EXTENSION,
};
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::io::image::export_pattern_as_png;
use crate::io::plaintext::read_pattern_file;
use crate::io::progress::ProgressManager;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "lifecat")]
#[command(
    author,
    version,
    about = "Convert, render and catalogue Game of Life patterns"
)]
/// Command-line arguments for the pattern tool
pub struct Cli {
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Catalogue document to operate on
    #[arg(short, long, global = true, default_value = DEFAULT_CATALOGUE_PATH)]
    pub catalogue: PathBuf,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Operations offered by the tool
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Decode a plaintext pattern file and print its pattern object
    Decode {
        /// Plaintext (`.cells`) file
        file: PathBuf,
    },

    /// Re-encode a pattern object JSON file and print its grid text
    Encode {
        /// Pattern object JSON file
        file: PathBuf,
    },

    /// Check that a pattern package JSON file would be accepted
    Validate {
        /// Pattern package JSON file
        file: PathBuf,
    },

    /// Render a pattern object JSON file as a PNG
    Render {
        /// Pattern object JSON file
        file: PathBuf,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,

        /// Pixel size of one cell
        #[arg(short, long, default_value_t = DEFAULT_RENDER_SCALE)]
        scale: u32,
    },

    /// Print a seeded random pattern object
    Soup {
        /// Board array size of the soup
        #[arg(long, default_value_t = DEFAULT_SOUP_SIZE)]
        size: i32,

        /// Probability of each cell being alive
        #[arg(short, long, default_value_t = DEFAULT_SOUP_DENSITY)]
        density: f64,

        /// Random seed for reproducible soups
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },

    /// Add a pattern package JSON file to the catalogue
    Add {
        /// Pattern package JSON file
        file: PathBuf,
    },

    /// Add every plaintext pattern file in a directory to the catalogue
    Import {
        /// Directory of `.cells` files
        directory: PathBuf,

        /// Username recorded against the imported patterns
        #[arg(short, long)]
        username: String,
    },

    /// Print a catalogue entry with its re-centred pattern object
    Get {
        /// Id of the entry
        pattern_id: u64,
    },

    /// List catalogue entries whose names start with a prefix
    Search {
        /// Name prefix; empty lists everything
        #[arg(default_value = "")]
        search: String,
    },

    /// Remove a catalogue entry submitted by the given user
    Remove {
        /// Id of the entry
        pattern_id: u64,

        /// Username the entry was submitted under
        #[arg(short, long)]
        username: String,
    },
}

/// Runs a parsed command, writing results to `out`
pub struct CommandRunner<W: Write> {
    cli: Cli,
    out: W,
}

impl<W: Write> CommandRunner<W> {
    /// Create a runner for the given arguments and output sink
    pub const fn new(cli: Cli, out: W) -> Self {
        Self { cli, out }
    }

    /// Consume the runner and return its output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if input files cannot be read or parsed, a pattern is
    /// malformed, a catalogue lookup fails, or output cannot be written
    pub fn run(&mut self) -> Result<()> {
        let Self { cli, out } = self;
        debug!(command = ?cli.command, "running command");

        match &cli.command {
            Command::Decode { file } => {
                let plaintext = read_pattern_file(file)?;
                let pattern = serialize(&deserialize_bounded(&plaintext.grid)?);
                write_json(out, &pattern)
            }
            Command::Encode { file } => {
                let pattern: PatternObject = read_json(file)?;
                writeln!(out, "{}", to_grid_text(&pattern)?)?;
                Ok(())
            }
            Command::Validate { file } => {
                let json = std::fs::read_to_string(file).with_path(file, "read package")?;
                let package = parse_package(&json)?;
                to_grid_text(&package.pattern_object)?;
                writeln!(out, "valid")?;
                Ok(())
            }
            Command::Render {
                file,
                output,
                scale,
            } => {
                let pattern: PatternObject = read_json(file)?;
                export_pattern_as_png(&pattern, *scale, output)?;
                info!(output = %output.display(), "pattern rendered");
                Ok(())
            }
            Command::Soup {
                size,
                density,
                seed,
            } => write_json(out, &random_soup(*size, *density, *seed)?),
            Command::Add { file } => {
                let json = std::fs::read_to_string(file).with_path(file, "read package")?;
                let package = parse_package(&json)?;
                let mut catalogue = Catalogue::open(&cli.catalogue)?;
                let pattern_id = catalogue.add(&package)?;
                catalogue.save()?;
                writeln!(out, "{pattern_id}")?;
                Ok(())
            }
            Command::Import {
                directory,
                username,
            } => {
                let mut catalogue = Catalogue::open(&cli.catalogue)?;
                let files = collect_pattern_files(directory)?;
                let mut progress = if cli.quiet {
                    ProgressManager::hidden(files.len())
                } else {
                    ProgressManager::new(files.len())
                };

                import_files(&mut catalogue, &files, username, &mut progress);
                progress.finish();
                catalogue.save()?;

                writeln!(
                    out,
                    "imported {}, skipped {}",
                    progress.imported_count(),
                    progress.skipped_count()
                )?;
                Ok(())
            }
            Command::Get { pattern_id } => {
                let catalogue = Catalogue::open(&cli.catalogue)?;
                write_json(out, &catalogue.get(*pattern_id)?)
            }
            Command::Search { search } => {
                let catalogue = Catalogue::open(&cli.catalogue)?;
                write_json(out, &catalogue.search(search))
            }
            Command::Remove {
                pattern_id,
                username,
            } => {
                let mut catalogue = Catalogue::open(&cli.catalogue)?;
                catalogue.remove(*pattern_id, username)?;
                catalogue.save()?;
                Ok(())
            }
        }
    }
}

/// Add each plaintext file to the catalogue, skipping unreadable or oversized ones
///
/// The entry name is the file's `!Name:` header, falling back to its stem.
pub fn import_files(
    catalogue: &mut Catalogue,
    files: &[PathBuf],
    username: &str,
    progress: &mut ProgressManager,
) {
    for path in files {
        let added = read_pattern_file(path).and_then(|plaintext| {
            let name = plaintext.name.unwrap_or_else(|| file_stem(path));
            catalogue.add_grid_text(&name, username, &plaintext.comments, &plaintext.grid)
        });
        match added {
            Ok(_) => progress.imported(path),
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping pattern file");
                progress.skipped(path);
            }
        }
    }
}

/// Plaintext pattern files directly inside `directory`, sorted by path
///
/// # Errors
///
/// Returns an error if `directory` is not a directory or cannot be listed
pub fn collect_pattern_files(directory: &Path) -> Result<Vec<PathBuf>> {
    if !directory.is_dir() {
        return Err(invalid_parameter(
            "directory",
            &directory.display(),
            &"must be a directory",
        ));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(directory).with_path(directory, "list directory")? {
        let path = entry.with_path(directory, "list directory")?.path();
        if path.is_file()
            && path.extension().and_then(|s| s.to_str()) == Some(PATTERN_FILE_EXTENSION)
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let json = std::fs::read_to_string(path).with_path(path, "read JSON")?;
    Ok(serde_json::from_str(&json)?)
}

fn write_json<W: Write>(out: &mut W, value: &impl serde::Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
