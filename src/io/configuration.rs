//! Codec constants and runtime configuration defaults

// Grid text markers
/// Character marking a live cell in grid text
pub const ALIVE_MARKER: char = 'O';
/// Character written for a dead cell in grid text
pub const DEAD_MARKER: char = '.';
/// Separator between grid text rows
pub const LINE_SEPARATOR: char = '\n';
/// Leading character of a comment line in plaintext pattern files
pub const COMMENT_MARKER: char = '!';

// Safety limit to prevent excessive memory allocation
/// Maximum accepted `boardArraySize` when building a board from a pattern object
pub const MAX_BOARD_ARRAY_SIZE: i32 = 2048;

/// Characters kept by the catalogue search filter besides ASCII alphanumerics
pub const SEARCH_EXTRA_CHARACTERS: &[char] = &[' ', '_', '.', '-'];

// Catalogue settings
/// Default location of the catalogue document
pub const DEFAULT_CATALOGUE_PATH: &str = "data/catalogue.json";
/// First id handed out by an empty catalogue
pub const FIRST_PATTERN_ID: u64 = 1;
/// Extension of plaintext pattern files picked up by batch import
pub const PATTERN_FILE_EXTENSION: &str = "cells";

// Default values for configurable parameters
/// Fixed seed for reproducible soups
pub const DEFAULT_SEED: u64 = 42;
/// Default probability of a soup cell being alive
pub const DEFAULT_SOUP_DENSITY: f64 = 0.375;
/// Default `boardArraySize` of generated soups
pub const DEFAULT_SOUP_SIZE: i32 = 8;

// Output settings
/// Default pixel size of one cell in rendered PNGs
pub const DEFAULT_RENDER_SCALE: u32 = 8;
/// Largest rendered image side in pixels
pub const MAX_RENDER_SIDE: u32 = 16_384;
/// RGBA colour of live cells in rendered PNGs
pub const ALIVE_COLOR: [u8; 4] = [0, 0, 0, 255];
/// RGBA colour of dead cells in rendered PNGs
pub const DEAD_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
