//! PNG export of patterns

use crate::codec::pattern::PatternObject;
use crate::codec::reencode::board_from_pattern;
use crate::io::configuration::{ALIVE_COLOR, DEAD_COLOR, MAX_RENDER_SIDE};
use crate::io::error::{LifecatError, Result, WithPath, invalid_parameter};
use crate::spatial::Board;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Pixel side of a board rendered at `scale`
///
/// # Errors
///
/// Returns [`LifecatError::InvalidParameter`] if `scale` is zero or the image
/// side would exceed [`MAX_RENDER_SIDE`]
pub fn image_side(board: &Board, scale: u32) -> Result<u32> {
    if scale == 0 {
        return Err(invalid_parameter("scale", &scale, &"must be at least 1"));
    }
    u32::try_from(board.side())
        .ok()
        .and_then(|side| side.checked_mul(scale))
        .filter(|&side| side <= MAX_RENDER_SIDE)
        .ok_or_else(|| {
            invalid_parameter(
                "scale",
                &scale,
                &format!(
                    "a {0}x{0} board would exceed {MAX_RENDER_SIDE} pixels per side",
                    board.side()
                ),
            )
        })
}

/// Draw a board with each cell as a `scale`-pixel square
///
/// Row `min` is the top of the image and column `min` the left edge.
///
/// # Errors
///
/// Returns an error if `scale` is rejected by [`image_side`]
pub fn render_board(board: &Board, scale: u32) -> Result<RgbaImage> {
    let side = image_side(board, scale)?;
    let min = board.min();

    Ok(ImageBuffer::from_fn(side, side, |x, y| {
        let i = min + (y / scale) as i32;
        let j = min + (x / scale) as i32;
        let alive = board.get(i, j).is_some_and(|cell| cell.is_alive());
        Rgba(if alive { ALIVE_COLOR } else { DEAD_COLOR })
    }))
}

/// Export a pattern object as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is zero or makes the image wider than [`MAX_RENDER_SIDE`]
/// - The pattern object is malformed
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_pattern_as_png(pattern: &PatternObject, scale: u32, output_path: &Path) -> Result<()> {
    let board = board_from_pattern(pattern)?;
    let img = render_board(&board, scale)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    img.save(output_path)
        .map_err(|e| LifecatError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
