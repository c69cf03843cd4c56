//! PNG chart and preview rasterization of a finished pattern

use image::RgbImage;
use std::path::Path;

use crate::catalog::Palette;
use crate::io::configuration::{GRIDLINE_COLOR, MIN_PREVIEW_CELL_PIXELS};
use crate::io::error::{PatternError, Result, file_system};
use crate::spatial::Grid;

/// Rasterize a stitch chart: one colored block per cell, separated by gridlines
///
/// The image is `N * cell + (N + 1) * gridline` pixels square. A zero
/// gridline produces plain blocks with no border.
pub fn render_chart(grid: &Grid, palette: &Palette, cell: u32, gridline: u32) -> RgbImage {
    let side = chart_side(grid.size(), cell, gridline) as u32;
    let mut img = RgbImage::from_pixel(side, side, image::Rgb(GRIDLINE_COLOR));

    paint_blocks(&mut img, grid, palette, cell, gridline);
    img
}

/// Rasterize a borderless preview at half the chart cell size
pub fn render_preview(grid: &Grid, palette: &Palette, chart_cell: u32) -> RgbImage {
    let cell = preview_cell_pixels(chart_cell);
    let side = preview_side(grid.size(), chart_cell) as u32;
    let mut img = RgbImage::from_pixel(side, side, image::Rgb(palette.background().channels()));

    paint_blocks(&mut img, grid, palette, cell, 0);
    img
}

/// Chart image side in pixels for a grid of side `size`
pub fn chart_side(size: usize, cell: u32, gridline: u32) -> u64 {
    let size = size as u64;
    size.saturating_mul(u64::from(cell))
        .saturating_add(size.saturating_add(1).saturating_mul(u64::from(gridline)))
}

/// Preview image side in pixels for a grid of side `size`
pub fn preview_side(size: usize, chart_cell: u32) -> u64 {
    (size as u64).saturating_mul(u64::from(preview_cell_pixels(chart_cell)))
}

/// Preview cell size for a chart cell size
pub fn preview_cell_pixels(chart_cell: u32) -> u32 {
    (chart_cell / 2).max(MIN_PREVIEW_CELL_PIXELS)
}

fn paint_blocks(img: &mut RgbImage, grid: &Grid, palette: &Palette, cell: u32, gridline: u32) {
    for (row, values) in grid.rows().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            // Validated grids never hold an index past the palette
            let color = palette.color(value).unwrap_or_else(|| palette.background());
            let pixel = image::Rgb(color.channels());

            let x0 = col as u32 * cell + (col as u32 + 1) * gridline;
            let y0 = row as u32 * cell + (row as u32 + 1) * gridline;
            for y in y0..y0 + cell {
                for x in x0..x0 + cell {
                    if let Some(target) = img.get_pixel_mut_checked(x, y) {
                        *target = pixel;
                    }
                }
            }
        }
    }
}

/// Save an image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to `path`
pub fn save_png(img: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system(parent, "create directory", e))?;
    }

    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| PatternError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })?;

    log::debug!("wrote {}", path.display());
    Ok(())
}
