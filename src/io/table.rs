//! CSV tables and the bundle description handed to stitchers alongside the chart images

use crate::catalog::Palette;
use crate::generation::Pattern;
use crate::io::configuration::{
    CHART_FILE, INDICES_FILE, MAX_COLOR_INDEX, PALETTE_FILE, PREVIEW_FILE, STITCH_COUNTS_FILE,
};
use crate::spatial::Grid;

/// Color index table with a `y\x` header row and one line per grid row
pub fn indices_csv(grid: &Grid) -> String {
    let header = std::iter::once("y\\x".to_string())
        .chain((0..grid.size()).map(|col| col.to_string()))
        .collect::<Vec<_>>()
        .join(",");

    let mut lines = vec![header];
    for (row, values) in grid.rows().enumerate() {
        let line = std::iter::once(row.to_string())
            .chain(values.iter().map(u8::to_string))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(line);
    }
    lines.join("\n") + "\n"
}

/// Palette table mapping each index to its hex color
pub fn palette_csv(palette: &Palette) -> String {
    let mut out = String::from("index,hex\n");
    for (index, color) in palette.colors().iter().enumerate() {
        out.push_str(&format!("{index},{color}\n"));
    }
    out
}

/// Stitch count per color, including unused colors
pub fn stitch_counts_csv(grid: &Grid, palette: &Palette) -> String {
    let mut out = String::from("index,hex,stitches\n");
    for (index, (color, count)) in palette
        .colors()
        .iter()
        .zip(grid.stitch_counts())
        .enumerate()
    {
        out.push_str(&format!("{index},{color},{count}\n"));
    }
    out
}

/// Plain text description of a bundle and how to read it
pub fn readme_txt(pattern: &Pattern) -> String {
    let request = &pattern.request;
    let size = pattern.grid.size();
    [
        "Kaleidostitch bundle".to_string(),
        String::new(),
        format!("design: {}", request.design),
        format!("palette: {}", request.palette),
        format!("seed: {}", request.seed),
        format!("size: {size}x{size} stitches"),
        String::new(),
        format!("- {CHART_FILE}: colored blocks separated by gridlines"),
        format!("- {PREVIEW_FILE}: colored blocks, no grid"),
        format!("- {INDICES_FILE}: {size}x{size} color indices (0..{MAX_COLOR_INDEX})"),
        format!("- {PALETTE_FILE}: index to hex color"),
        format!("- {STITCH_COUNTS_FILE}: stitches per color index"),
        String::new(),
        "Notes:".to_string(),
        "- index 0 is background".to_string(),
        "- the design is D8 (8-way) symmetric".to_string(),
    ]
    .join("\n")
        + "\n"
}
