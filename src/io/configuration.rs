//! Pattern constants and runtime configuration defaults

// Palette layout
/// Number of colors in every palette, background included
pub const PALETTE_SIZE: usize = 7;
/// Largest valid color index
pub const MAX_COLOR_INDEX: u8 = 6;
/// Index reserved for the background tone
pub const BACKGROUND_INDEX: u8 = 0;

// Grid limits
/// Default chart side length in stitches
pub const DEFAULT_GRID_SIZE: usize = 35;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid side length
pub const MAX_GRID_SIZE: usize = 9_999;

// Default values for configurable parameters
/// Default seed
pub const DEFAULT_SEED: u64 = 0;
/// Design used when none is requested
pub const DEFAULT_DESIGN: &str = "rings-spokes";
/// Palette used when none is requested
pub const DEFAULT_PALETTE: &str = "jewel-bazaar";
/// Number of consecutive seeds generated per invocation
pub const DEFAULT_COUNT: u64 = 1;

// Chart rendering
/// Chart cell size in pixels
pub const DEFAULT_CELL_PIXELS: u32 = 22;
/// Largest accepted chart cell size
pub const MAX_CELL_PIXELS: u32 = 60;
/// Gridline thickness in pixels
pub const DEFAULT_GRIDLINE_PIXELS: u32 = 1;
/// Largest accepted gridline thickness
pub const MAX_GRIDLINE_PIXELS: u32 = 4;
/// Smallest preview cell size, previews use half the chart cell size
pub const MIN_PREVIEW_CELL_PIXELS: u32 = 6;
/// Largest side of a rendered chart or preview image
pub const MAX_IMAGE_SIDE_PIXELS: u64 = 16_384;
/// Gridline and border color
pub const GRIDLINE_COLOR: [u8; 3] = [230, 230, 230];

// Output settings
/// Directory bundles are written into
pub const DEFAULT_OUTPUT_DIR: &str = "out";
/// Prefix of every bundle directory name
pub const BUNDLE_PREFIX: &str = "kaleido";
/// Chart image file name
pub const CHART_FILE: &str = "chart.png";
/// Preview image file name
pub const PREVIEW_FILE: &str = "preview.png";
/// Color index table file name
pub const INDICES_FILE: &str = "pattern_indices.csv";
/// Palette table file name
pub const PALETTE_FILE: &str = "palette.csv";
/// Stitch count table file name
pub const STITCH_COUNTS_FILE: &str = "stitch_counts.csv";
/// Plain text description of the bundle
pub const README_FILE: &str = "README.txt";

// Logging
/// Log filter when neither `RUST_LOG` nor `--quiet` is given
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Log filter under `--quiet`
pub const QUIET_LOG_FILTER: &str = "warn";
