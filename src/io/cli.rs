//! Command-line interface writing chart bundles for one or more seeds

use crate::generation::engine::{self, Engine, Pattern, PatternRequest};
use crate::io::configuration::{
    BUNDLE_PREFIX, CHART_FILE, DEFAULT_CELL_PIXELS, DEFAULT_COUNT, DEFAULT_DESIGN,
    DEFAULT_GRID_SIZE, DEFAULT_GRIDLINE_PIXELS, DEFAULT_OUTPUT_DIR, DEFAULT_PALETTE, DEFAULT_SEED,
    DEFAULT_LOG_FILTER, INDICES_FILE, MAX_CELL_PIXELS, MAX_GRIDLINE_PIXELS, MAX_IMAGE_SIDE_PIXELS,
    PALETTE_FILE, PREVIEW_FILE, QUIET_LOG_FILTER, README_FILE, STITCH_COUNTS_FILE,
};
use crate::io::error::{Result, file_system, invalid_parameter};
use crate::io::image::{chart_side, preview_side, render_chart, render_preview, save_png};
use crate::io::progress::ProgressManager;
use crate::io::table::{indices_csv, palette_csv, readme_txt, stitch_counts_csv};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "kaleidostitch")]
#[command(
    author,
    version,
    about = "Generate kaleidoscopic cross-stitch charts with 8-way symmetry"
)]
/// Command-line arguments for the chart generator
pub struct Cli {
    /// Design to generate
    #[arg(short, long, default_value = DEFAULT_DESIGN)]
    pub design: String,

    /// Palette to color the chart with
    #[arg(short, long, default_value = DEFAULT_PALETTE)]
    pub palette: String,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Chart side length in stitches (odd)
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Number of consecutive seeds to generate, starting at --seed
    #[arg(short, long, default_value_t = DEFAULT_COUNT,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub count: u64,

    /// Chart cell size in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_PIXELS,
          value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_CELL_PIXELS)))]
    pub cell: u32,

    /// Gridline thickness in pixels
    #[arg(short, long, default_value_t = DEFAULT_GRIDLINE_PIXELS,
          value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_GRIDLINE_PIXELS)))]
    pub gridline: u32,

    /// Output directory, created if missing
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub out: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Regenerate bundles even if their directory exists
    #[arg(long)]
    pub no_skip: bool,

    /// List available designs and palettes, then exit
    #[arg(short, long)]
    pub list: bool,
}

impl Cli {
    /// Check if existing bundles should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter, overridden by `RUST_LOG`
    pub const fn log_filter(&self) -> &'static str {
        if self.quiet {
            QUIET_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        }
    }

    /// Check the batch and rendering settings before any generation work
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - the batch would run past the largest seed
    /// - the rendering settings are out of range or the images would be too large
    pub fn validate(&self) -> Result<()> {
        if self.seed.checked_add(self.count.saturating_sub(1)).is_none() {
            return Err(invalid_parameter(
                "count",
                &self.count,
                &format!("seeds starting at {} would run past {}", self.seed, u64::MAX),
            ));
        }
        check_rendering(self.size, self.cell, self.gridline)
    }

    /// Requests for every seed in the batch, produced lazily
    ///
    /// Stops at the largest seed instead of wrapping around.
    pub fn requests(&self) -> impl Iterator<Item = PatternRequest> + use<> {
        let template = PatternRequest::new(self.design.as_str(), self.palette.as_str())
            .with_size(self.size);
        let first = self.seed;
        (0..self.count).map_while(move |offset| {
            first
                .checked_add(offset)
                .map(|seed| template.clone().with_seed(seed))
        })
    }
}

/// Orchestrates bundle generation with progress tracking
pub struct BundleProcessor {
    cli: Cli,
    engine: &'static Engine,
    progress_manager: Option<ProgressManager>,
}

impl BundleProcessor {
    /// Create a processor using the built-in engine
    pub fn new(cli: Cli) -> Self {
        Self::with_engine(cli, engine::builtin())
    }

    /// Create a processor using a custom engine
    pub fn with_engine(cli: Cli, engine: &'static Engine) -> Self {
        let progress_manager = cli
            .should_show_progress()
            .then(|| ProgressManager::new(cli.count));

        Self {
            cli,
            engine,
            progress_manager,
        }
    }

    /// Generate and write bundles according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the batch or rendering settings are invalid (`InvalidParameter`)
    /// - a name or size is rejected by the engine
    /// - a bundle file cannot be written
    ///
    /// Bundles written before a failure are kept.
    pub fn process(&mut self) -> Result<()> {
        if self.cli.list {
            self.print_catalog();
            return Ok(());
        }

        let result = self.cli.validate().and_then(|()| self.process_requests());

        // The bar is cleared on failure too, so errors print on a clean line
        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        result
    }

    /// Progress display, `None` under `--quiet`
    pub const fn progress(&self) -> Option<&ProgressManager> {
        self.progress_manager.as_ref()
    }

    // Allow print for the discovery listing
    #[allow(clippy::print_stdout)]
    fn print_catalog(&self) {
        println!("designs:");
        for name in self.engine.list_designs() {
            println!("  {name}");
        }
        println!("palettes:");
        for name in self.engine.list_palettes() {
            println!("  {name}");
        }
    }

    fn process_requests(&mut self) -> Result<()> {
        for request in self.cli.requests() {
            self.process_request(&request)?;
        }
        Ok(())
    }

    // Allow print for user feedback on skipped bundles
    #[allow(clippy::print_stderr)]
    fn process_request(&mut self, request: &PatternRequest) -> Result<()> {
        let bundle_dir = self.cli.out.join(Self::bundle_name(request));

        if self.cli.skip_existing() && bundle_dir.exists() {
            if let Some(ref mut pm) = self.progress_manager {
                pm.skip_pattern();
            }
            if !self.cli.quiet {
                eprintln!("Skipping: {} (bundle exists)", bundle_dir.display());
            }
            return Ok(());
        }

        if let Some(ref pm) = self.progress_manager {
            pm.start_pattern(&request.title());
        }

        let pattern = self.engine.pattern(request)?;
        write_bundle(&pattern, &bundle_dir, self.cli.cell, self.cli.gridline)?;
        log::info!("generated {} into {}", request.title(), bundle_dir.display());

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_pattern();
        }

        Ok(())
    }

    /// Directory name of the bundle for a request
    pub fn bundle_name(request: &PatternRequest) -> String {
        format!(
            "{BUNDLE_PREFIX}_{}_{}_seed{}",
            request.design, request.palette, request.seed
        )
    }
}

/// Write chart, preview and tables for a pattern into `dir`
///
/// # Errors
///
/// Returns an error if:
/// - the rendering settings are rejected by [`check_rendering`]
/// - the directory or any bundle file cannot be written
pub fn write_bundle(pattern: &Pattern, dir: &Path, cell: u32, gridline: u32) -> Result<()> {
    check_rendering(pattern.grid.size(), cell, gridline)?;

    std::fs::create_dir_all(dir).map_err(|e| file_system(dir, "create directory", e))?;

    save_png(
        &render_chart(&pattern.grid, &pattern.palette, cell, gridline),
        &dir.join(CHART_FILE),
    )?;
    save_png(
        &render_preview(&pattern.grid, &pattern.palette, cell),
        &dir.join(PREVIEW_FILE),
    )?;

    write_text(&dir.join(INDICES_FILE), &indices_csv(&pattern.grid))?;
    write_text(&dir.join(PALETTE_FILE), &palette_csv(&pattern.palette))?;
    write_text(
        &dir.join(STITCH_COUNTS_FILE),
        &stitch_counts_csv(&pattern.grid, &pattern.palette),
    )?;
    write_text(&dir.join(README_FILE), &readme_txt(pattern))?;

    Ok(())
}

/// Check cell and gridline sizes and the resulting image dimensions
///
/// # Errors
///
/// Returns `InvalidParameter` if `cell` is outside `1..=MAX_CELL_PIXELS`,
/// `gridline` is above `MAX_GRIDLINE_PIXELS`, or the chart or preview of a
/// `size` grid would be wider than `MAX_IMAGE_SIDE_PIXELS`
pub fn check_rendering(size: usize, cell: u32, gridline: u32) -> Result<()> {
    if cell == 0 || cell > MAX_CELL_PIXELS {
        return Err(invalid_parameter(
            "cell",
            &cell,
            &format!("must be between 1 and {MAX_CELL_PIXELS} pixels"),
        ));
    }
    if gridline > MAX_GRIDLINE_PIXELS {
        return Err(invalid_parameter(
            "gridline",
            &gridline,
            &format!("must be at most {MAX_GRIDLINE_PIXELS} pixels"),
        ));
    }

    let side = chart_side(size, cell, gridline).max(preview_side(size, cell));
    if side > MAX_IMAGE_SIDE_PIXELS {
        return Err(invalid_parameter(
            "size",
            &size,
            &format!("images would be {side} pixels wide, limit is {MAX_IMAGE_SIDE_PIXELS}"),
        ));
    }
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| file_system(path, "write", e))?;
    log::debug!("wrote {}", path.display());
    Ok(())
}
