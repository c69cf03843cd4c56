//! Error types for pattern generation and bundle export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pattern operations
#[derive(Debug)]
pub enum PatternError {
    /// No design is registered under the requested name
    UnknownDesign {
        /// Requested design name
        name: String,
        /// Registered design names, sorted
        available: Vec<String>,
    },

    /// No palette is registered under the requested name
    UnknownPalette {
        /// Requested palette name
        name: String,
        /// Registered palette names, sorted
        available: Vec<String>,
    },

    /// Palette definition does not hold exactly seven valid colors
    InvalidPalette {
        /// Description of what's wrong with the palette
        reason: String,
    },

    /// Grid size has no center-fixed symmetry or exceeds the size limit
    ///
    /// Occurs when the size is:
    /// - Zero or even
    /// - Larger than the configured maximum
    InvalidGridSize {
        /// Requested side length
        size: usize,
    },

    /// A design generator produced a value outside the palette range
    InvalidColorIndex {
        /// Value returned by the generator
        value: i32,
        /// Fundamental domain cell (x, y) that produced it
        cell: [usize; 2],
    },

    /// Grid is not the expected square shape
    ShapeMismatch {
        /// Expected side length
        expected: usize,
        /// Actual dimensions (rows, cols)
        actual: (usize, usize),
    },

    /// Grid cell holds a value outside the palette range
    ValueOutOfRange {
        /// Offending value
        value: u8,
        /// Grid position [row, col]
        position: [usize; 2],
    },

    /// Two cells in the same symmetry orbit hold different values
    SymmetryViolation {
        /// Grid position [row, col] that was checked
        position: [usize; 2],
        /// Image of `position` under `transform`
        image: [usize; 2],
        /// Name of the transform that exposed the mismatch
        transform: &'static str,
    },

    /// Delivery parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDesign { name, available } => {
                write!(
                    f,
                    "Unknown design '{name}' (available: {})",
                    available.join(", ")
                )
            }
            Self::UnknownPalette { name, available } => {
                write!(
                    f,
                    "Unknown palette '{name}' (available: {})",
                    available.join(", ")
                )
            }
            Self::InvalidPalette { reason } => {
                write!(f, "Invalid palette: {reason}")
            }
            Self::InvalidGridSize { size } => {
                write!(
                    f,
                    "Invalid grid size {size}: must be odd, positive and at most {}",
                    crate::io::configuration::MAX_GRID_SIZE
                )
            }
            Self::InvalidColorIndex { value, cell } => {
                write!(
                    f,
                    "Design produced color index {value} at domain cell ({}, {}), expected 0..={}",
                    cell[0],
                    cell[1],
                    crate::io::configuration::MAX_COLOR_INDEX
                )
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "Grid shape {}x{} does not match expected {expected}x{expected}",
                    actual.0, actual.1
                )
            }
            Self::ValueOutOfRange { value, position } => {
                write!(
                    f,
                    "Cell value {value} at ({}, {}) is outside the palette range",
                    position[0], position[1]
                )
            }
            Self::SymmetryViolation {
                position,
                image,
                transform,
            } => {
                write!(
                    f,
                    "Symmetry violation: cell ({}, {}) differs from its {transform} image ({}, {})",
                    position[0], position[1], image[0], image[1]
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl PatternError {
    /// Whether the error comes from the generation engine rather than delivery
    pub const fn is_engine_error(&self) -> bool {
        !matches!(
            self,
            Self::InvalidParameter { .. } | Self::ImageExport { .. } | Self::FileSystem { .. }
        )
    }
}

/// Convenience type alias for pattern results
pub type Result<T> = std::result::Result<T, PatternError>;

impl From<image::ImageError> for PatternError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for PatternError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PatternError {
    PatternError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid palette error
pub fn invalid_palette(reason: &impl ToString) -> PatternError {
    PatternError::InvalidPalette {
        reason: reason.to_string(),
    }
}

/// Create a file system error for a failed operation on `path`
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> PatternError {
    PatternError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
