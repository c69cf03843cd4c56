//! The D8 symmetry group and grid invariant checks

/// Transforms, grid frame and symmetry orbits
pub mod transform;
/// Shape, range and symmetry validation
pub mod validator;

pub use transform::{Frame, Transform};
pub use validator::validate;
