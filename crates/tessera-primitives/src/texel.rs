//! Image texels.

use serde::{Deserialize, Serialize};

/// An image texel, addressed by its top-left corner.
///
/// The image origin is the top-left corner, with y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Texel {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Texel {
    /// Create a texel.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
