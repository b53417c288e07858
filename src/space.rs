//! Coordinate space of a bounding box.
//!
//! Boxes move between spaces at runtime via `normalize` and `make_absolute`,
//! so the space is a value rather than a type parameter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The unit system a box's coordinates are currently expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordSpace {
    /// Absolute pixel positions, with (0, 0) at the top-left corner.
    #[default]
    Pixel,
    /// Fractions of the image dimensions, typically within 0.0 to 1.0.
    Normalized,
}

impl CoordSpace {
    /// Maps a normalized flag onto a space.
    #[inline]
    pub fn from_normalized(normalized: bool) -> Self {
        if normalized {
            CoordSpace::Normalized
        } else {
            CoordSpace::Pixel
        }
    }

    /// Returns true for [`CoordSpace::Normalized`].
    #[inline]
    pub fn is_normalized(&self) -> bool {
        matches!(self, CoordSpace::Normalized)
    }
}

impl fmt::Display for CoordSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordSpace::Pixel => f.write_str("pixel"),
            CoordSpace::Normalized => f.write_str("normalized"),
        }
    }
}
