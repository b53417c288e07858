//! The bounding box abstraction and its two encodings.
//!
//! [`BoundingBox`] is the capability set shared by every encoding: geometric
//! queries in the box's current units, the coordinate-space flag, and the two
//! transitions between pixel and normalized coordinates. Each encoding stores
//! only its native fields and derives the rest on demand.

mod coco;
mod pascal;

pub use coco::CocoBoundingBox;
pub use pascal::PascalBoundingBox;

use crate::box_type::BoxType;
use crate::coord::Coord;
use crate::error::{check_image_size, BoxError, Result};
use crate::space::CoordSpace;

/// An axis-aligned bounding box.
///
/// All geometric queries return values in the box's current units: pixels
/// when absolute, fractions of the image when normalized.
pub trait BoundingBox {
    /// Returns the minimum x coordinate.
    fn xmin(&self) -> f64;

    /// Returns the minimum y coordinate.
    fn ymin(&self) -> f64;

    /// Returns the maximum x coordinate.
    fn xmax(&self) -> f64;

    /// Returns the maximum y coordinate.
    fn ymax(&self) -> f64;

    /// Returns the width of the bounding box.
    fn width(&self) -> f64;

    /// Returns the height of the bounding box.
    fn height(&self) -> f64;

    /// Returns the native encoding of this box.
    fn box_type(&self) -> BoxType;

    /// Returns the coordinate space the box is currently expressed in.
    fn coord_space(&self) -> CoordSpace;

    /// Converts pixel coordinates into fractions of the image size.
    ///
    /// Fails with [`BoxError::AlreadyNormalized`] if the box is already
    /// normalized, or [`BoxError::InvalidImageSize`] if either dimension is
    /// not finite and positive. The box is unchanged on failure.
    fn normalize(&mut self, image_height: f64, image_width: f64) -> Result<()>;

    /// Converts normalized coordinates back into pixels.
    ///
    /// Fails with [`BoxError::AlreadyAbsolute`] if the box is already in
    /// pixel space, or [`BoxError::InvalidImageSize`]. The box is unchanged
    /// on failure.
    fn make_absolute(&mut self, image_height: f64, image_width: f64) -> Result<()>;

    /// Returns true if the box is in normalized coordinates.
    #[inline]
    fn is_normalized(&self) -> bool {
        self.coord_space().is_normalized()
    }

    /// Returns `height / width`.
    ///
    /// A zero-width box yields `+Inf` (or `NaN` if the height is zero too).
    #[inline]
    fn aspect_ratio(&self) -> f64 {
        self.height() / self.width()
    }

    /// Returns the center point as `(x, y)`.
    #[inline]
    fn center(&self) -> (f64, f64) {
        (
            self.xmin() + self.width() / 2.0,
            self.ymin() + self.height() / 2.0,
        )
    }

    /// Returns the area of the bounding box.
    ///
    /// May be negative if the box is malformed.
    #[inline]
    fn area(&self) -> f64 {
        self.height() * self.width()
    }

    /// Returns the top-left and bottom-right corners.
    #[inline]
    fn corners(&self) -> (Coord, Coord) {
        (
            Coord::new(self.xmin(), self.ymin()),
            Coord::new(self.xmax(), self.ymax()),
        )
    }

    /// Returns true if all coordinates are finite (not NaN or infinite).
    #[inline]
    fn is_finite(&self) -> bool {
        let (min, max) = self.corners();
        min.is_finite() && max.is_finite()
    }

    /// Returns true if both extents are non-negative.
    #[inline]
    fn is_ordered(&self) -> bool {
        self.width() >= 0.0 && self.height() >= 0.0
    }
}

/// Validates a coordinate-space transition before any field is written.
pub(crate) fn check_transition(
    current: CoordSpace,
    target: CoordSpace,
    image_height: f64,
    image_width: f64,
) -> Result<()> {
    if current == target {
        return Err(match target {
            CoordSpace::Normalized => BoxError::AlreadyNormalized,
            CoordSpace::Pixel => BoxError::AlreadyAbsolute,
        });
    }
    check_image_size(image_height, image_width)
}
