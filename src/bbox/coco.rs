//! COCO-style boxes: top-left origin plus extent.

use log::trace;
use serde::{Deserialize, Serialize};

use super::{check_transition, BoundingBox, PascalBoundingBox};
use crate::box_type::BoxType;
use crate::error::{check_extent, Result};
use crate::space::CoordSpace;

/// A bounding box stored as `(xmin, ymin, width, height)`.
///
/// `xmax` and `ymax` are derived from the origin and extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CocoBoundingBox {
    pub xmin: f64,
    pub ymin: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    normalized: bool,
}

impl CocoBoundingBox {
    /// Creates a box from its origin and extent.
    ///
    /// Note: negative extents are accepted here so that malformed boxes can be
    /// represented; use [`CocoBoundingBox::try_new`] to reject them.
    #[inline]
    pub fn new(xmin: f64, ymin: f64, height: f64, width: f64, normalized: bool) -> Self {
        Self {
            xmin,
            ymin,
            width,
            height,
            normalized,
        }
    }

    /// Creates a box, failing with
    /// [`BoxError::NegativeExtent`](crate::BoxError::NegativeExtent) if either
    /// extent is negative or NaN.
    pub fn try_new(
        xmin: f64,
        ymin: f64,
        height: f64,
        width: f64,
        normalized: bool,
    ) -> Result<Self> {
        check_extent(width, height)?;
        Ok(Self::new(xmin, ymin, height, width, normalized))
    }

    /// Returns the box as `(x, y, width, height)`.
    #[inline]
    pub fn to_xywh(&self) -> (f64, f64, f64, f64) {
        (self.xmin, self.ymin, self.width, self.height)
    }
}

impl BoundingBox for CocoBoundingBox {
    #[inline]
    fn xmin(&self) -> f64 {
        self.xmin
    }

    #[inline]
    fn ymin(&self) -> f64 {
        self.ymin
    }

    #[inline]
    fn xmax(&self) -> f64 {
        self.xmin + self.width
    }

    #[inline]
    fn ymax(&self) -> f64 {
        self.ymin + self.height
    }

    #[inline]
    fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    fn box_type(&self) -> BoxType {
        BoxType::Coco
    }

    #[inline]
    fn coord_space(&self) -> CoordSpace {
        CoordSpace::from_normalized(self.normalized)
    }

    fn normalize(&mut self, image_height: f64, image_width: f64) -> Result<()> {
        check_transition(
            self.coord_space(),
            CoordSpace::Normalized,
            image_height,
            image_width,
        )?;
        self.xmin /= image_width;
        self.ymin /= image_height;
        self.width /= image_width;
        self.height /= image_height;
        self.normalized = true;
        trace!("normalized COCO box against {image_width}x{image_height} image");
        Ok(())
    }

    fn make_absolute(&mut self, image_height: f64, image_width: f64) -> Result<()> {
        check_transition(
            self.coord_space(),
            CoordSpace::Pixel,
            image_height,
            image_width,
        )?;
        self.xmin *= image_width;
        self.ymin *= image_height;
        self.width *= image_width;
        self.height *= image_height;
        self.normalized = false;
        trace!("made COCO box absolute against {image_width}x{image_height} image");
        Ok(())
    }
}

impl From<PascalBoundingBox> for CocoBoundingBox {
    fn from(b: PascalBoundingBox) -> Self {
        Self::new(b.xmin(), b.ymin(), b.height(), b.width(), b.is_normalized())
    }
}
