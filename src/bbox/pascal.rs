//! Pascal VOC-style boxes: two opposite corners.

use log::trace;
use serde::{Deserialize, Serialize};

use super::{check_transition, BoundingBox, CocoBoundingBox};
use crate::box_type::BoxType;
use crate::coord::Coord;
use crate::error::{check_extent, Result};
use crate::space::CoordSpace;

/// A bounding box stored as `(xmin, ymin, xmax, ymax)`.
///
/// Width and height are derived from the corners.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PascalBoundingBox {
    pub min: Coord,
    pub max: Coord,
    normalized: bool,
}

impl PascalBoundingBox {
    /// Creates a box from its corners.
    ///
    /// Note: inverted corners are accepted here so that malformed boxes can be
    /// represented; use [`PascalBoundingBox::try_new`] to reject them.
    #[inline]
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64, normalized: bool) -> Self {
        Self {
            min: Coord::new(xmin, ymin),
            max: Coord::new(xmax, ymax),
            normalized,
        }
    }

    /// Creates a box, failing with
    /// [`BoxError::NegativeExtent`](crate::BoxError::NegativeExtent) if
    /// `xmax < xmin` or `ymax < ymin`.
    pub fn try_new(
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
        normalized: bool,
    ) -> Result<Self> {
        check_extent(xmax - xmin, ymax - ymin)?;
        Ok(Self::new(xmin, ymin, xmax, ymax, normalized))
    }

    fn scale(&mut self, sx: impl Fn(f64) -> f64, sy: impl Fn(f64) -> f64) {
        self.min = Coord::new(sx(self.min.x), sy(self.min.y));
        self.max = Coord::new(sx(self.max.x), sy(self.max.y));
    }
}

impl BoundingBox for PascalBoundingBox {
    #[inline]
    fn xmin(&self) -> f64 {
        self.min.x
    }

    #[inline]
    fn ymin(&self) -> f64 {
        self.min.y
    }

    #[inline]
    fn xmax(&self) -> f64 {
        self.max.x
    }

    #[inline]
    fn ymax(&self) -> f64 {
        self.max.y
    }

    /// May be negative if the box is malformed (xmax < xmin).
    #[inline]
    fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// May be negative if the box is malformed (ymax < ymin).
    #[inline]
    fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    fn box_type(&self) -> BoxType {
        BoxType::Pascal
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
        self.scale(|x| x / image_width, |y| y / image_height);
        self.normalized = true;
        trace!("normalized PASCAL box against {image_width}x{image_height} image");
        Ok(())
    }

    fn make_absolute(&mut self, image_height: f64, image_width: f64) -> Result<()> {
        check_transition(
            self.coord_space(),
            CoordSpace::Pixel,
            image_height,
            image_width,
        )?;
        self.scale(|x| x * image_width, |y| y * image_height);
        self.normalized = false;
        trace!("made PASCAL box absolute against {image_width}x{image_height} image");
        Ok(())
    }
}

impl From<CocoBoundingBox> for PascalBoundingBox {
    fn from(b: CocoBoundingBox) -> Self {
        Self::new(b.xmin(), b.ymin(), b.xmax(), b.ymax(), b.is_normalized())
    }
}

// Flat on the wire rather than nested `min`/`max` points.
impl Serialize for PascalBoundingBox {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("PascalBoundingBox", 5)?;
        state.serialize_field("xmin", &self.min.x)?;
        state.serialize_field("ymin", &self.min.y)?;
        state.serialize_field("xmax", &self.max.x)?;
        state.serialize_field("ymax", &self.max.y)?;
        state.serialize_field("normalized", &self.normalized)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for PascalBoundingBox {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct BoxData {
            xmin: f64,
            ymin: f64,
            xmax: f64,
            ymax: f64,
            #[serde(default)]
            normalized: bool,
        }
        let data = BoxData::deserialize(deserializer)?;
        Ok(PascalBoundingBox::new(
            data.xmin,
            data.ymin,
            data.xmax,
            data.ymax,
            data.normalized,
        ))
    }
}
