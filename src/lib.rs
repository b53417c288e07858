//! bboxkit: bounding box primitives for annotation pipelines.
//!
//! Boxes come in two encodings, COCO (origin plus extent) and Pascal VOC
//! (two corners), both implementing the [`BoundingBox`] trait. A box can be
//! moved between pixel and normalized coordinates in place, and two boxes of
//! the same encoding can be scored with [`iou`].
//!
//! # Modules
//!
//! - [`bbox`]: The [`BoundingBox`] trait and the two encodings
//! - [`iou`](mod@iou): Intersection over Union
//! - [`error`]: Error types for bounding box operations
//!
//! # Example
//!
//! ```
//! use bboxkit::{iou, BoundingBox, BoxError, CocoBoundingBox};
//!
//! let mut a = CocoBoundingBox::new(64.0, 48.0, 96.0, 128.0, false);
//! let mut b = CocoBoundingBox::new(128.0, 96.0, 96.0, 128.0, false);
//!
//! a.normalize(480.0, 640.0)?;
//! b.normalize(480.0, 640.0)?;
//! assert!(matches!(a.normalize(480.0, 640.0), Err(BoxError::AlreadyNormalized)));
//!
//! let score = iou(&a, &b)?;
//! assert!(score > 0.0 && score < 1.0);
//! # Ok::<(), BoxError>(())
//! ```

pub mod bbox;
mod box_type;
mod coord;
pub mod error;
pub mod iou;
mod space;

pub use bbox::{BoundingBox, CocoBoundingBox, PascalBoundingBox};
pub use box_type::BoxType;
pub use coord::Coord;
pub use error::{BoxError, Result};
pub use iou::{intersection_over_union, iou};
pub use space::CoordSpace;
