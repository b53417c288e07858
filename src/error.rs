use thiserror::Error;

use crate::box_type::BoxType;

/// Result alias for bounding box operations.
pub type Result<T> = std::result::Result<T, BoxError>;

/// The error type for bounding box operations.
///
/// Every variant is recoverable: the box involved is never left partially
/// modified.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum BoxError {
    #[error("IoU is computed only between boxes of the same type. Found {type1} and {type2}")]
    MismatchedBoxes { type1: BoxType, type2: BoxType },

    #[error("The boxes are already normalized. They cannot be re-normalized.")]
    AlreadyNormalized,

    #[error("The boxes are already in absolute form. They cannot be made absolute again.")]
    AlreadyAbsolute,

    #[error("Image dimensions must be finite and positive, got height={height} width={width}")]
    InvalidImageSize { height: f64, width: f64 },

    #[error("Bounding box has a negative extent: width={width} height={height}")]
    NegativeExtent { width: f64, height: f64 },
}

/// Checks image dimensions before a coordinate-space transition.
pub(crate) fn check_image_size(image_height: f64, image_width: f64) -> Result<()> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if valid(image_height) && valid(image_width) {
        Ok(())
    } else {
        Err(BoxError::InvalidImageSize {
            height: image_height,
            width: image_width,
        })
    }
}

/// Checks that a width/height pair is non-negative (NaN is rejected too).
pub(crate) fn check_extent(width: f64, height: f64) -> Result<()> {
    if width >= 0.0 && height >= 0.0 {
        Ok(())
    } else {
        Err(BoxError::NegativeExtent { width, height })
    }
}
