//! Intersection over Union (IoU) between two bounding boxes.

use log::debug;

use crate::bbox::BoundingBox;
use crate::error::{BoxError, Result};

/// Computes the IoU of two boxes of the same encoding.
///
/// Fails with [`BoxError::MismatchedBoxes`] when the boxes have different
/// [`BoxType`](crate::BoxType)s; convert one of them first with `From` to
/// compare across encodings.
///
/// Both boxes must be in the same coordinate space (both pixel or both
/// normalized). This is not checked: mixing spaces yields a meaningless ratio.
///
/// # Example
///
/// ```
/// use bboxkit::{iou, PascalBoundingBox};
///
/// let a = PascalBoundingBox::new(0.0, 0.0, 10.0, 10.0, false);
/// let b = PascalBoundingBox::new(5.0, 5.0, 15.0, 15.0, false);
/// let score = iou(&a, &b).unwrap();
/// assert!((score - 25.0 / 175.0).abs() < 1e-12);
/// ```
pub fn iou<A, B>(box1: &A, box2: &B) -> Result<f64>
where
    A: BoundingBox + ?Sized,
    B: BoundingBox + ?Sized,
{
    let (type1, type2) = (box1.box_type(), box2.box_type());
    if type1 != type2 {
        debug!("refusing IoU between {type1} and {type2} boxes");
        return Err(BoxError::MismatchedBoxes { type1, type2 });
    }
    Ok(intersection_over_union(box1, box2))
}

/// Computes the IoU of two boxes without checking their encodings.
///
/// Returns exactly `0.0` when the boxes do not overlap, including boxes that
/// only touch along an edge or at a corner; the union is not computed in that
/// case. The result lies in `[0, 1]` for boxes with non-negative extents.
///
/// A NaN coordinate on either box yields NaN.
pub fn intersection_over_union<A, B>(box1: &A, box2: &B) -> f64
where
    A: BoundingBox + ?Sized,
    B: BoundingBox + ?Sized,
{
    // f64::max/min drop a NaN operand, so check before clamping.
    if has_nan_corner(box1) || has_nan_corner(box2) {
        return f64::NAN;
    }

    let x_a = box1.xmin().max(box2.xmin());
    let y_a = box1.ymin().max(box2.ymin());
    let x_b = box1.xmax().min(box2.xmax());
    let y_b = box1.ymax().min(box2.ymax());

    let inter_area = (x_b - x_a).max(0.0) * (y_b - y_a).max(0.0);
    if inter_area == 0.0 {
        return 0.0;
    }

    inter_area / (box1.area() + box2.area() - inter_area)
}

fn has_nan_corner<T: BoundingBox + ?Sized>(b: &T) -> bool {
    b.xmin().is_nan() || b.ymin().is_nan() || b.xmax().is_nan() || b.ymax().is_nan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoxType, CocoBoundingBox, PascalBoundingBox};

    #[test]
    fn partial_overlap() {
        let a = PascalBoundingBox::new(0.0, 0.0, 10.0, 10.0, false);
        let b = PascalBoundingBox::new(5.0, 5.0, 15.0, 15.0, false);
        let score = iou(&a, &b).unwrap();
        assert!((score - 0.142857).abs() < 1e-6);
    }

    #[test]
    fn touching_corners_is_zero() {
        let a = CocoBoundingBox::new(0.0, 0.0, 2.0, 2.0, false);
        let b = CocoBoundingBox::new(2.0, 2.0, 2.0, 2.0, false);
        assert_eq!(iou(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn degenerate_points_do_not_divide_by_zero() {
        let a = CocoBoundingBox::new(3.0, 3.0, 0.0, 0.0, false);
        let score = iou(&a, &a).unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn mismatched_types_fail() {
        let a = CocoBoundingBox::new(0.0, 0.0, 1.0, 1.0, false);
        let b = PascalBoundingBox::new(0.0, 0.0, 1.0, 1.0, false);
        assert_eq!(
            iou(&a, &b),
            Err(BoxError::MismatchedBoxes {
                type1: BoxType::Coco,
                type2: BoxType::Pascal
            })
        );
        // The unchecked form still compares geometry.
        assert_eq!(intersection_over_union(&a, &b), 1.0);
    }

    #[test]
    fn nan_coordinate_yields_nan() {
        let coco = CocoBoundingBox::new(f64::NAN, 0.0, 10.0, 10.0, false);
        let clean_coco = CocoBoundingBox::new(0.0, 0.0, 10.0, 10.0, false);
        assert!(iou(&coco, &clean_coco).unwrap().is_nan());
        assert!(iou(&clean_coco, &coco).unwrap().is_nan());

        let pascal = PascalBoundingBox::new(0.0, 0.0, f64::NAN, 10.0, false);
        let clean_pascal = PascalBoundingBox::new(0.0, 0.0, 10.0, 10.0, false);
        assert!(iou(&pascal, &clean_pascal).unwrap().is_nan());

        let far = PascalBoundingBox::new(f64::NAN, 50.0, 60.0, 60.0, false);
        assert!(intersection_over_union(&far, &clean_pascal).is_nan());
    }

    #[test]
    fn works_through_trait_objects() {
        let a: &dyn BoundingBox = &CocoBoundingBox::new(0.0, 0.0, 4.0, 4.0, true);
        let b: &dyn BoundingBox = &CocoBoundingBox::new(0.0, 0.0, 4.0, 2.0, true);
        assert_eq!(iou(a, b).unwrap(), 0.5);
    }
}
