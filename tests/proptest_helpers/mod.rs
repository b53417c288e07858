#![allow(dead_code)]

use bboxkit::{CocoBoundingBox, PascalBoundingBox};
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

/// Relative tolerance for normalize/make_absolute round trips.
pub const EPS_ROUNDTRIP: f64 = 1e-9;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps * a.abs().max(b.abs()).max(1.0)
}

/// Image dimensions in pixels.
pub fn arb_image_size() -> impl Strategy<Value = (f64, f64)> {
    (1u32..=4096, 1u32..=4096).prop_map(|(h, w)| (h as f64, w as f64))
}

/// A well-formed pixel-space COCO box with positive extents.
pub fn arb_coco_box() -> impl Strategy<Value = CocoBoundingBox> {
    (0.0..1000.0f64, 0.0..1000.0f64, 0.5..500.0f64, 0.5..500.0f64)
        .prop_map(|(x, y, h, w)| CocoBoundingBox::new(x, y, h, w, false))
}

/// A well-formed pixel-space Pascal box with positive extents.
pub fn arb_pascal_box() -> impl Strategy<Value = PascalBoundingBox> {
    (0.0..1000.0f64, 0.0..1000.0f64, 0.5..500.0f64, 0.5..500.0f64)
        .prop_map(|(x, y, w, h)| PascalBoundingBox::new(x, y, x + w, y + h, false))
}

/// A well-formed normalized COCO box lying inside the unit square.
pub fn arb_normalized_coco_box() -> impl Strategy<Value = CocoBoundingBox> {
    (0.0..0.5f64, 0.0..0.5f64, 0.001..0.5f64, 0.001..0.5f64)
        .prop_map(|(x, y, h, w)| CocoBoundingBox::new(x, y, h, w, true))
}
