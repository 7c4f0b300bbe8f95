// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and layer fixtures.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

use crate::domain::layer::{AoiId, Area, LatLng, Layer, LayerId, AOI_LAYER_TYPE};

/// Default epsilon for f64 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F64_EPSILON: f64 = 1e-10;

/// Builds an AOI layer with a large area and a unit square boundary.
pub fn aoi_layer(id: &str, aoi_id: &str) -> Layer {
    Layer {
        id: LayerId::new(id),
        kind: AOI_LAYER_TYPE.to_string(),
        aoi_id: Some(AoiId::new(aoi_id)),
        area: Area::from("25000"),
        latlngs: vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 1.0),
            LatLng::new(1.0, 1.0),
            LatLng::new(1.0, 0.0),
        ],
    }
}

/// Builds a non-AOI layer that the list must ignore.
pub fn label_layer(id: &str) -> Layer {
    Layer {
        id: LayerId::new(id),
        kind: "label".to_string(),
        aoi_id: None,
        area: Area::from(120.0),
        latlngs: vec![LatLng::new(0.0, 0.0)],
    }
}

/// Builds `count` AOI layers with ids `0..count`.
pub fn aoi_layers(count: usize) -> Vec<Layer> {
    (0..count)
        .map(|i| aoi_layer(&i.to_string(), &format!("{}", 100 + i)))
        .collect()
}
