// SPDX-License-Identifier: MPL-2.0
//! Map layer domain types and geometry helpers.

pub mod geometry;
pub mod types;

pub use geometry::{centroid, ZOOM_TO_LAYER_LEVEL};
pub use types::{AoiId, Area, LatLng, Layer, LayerId, AOI_LAYER_TYPE, SMALL_AREA_THRESHOLD_SQM};
