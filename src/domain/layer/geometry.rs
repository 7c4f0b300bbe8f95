// SPDX-License-Identifier: MPL-2.0
//! Polygon geometry used to recenter the map on a layer.

use super::types::LatLng;

/// Map zoom level requested when zooming to a layer.
pub const ZOOM_TO_LAYER_LEVEL: u8 = 17;

/// Returns the arithmetic mean of the polygon vertices.
///
/// This is a vertex average, not an area-weighted centroid. It is only used
/// to pick a point to recenter the viewport on. An empty polygon yields
/// `NaN` coordinates.
#[must_use]
pub fn centroid(latlngs: &[LatLng]) -> LatLng {
    let count = latlngs.len() as f64;
    let (lat_sum, lng_sum) = latlngs
        .iter()
        .fold((0.0, 0.0), |(lat, lng), point| (lat + point.lat, lng + point.lng));

    LatLng::new(lat_sum / count, lng_sum / count)
}
