// SPDX-License-Identifier: MPL-2.0
//! Map layer value objects.
//!
//! Layers are supplied by the map container as JSON. Identifiers and areas
//! arrive either as strings or as numbers depending on where the layer was
//! created, so both forms are accepted and normalized here.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// Category tag of layers shown in the AOI list.
pub const AOI_LAYER_TYPE: &str = "aoi";

// =============================================================================
// Identifiers
// =============================================================================

/// Accepts a JSON string or number and keeps its textual form.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Integer(value) => value.to_string(),
        Raw::Float(value) => value.to_string(),
    })
}

/// Opaque layer identifier, used as the render key of a list row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct LayerId(#[serde(deserialize_with = "text_or_number")] String);

impl LayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Backend identifier of an area of interest.
///
/// Used in the label fetch endpoint and in the GPX link handed to editors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct AoiId(#[serde(deserialize_with = "text_or_number")] String);

impl AoiId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AoiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// LatLng
// =============================================================================

/// A polygon vertex in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

// =============================================================================
// Area
// =============================================================================

/// Area in square meters below which an AOI is suspected to be a label.
pub const SMALL_AREA_THRESHOLD_SQM: f64 = 5000.0;

/// Polygon area as received, in square meters.
///
/// An absent or `null` area, or one of any other JSON type, is `Missing`.
/// It displays as not-a-number and never fails the layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Area {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl<'de> Deserialize<'de> for Area {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Number(number)) => number.as_f64().map_or(Area::Missing, Area::Number),
            Some(Value::String(text)) => Area::Text(text),
            _ => Area::Missing,
        })
    }
}

/// Reads the decimal integer at the start of `text`.
///
/// Leading whitespace and a sign are accepted; everything after the first
/// non-digit is ignored, so `"1234 sqm"` is 1234 and `"1e4"` is 1.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    // Digits only, so this always parses; `as` saturates past `i64`
    let magnitude = digits.parse::<f64>().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    Some(value as i64)
}

impl Area {
    /// Returns the whole number of square meters, or `None` when there is none.
    ///
    /// Numbers are truncated toward zero. Text yields its leading integer.
    #[must_use]
    pub fn whole_square_meters(&self) -> Option<i64> {
        match self {
            // `as` saturates on overflow, which is the expected display behavior
            Area::Number(value) => value.is_finite().then(|| value.trunc() as i64),
            Area::Text(text) => leading_integer(text),
            Area::Missing => None,
        }
    }

    /// Returns whether the area is small enough to look like a label.
    ///
    /// Unparseable areas never trigger the warning.
    #[must_use]
    pub fn is_suspiciously_small(&self) -> bool {
        self.whole_square_meters()
            .is_some_and(|value| (value as f64) < SMALL_AREA_THRESHOLD_SQM)
    }
}

impl From<f64> for Area {
    fn from(value: f64) -> Self {
        Area::Number(value)
    }
}

impl From<&str> for Area {
    fn from(value: &str) -> Self {
        Area::Text(value.to_string())
    }
}

// =============================================================================
// Layer
// =============================================================================

/// A map layer drawn in the dataset editor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub id: LayerId,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub aoi_id: Option<AoiId>,
    #[serde(default)]
    pub area: Area,
    #[serde(default)]
    pub latlngs: Vec<LatLng>,
}

impl Layer {
    /// Returns whether this layer is an area of interest.
    #[must_use]
    pub fn is_aoi(&self) -> bool {
        self.kind == AOI_LAYER_TYPE
    }
}
