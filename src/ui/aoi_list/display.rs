// SPDX-License-Identifier: MPL-2.0
//! Text derived from layer values for display.

use crate::domain::layer::{Area, LatLng};
use crate::i18n::fluent::I18n;

/// Shown in place of an area that is not a number.
pub const NOT_A_NUMBER: &str = "NaN";

/// Formats `value` with `separator` between groups of three digits.
#[must_use]
pub fn group_thousands(value: i64, separator: &str) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len() + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// Formats an area as a grouped integer, or [`NOT_A_NUMBER`].
#[must_use]
pub fn format_area(area: &Area, separator: &str) -> String {
    area.whole_square_meters()
        .map_or_else(|| NOT_A_NUMBER.to_string(), |value| group_thousands(value, separator))
}

/// Returns the localized area line of an item.
pub fn area_line(i18n: &I18n, area: &Area) -> String {
    let separator = i18n.tr("number-group-separator");
    let formatted = format_area(area, &separator);
    i18n.tr_with_args("aoi-list-area", &[("area", formatted.as_str())])
}

/// Returns the localized status text for a zoom target.
pub fn zoom_status(i18n: &I18n, center: LatLng, zoom: u8) -> String {
    let lat = format!("{:.5}", center.lat);
    let lng = format!("{:.5}", center.lng);
    let zoom = zoom.to_string();
    i18n.tr_with_args(
        "status-zoom-to",
        &[("lat", lat.as_str()), ("lng", lng.as_str()), ("zoom", zoom.as_str())],
    )
}
