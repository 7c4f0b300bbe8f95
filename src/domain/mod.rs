// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types and rules with no UI or I/O dependencies.
//!
//! Besides `std`, only `serde` derives are used so layers can be read
//! straight from the map container's JSON.
//!
//! # Modules
//!
//! - [`layer`]: Map layers ([`Layer`](layer::Layer), [`Area`](layer::Area),
//!   [`LatLng`](layer::LatLng)) and the vertex [`centroid`](layer::centroid)
//! - [`ui`]: UI value objects ([`PageSize`](ui::PageSize), [`PageNumber`](ui::PageNumber))

pub mod layer;
pub mod ui;
