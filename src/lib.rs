// SPDX-License-Identifier: MPL-2.0
//! `aoi_panel` is a side panel listing the areas of interest (AOIs) drawn on
//! a training dataset map, built with the Iced GUI framework.
//!
//! Each AOI can be opened in the RapiD or iD editors to draw labels, can ask
//! the backend to fetch existing OpenStreetMap labels, and can recenter the
//! map on itself.

#![doc(html_root_url = "https://docs.rs/aoi_panel/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
mod test_utils;
