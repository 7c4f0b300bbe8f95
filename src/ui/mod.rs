// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`aoi_list`] - Paginated AOI list with editor, fetch and zoom actions
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod aoi_list;
pub mod design_tokens;
pub mod styles;
