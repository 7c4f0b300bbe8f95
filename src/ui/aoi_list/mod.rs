// SPDX-License-Identifier: MPL-2.0
//! Paginated list of the AOI layers drawn on the map.
//!
//! Each item can be handed over to an external editor, can trigger an OSM
//! label fetch on the backend, and can recenter the map on its polygon.
//! The list never mutates the layer collection; it only keeps the page
//! index, the in-flight fetches and the last fetch payload.

pub mod component;
pub mod display;
mod empty_state;
pub mod pagination;
mod view;

pub use component::{Event, Message, State};
pub use view::{view, ViewEnv};
