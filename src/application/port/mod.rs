// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`labels`]: OSM label fetching for an AOI
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `reqwest` types)
//! - Methods return `Result` with port error types
//! - Futures are `Send + 'static` so callers can hand them to Iced's `Task::perform`

pub mod labels;

// Re-export main types for convenience
pub use labels::{FetchOutcome, LabelsBackend, LabelsError, LabelsResult};
