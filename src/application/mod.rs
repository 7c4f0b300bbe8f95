// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Query services (CQRS read-side)
//! - [`editor_links`]: Editor handoff URLs
//! - [`fetch`]: OSM label fetch use case
//! - [`single_flight`]: Per-key in-flight guard
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use aoi_panel::application::port::LabelsBackend;
//! use aoi_panel::application::query::Paginator;
//!
//! // Infrastructure implements the port trait
//! #[derive(Clone)]
//! struct FakeBackend;
//! impl LabelsBackend for FakeBackend { /* ... */ }
//!
//! // Application services use domain types
//! let paginator = Paginator::default();
//! ```

pub mod editor_links;
pub mod fetch;
pub mod port;
pub mod query;
pub mod single_flight;
