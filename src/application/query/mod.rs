// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! This module contains query services for reading domain data.
//! These services do not modify the data they read.
//!
//! # Available Services
//!
//! - [`pagination`]: AOI filtering and page windows (`Paginator`)

pub mod pagination;

// Re-export main types
pub use pagination::{filter_aois, PageInfo, Paginator};
