// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **API**: Backend location
//! - **Editors**: External editor entry points
//! - **Display**: AOI list pagination

// ==========================================================================
// API Defaults
// ==========================================================================

/// Root of the backend API. Label fetch and GPX endpoints live under it.
pub const DEFAULT_API_BASE_URL: &str = "https://fair-dev.hotosm.org/api/v1";

/// Environment variable holding the backend access token.
pub const ENV_ACCESS_TOKEN: &str = "AOI_PANEL_ACCESS_TOKEN";

// ==========================================================================
// Editor Defaults
// ==========================================================================

/// Entry point of the RapiD editor.
pub const DEFAULT_RAPID_URL: &str = "https://rapideditor.org/rapid";

/// Entry point of the iD editor on openstreetmap.org.
pub const DEFAULT_OSM_EDITOR_URL: &str = "https://www.openstreetmap.org/edit";

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Number of AOIs shown per page.
pub const DEFAULT_PAGE_SIZE: usize = crate::domain::ui::newtypes::page_size_bounds::DEFAULT;

/// Maximum number of AOIs per page.
pub const MAX_PAGE_SIZE: usize = crate::domain::ui::newtypes::page_size_bounds::MAX;
