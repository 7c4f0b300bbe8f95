// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Page Size Bounds
// =============================================================================

/// Bounds for the number of AOIs shown per page.
pub mod page_size_bounds {
    /// Minimum items per page.
    pub const MIN: usize = 1;
    /// Maximum items per page.
    pub const MAX: usize = 50;
    /// Default items per page.
    pub const DEFAULT: usize = 5;
}

// =============================================================================
// PageSize
// =============================================================================

/// Number of items per page, guaranteed to be within valid range (1–50).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(usize);

impl PageSize {
    /// Creates a new page size, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(page_size_bounds::MIN, page_size_bounds::MAX))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(page_size_bounds::DEFAULT)
    }
}

// =============================================================================
// PageNumber
// =============================================================================

/// A 1-indexed page number.
///
/// Only the lower bound is enforced. A page past the end is valid and
/// selects an empty slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(usize);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(1);

    /// Creates a page number. Zero becomes the first page.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.max(1))
    }

    /// Returns the 1-indexed value.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns the 0-indexed offset of the page.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 - 1
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}
