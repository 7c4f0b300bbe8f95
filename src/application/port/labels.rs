// SPDX-License-Identifier: MPL-2.0
//! OSM label backend port.
//!
//! This module defines the [`LabelsBackend`] trait used by the AOI list to
//! ask the backend to pull OpenStreetMap labels inside an AOI.
//!
//! # Design Notes
//!
//! - The backend is cloned into each fetch task, so implementations should be
//!   cheap to clone (e.g. wrap a shared HTTP client)
//! - Credentials are part of the implementation, not of the call
//! - A response carrying an application-level `error` field is a successful
//!   transport that the backend rejected, see [`FetchOutcome::Rejected`]

use crate::domain::layer::AoiId;
use serde_json::Value;
use std::fmt;
use std::future::Future;

// =============================================================================
// LabelsError
// =============================================================================

/// Errors that prevent a label fetch from producing a response.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelsError {
    /// The request could not be sent or the connection failed.
    Transport(String),

    /// The backend answered with a non-success HTTP status.
    Status {
        /// HTTP status code.
        code: u16,
        /// Canonical reason phrase, if known.
        reason: Option<String>,
    },

    /// The response body was not valid JSON.
    Decode(String),
}

impl fmt::Display for LabelsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelsError::Transport(msg) => write!(f, "Request failed: {msg}"),
            LabelsError::Status { code, reason } => match reason {
                Some(reason) => write!(f, "HTTP status: {code} {reason}"),
                None => write!(f, "HTTP status: {code}"),
            },
            LabelsError::Decode(msg) => write!(f, "Invalid response body: {msg}"),
        }
    }
}

impl std::error::Error for LabelsError {}

/// Result type for label backend calls.
pub type LabelsResult<T> = Result<T, LabelsError>;

// =============================================================================
// FetchOutcome
// =============================================================================

/// Response of a completed label fetch request.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The backend accepted the request; the payload is opaque to the list.
    Fetched(Value),
    /// The backend answered with an `error` field.
    Rejected(String),
}

impl FetchOutcome {
    /// Classifies a decoded JSON response body.
    #[must_use]
    pub fn from_body(body: Value) -> Self {
        match body.get("error") {
            Some(Value::String(message)) => FetchOutcome::Rejected(message.clone()),
            Some(Value::Null) | None => FetchOutcome::Fetched(body),
            Some(other) => FetchOutcome::Rejected(other.to_string()),
        }
    }
}

// =============================================================================
// LabelsBackend Trait
// =============================================================================

/// Backend able to fetch OSM labels for an AOI.
pub trait LabelsBackend: Clone + Send + Sync + 'static {
    /// Asks the backend to fetch OSM labels inside the AOI.
    ///
    /// Exactly one request is issued per call.
    fn fetch_labels(
        &self,
        aoi_id: AoiId,
    ) -> impl Future<Output = LabelsResult<FetchOutcome>> + Send + 'static + use<Self>;
}
