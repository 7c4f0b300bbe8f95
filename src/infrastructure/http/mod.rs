// SPDX-License-Identifier: MPL-2.0
//! `reqwest` adapter for the [`LabelsBackend`] port.
//!
//! The access token is handed to the client when it is built, so every
//! request it issues carries the same credential.
//!
//! [`LabelsBackend`]: crate::application::port::LabelsBackend

use crate::application::port::{FetchOutcome, LabelsBackend, LabelsError, LabelsResult};
use crate::domain::layer::AoiId;
use crate::error::Result;
use reqwest::header::HeaderValue;
use serde_json::Value;
use std::fmt;
use std::future::Future;

/// Header carrying the user's access token.
pub const ACCESS_TOKEN_HEADER: &str = "access-token";

/// User agent sent with backend requests.
const USER_AGENT: &str = concat!("AoiPanel/", env!("CARGO_PKG_VERSION"));

/// Backend access token.
///
/// The value is never printed by `Debug`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// HTTP client for the label endpoints of the backend API.
#[derive(Debug, Clone)]
pub struct HttpLabelsClient {
    client: reqwest::Client,
    base_url: String,
    token: AccessToken,
}

impl HttpLabelsClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error if the underlying client cannot be built.
    pub fn new(base_url: &str, token: AccessToken) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self::with_client(client, base_url, token))
    }

    /// Creates a client on top of an already configured `reqwest::Client`.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: &str, token: AccessToken) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Returns the label fetch endpoint for `aoi_id`.
    #[must_use]
    pub fn fetch_url(&self, aoi_id: &AoiId) -> String {
        format!("{}/label/osm/fetch/{}/", self.base_url, aoi_id)
    }

    /// Builds the label fetch request without sending it.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the URL or the token is not valid in a request.
    pub fn build_request(&self, aoi_id: &AoiId) -> LabelsResult<reqwest::Request> {
        let mut token = HeaderValue::from_str(self.token.expose())
            .map_err(|e| LabelsError::Transport(format!("invalid access token: {e}")))?;
        token.set_sensitive(true);

        self.client
            .post(self.fetch_url(aoi_id))
            .header(ACCESS_TOKEN_HEADER, token)
            .build()
            .map_err(|e| LabelsError::Transport(e.to_string()))
    }
}

impl LabelsBackend for HttpLabelsClient {
    fn fetch_labels(
        &self,
        aoi_id: AoiId,
    ) -> impl Future<Output = LabelsResult<FetchOutcome>> + Send + 'static + use<> {
        let client = self.client.clone();
        let request = self.build_request(&aoi_id);

        async move {
            let response = client
                .execute(request?)
                .await
                .map_err(|e| LabelsError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(LabelsError::Status {
                    code: status.as_u16(),
                    reason: status.canonical_reason().map(str::to_string),
                });
            }

            let body: Value = response
                .json()
                .await
                .map_err(|e| LabelsError::Decode(e.to_string()))?;

            Ok(FetchOutcome::from_body(body))
        }
    }
}
