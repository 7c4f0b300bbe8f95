// SPDX-License-Identifier: MPL-2.0
//! Links that hand an AOI over to an external OSM editor.
//!
//! Both editors receive the background imagery, a fixed starting viewport
//! and a GPX track of the AOI boundary served by the backend, so mappers can
//! draw labels inside it.

use crate::domain::layer::AoiId;
use crate::error::Result;
use std::fmt;
use url::Url;

/// Background used when no custom imagery is configured.
pub const DEFAULT_BACKGROUND: &str = "Bing";

/// External editors an AOI can be opened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Editor {
    /// The RapiD editor, with AI-assisted road and building datasets.
    Rapid,
    /// The iD editor hosted on openstreetmap.org.
    OsmId,
}

/// Custom aerial imagery shown behind the AOI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Imagery {
    /// Tile URL template understood by the editors.
    pub url: String,
}

impl Imagery {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Initial editor viewport, rendered as `zoom/lat/lng`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub lat: f64,
    pub lng: f64,
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}/{:.4}/{:.4}", self.zoom, self.lat, self.lng)
    }
}

/// Starting viewport of the RapiD editor.
pub const RAPID_VIEWPORT: Viewport = Viewport {
    zoom: 16.0,
    lat: 17.9253,
    lng: 120.4841,
};

/// Starting viewport of the iD editor.
pub const OSM_ID_VIEWPORT: Viewport = Viewport {
    zoom: 10.7,
    lat: 18.9226,
    lng: 81.6991,
};

/// Datasets enabled in RapiD.
const RAPID_DATASETS: &str = "fbRoads,msBuildings";

/// Map features hidden in both editors.
const DISABLED_FEATURES: &str = "boundaries";

/// Builds editor URLs for AOIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorLinks {
    rapid_url: Url,
    osm_url: Url,
    api_base_url: String,
}

impl EditorLinks {
    /// Creates the link builder from the configured base URLs.
    ///
    /// # Errors
    ///
    /// Returns a config error if an editor URL does not parse.
    pub fn new(rapid_url: &str, osm_url: &str, api_base_url: &str) -> Result<Self> {
        Ok(Self {
            rapid_url: Url::parse(rapid_url)?,
            osm_url: Url::parse(osm_url)?,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the `background` value for the given imagery.
    #[must_use]
    pub fn background(imagery: Option<&Imagery>) -> String {
        match imagery {
            Some(imagery) => format!("custom:{}", imagery.url),
            None => DEFAULT_BACKGROUND.to_string(),
        }
    }

    /// Returns the GPX track URL of the AOI boundary.
    #[must_use]
    pub fn gpx_url(&self, aoi_id: &AoiId) -> String {
        format!("{}/aoi/gpx/{}", self.api_base_url, aoi_id)
    }

    /// Returns the URL opening `aoi_id` in `editor`.
    #[must_use]
    pub fn url_for(&self, editor: Editor, aoi_id: &AoiId, imagery: Option<&Imagery>) -> Url {
        let background = Self::background(imagery);
        let gpx = self.gpx_url(aoi_id);

        let (mut url, fragment) = match editor {
            Editor::Rapid => (
                self.rapid_url.clone(),
                format!(
                    "background={background}&datasets={RAPID_DATASETS}&disable_features={DISABLED_FEATURES}&map={RAPID_VIEWPORT}&gpx={gpx}"
                ),
            ),
            Editor::OsmId => (
                self.osm_url.clone(),
                format!(
                    "background={background}&disable_features={DISABLED_FEATURES}&gpx={gpx}&map={OSM_ID_VIEWPORT}"
                ),
            ),
        };

        url.set_fragment(Some(&fragment));
        url
    }
}
