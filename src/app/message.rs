// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::layer::Layer;
use crate::error::Error;
use crate::ui::aoi_list;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    AoiList(aoi_list::Message),
    /// Result of reading the layers file given on the command line.
    LayersLoaded(Result<Vec<Layer>, Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `AOI_PANEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional access token for the backend API.
    /// Takes precedence over `AOI_PANEL_ACCESS_TOKEN` and the config file.
    pub token: Option<String>,
    /// Optional custom imagery tile URL handed to the editors.
    pub imagery: Option<String>,
    /// JSON file holding the map layers.
    pub layers_path: Option<String>,
}
