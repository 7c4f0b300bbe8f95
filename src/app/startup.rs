// SPDX-License-Identifier: MPL-2.0
//! Resolution of everything the application needs before the first frame.

use super::{paths, Flags};
use crate::application::editor_links::{EditorLinks, Imagery};
use crate::config::{self, Config, ENV_ACCESS_TOKEN};
use crate::error::Result;
use crate::infrastructure::{AccessToken, HttpLabelsClient};
use std::path::PathBuf;

/// Startup state shared with the boot closure.
#[derive(Debug, Clone)]
pub struct Startup {
    pub lang: Option<String>,
    pub layers_path: Option<PathBuf>,
    pub config: Config,
    pub config_warning: Option<String>,
    pub backend: HttpLabelsClient,
    pub links: EditorLinks,
    pub imagery: Option<Imagery>,
}

/// Picks the access token: CLI flag, then environment, then config file.
///
/// Blank values are skipped. Without any token, requests carry an empty header.
#[must_use]
pub fn resolve_access_token(
    cli_token: Option<String>,
    env_token: Option<String>,
    config: &Config,
) -> AccessToken {
    [cli_token, env_token, config.api.access_token.clone()]
        .into_iter()
        .flatten()
        .map(|token| token.trim().to_string())
        .find(|token| !token.is_empty())
        .map(AccessToken::new)
        .unwrap_or_default()
}

/// Loads the configuration and builds the backend client and link builder.
///
/// # Errors
///
/// Returns an error if a configured URL is invalid or the HTTP client
/// cannot be built.
pub fn prepare(flags: Flags) -> Result<Startup> {
    paths::init_cli_overrides(flags.config_dir);
    let (config, config_warning) = config::load();

    let token = resolve_access_token(flags.token, std::env::var(ENV_ACCESS_TOKEN).ok(), &config);
    if token.is_empty() {
        tracing::warn!("no access token configured, backend calls will be rejected");
    }

    let backend = HttpLabelsClient::new(&config.api.base_url, token)?;
    let links = EditorLinks::new(
        &config.editors.rapid_url,
        &config.editors.osm_url,
        &config.api.base_url,
    )?;
    let imagery = flags
        .imagery
        .filter(|url| !url.trim().is_empty())
        .map(Imagery::new)
        .or_else(|| config.imagery.imagery());

    Ok(Startup {
        lang: flags.lang,
        layers_path: flags.layers_path.map(PathBuf::from),
        config,
        config_warning,
        backend,
        links,
        imagery,
    })
}
