// SPDX-License-Identifier: MPL-2.0
//! Config directory lookup.
//!
//! The first available source wins: an explicit override, then the
//! `--config-dir` flag, then `AOI_PANEL_CONFIG_DIR`, then the platform
//! config directory joined with [`APP_NAME`].

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name under the platform config directory.
pub const APP_NAME: &str = "AoiPanel";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "AOI_PANEL_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` flag. Only the first call has an effect.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("CLI config dir override already initialized");
    }
}

/// Returns the config directory, or `None` when no source yields one.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_config_dir(
        override_path,
        CLI_CONFIG_DIR.get().and_then(Clone::clone),
        std::env::var(ENV_CONFIG_DIR).ok(),
        dirs::config_dir(),
    )
}

/// Picks the config directory from its candidate sources.
///
/// An empty environment value counts as unset.
fn resolve_config_dir(
    override_path: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<String>,
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    override_path
        .or(cli)
        .or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
        .or_else(|| platform.map(|base| base.join(APP_NAME)))
}
