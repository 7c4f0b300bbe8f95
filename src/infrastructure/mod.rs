// SPDX-License-Identifier: MPL-2.0
//! Adapters for the outside world: the backend HTTP API and the layers file.

pub mod http;
pub mod layers_file;

pub use http::{AccessToken, HttpLabelsClient};
pub use layers_file::load_layers;
