// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.

use super::{Message, Status};
use crate::domain::layer::Layer;
use crate::error::Error;
use crate::infrastructure::HttpLabelsClient;
use crate::ui::aoi_list::{self, Event as AoiListEvent};
use iced::Task;
use url::Url;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub aoi_list: &'a mut aoi_list::State,
    pub backend: &'a HttpLabelsClient,
    pub status: &'a mut Status,
}

/// Routes a top-level message to its handler.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::AoiList(message) => handle_aoi_list_message(ctx, message),
        Message::LayersLoaded(result) => {
            handle_layers_loaded(ctx, result);
            Task::none()
        }
    }
}

fn handle_aoi_list_message(ctx: &mut UpdateContext<'_>, message: aoi_list::Message) -> Task<Message> {
    let (event, task) = ctx.aoi_list.update(message, ctx.backend);
    handle_aoi_list_event(ctx.status, event, open_in_browser);
    task.map(Message::AoiList)
}

/// Applies an event of the list; `open_url` performs the browser handoff.
pub fn handle_aoi_list_event(
    status: &mut Status,
    event: AoiListEvent,
    open_url: impl FnOnce(&Url) -> std::io::Result<()>,
) {
    match event {
        AoiListEvent::None => {}
        AoiListEvent::OpenUrl(url) => {
            if let Err(err) = open_url(&url) {
                tracing::error!(url = %url, error = %err, "failed to open browser");
                *status = Status::Warning("status-browser-open-error".to_string());
            }
        }
        AoiListEvent::ZoomTo { center, zoom } => {
            tracing::info!(lat = center.lat, lng = center.lng, zoom, "zoom to layer");
            *status = Status::ZoomedTo { center, zoom };
        }
    }
}

fn handle_layers_loaded(ctx: &mut UpdateContext<'_>, result: Result<Vec<Layer>, Error>) {
    match result {
        Ok(layers) => ctx.aoi_list.set_layers(layers),
        Err(err) => {
            tracing::error!(error = %err, "failed to load layers");
            *ctx.status = Status::Warning("status-layers-load-error".to_string());
        }
    }
}

fn open_in_browser(url: &Url) -> std::io::Result<()> {
    webbrowser::open(url.as_str())
}
