// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the AOI list.
//!
//! The `App` struct plays the part of the map container: it owns the layer
//! collection, wires the label backend into the list and performs the side
//! effects the list asks for (browser handoff, viewport recentering).

mod message;
pub mod paths;
pub mod startup;
pub mod telemetry;
mod update;
mod view;

pub use message::{Flags, Message};
pub use startup::Startup;

use crate::domain::layer::LatLng;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{self, HttpLabelsClient};
use crate::ui::aoi_list;
use iced::{window, Element, Task, Theme};
use std::fmt;

/// Text shown where the map would be.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Ready,
    /// The viewport was last sent to `center` at `zoom`.
    ZoomedTo { center: LatLng, zoom: u8 },
    /// Translation key of a warning to show.
    Warning(String),
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    aoi_list: aoi_list::State,
    backend: HttpLabelsClient,
    status: Status,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("aoi_count", &self.aoi_list.aoi_count())
            .field("status", &self.status)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// # Errors
///
/// Returns an error if startup resolution fails or the event loop exits
/// with an error.
pub fn run(flags: Flags) -> crate::error::Result<()> {
    let startup = startup::prepare(flags)?;

    // iced 0.14 requires a `Fn` boot function
    let boot = move || App::new(startup.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()?;
    Ok(())
}

impl App {
    /// Initializes application state and starts loading the layers file.
    fn new(startup: Startup) -> (Self, Task<Message>) {
        let Startup {
            lang,
            layers_path,
            config,
            config_warning,
            backend,
            links,
            imagery,
        } = startup;

        let i18n = I18n::new(lang, &config);
        let mut aoi_list = aoi_list::State::new(links, config.display.page_size());
        aoi_list.set_imagery(imagery);

        let status = config_warning.map_or(Status::Ready, Status::Warning);

        let app = App {
            i18n,
            aoi_list,
            backend,
            status,
        };

        let task = match layers_path {
            Some(path) => Task::perform(
                async move { infrastructure::load_layers(&path) },
                Message::LayersLoaded,
            ),
            None => {
                tracing::info!("no layers file given, starting with an empty map");
                Task::none()
            }
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            aoi_list: &mut self.aoi_list,
            backend: &self.backend,
            status: &mut self.status,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            aoi_list: &self.aoi_list,
            status: &self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::editor_links::EditorLinks;
    use crate::config::Config;
    use crate::domain::ui::PageNumber;
    use crate::error::Error;
    use crate::infrastructure::AccessToken;
    use crate::test_utils::aoi_layers;

    fn startup() -> Startup {
        let config = Config::default();
        Startup {
            lang: Some("en-US".to_string()),
            layers_path: None,
            backend: HttpLabelsClient::new(&config.api.base_url, AccessToken::new("t"))
                .expect("client builds"),
            links: EditorLinks::new(
                &config.editors.rapid_url,
                &config.editors.osm_url,
                &config.api.base_url,
            )
            .expect("default urls are valid"),
            config,
            config_warning: None,
            imagery: None,
        }
    }

    #[test]
    fn new_app_starts_ready_and_empty() {
        let (app, _) = App::new(startup());
        assert_eq!(app.status, Status::Ready);
        assert_eq!(app.aoi_list.aoi_count(), 0);
        assert_eq!(app.title(), "AOI Panel");
    }

    #[test]
    fn config_warning_is_shown_in_status() {
        let mut startup = startup();
        startup.config_warning = Some("notification-config-load-error".to_string());
        let (app, _) = App::new(startup);
        assert_eq!(
            app.status,
            Status::Warning("notification-config-load-error".to_string())
        );
    }

    #[test]
    fn loaded_layers_reach_the_list() {
        let (mut app, _) = App::new(startup());
        let _ = app.update(Message::LayersLoaded(Ok(aoi_layers(7))));

        assert_eq!(app.aoi_list.aoi_count(), 7);
        assert!(app.aoi_list.page_info().show_controls);
    }

    #[test]
    fn layer_load_failure_sets_warning() {
        let (mut app, _) = App::new(startup());
        let _ = app.update(Message::LayersLoaded(Err(Error::Io("gone".into()))));
        assert_eq!(
            app.status,
            Status::Warning("status-layers-load-error".to_string())
        );
    }

    #[test]
    fn zoom_message_updates_status_through_the_list() {
        let (mut app, _) = App::new(startup());
        let _ = app.update(Message::LayersLoaded(Ok(aoi_layers(1))));

        let _ = app.update(Message::AoiList(aoi_list::Message::ZoomTo(
            crate::domain::layer::LayerId::new("0"),
        )));

        assert!(matches!(app.status, Status::ZoomedTo { zoom: 17, .. }));
    }

    #[test]
    fn page_selection_is_forwarded() {
        let (mut app, _) = App::new(startup());
        let _ = app.update(Message::LayersLoaded(Ok(aoi_layers(12))));
        let _ = app.update(Message::AoiList(aoi_list::Message::PageSelected(
            PageNumber::new(2),
        )));
        assert_eq!(app.aoi_list.page_info().page, PageNumber::new(2));
    }
}
