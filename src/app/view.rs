// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The AOI list sits on the left. The right side stands in for the map and
//! shows where the viewport was last sent.

use super::{Message, Status};
use crate::i18n::fluent::I18n;
use crate::ui::aoi_list::{self, display};
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{Container, Row, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub aoi_list: &'a aoi_list::State,
    pub status: &'a Status,
}

/// Returns the localized status line.
pub fn status_text(i18n: &I18n, status: &Status) -> String {
    match status {
        Status::Ready => i18n.tr("status-ready"),
        Status::ZoomedTo { center, zoom } => display::zoom_status(i18n, *center, *zoom),
        Status::Warning(key) => i18n.tr(key),
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let list = aoi_list::view(ctx.aoi_list, aoi_list::ViewEnv { i18n: ctx.i18n })
        .map(Message::AoiList);

    let color = match ctx.status {
        Status::Warning(_) => palette::WARNING_500,
        _ => palette::GRAY_400,
    };
    let map_placeholder = Container::new(
        Text::new(status_text(ctx.i18n, ctx.status))
            .size(typography::BODY)
            .color(color),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::LG)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    Row::new()
        .push(list)
        .push(map_placeholder)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::layer::LatLng;

    #[test]
    fn status_text_covers_every_status() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());

        assert_eq!(status_text(&i18n, &Status::Ready), "Select an AOI to zoom to it");
        assert_eq!(
            status_text(
                &i18n,
                &Status::ZoomedTo {
                    center: LatLng::new(1.0, 2.0),
                    zoom: 17
                }
            ),
            "Map centered on 1.00000, 2.00000 at zoom 17"
        );
        assert_eq!(
            status_text(&i18n, &Status::Warning("status-layers-load-error".into())),
            "The layers file could not be read"
        );
    }
}
