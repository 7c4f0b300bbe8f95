// SPDX-License-Identifier: MPL-2.0
//! Rendering of the AOI list.

use super::component::{Message, State};
use super::{display, empty_state, pagination};
use crate::application::editor_links::Editor;
use crate::domain::layer::Layer;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, tooltip, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Environment required to render the list.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

/// What the list shows under its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Body {
    /// The "No AOIs yet" message, without list or page selector.
    Empty,
    Items { paginated: bool },
}

fn body(state: &State) -> Body {
    if state.aoi_count() == 0 {
        Body::Empty
    } else {
        Body::Items {
            paginated: state.page_info().show_controls,
        }
    }
}

pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let i18n = env.i18n;
    let aoi_count = state.aoi_count();

    let header = styles::tooltip::styled(
        Text::new(i18n.tr_with_args(
            "aoi-list-header",
            &[("count", aoi_count.to_string().as_str())],
        ))
        .size(typography::TITLE_SM),
        i18n.tr("aoi-list-header-tooltip"),
        tooltip::Position::Bottom,
    );

    let mut content = Column::new().spacing(spacing::SM).push(header);

    match body(state) {
        Body::Empty => {
            content = content.push(empty_state::view(i18n));
        }
        Body::Items { paginated } => {
            let items = state
                .visible_aois()
                .into_iter()
                .fold(Column::new().spacing(spacing::XS), |column, layer| {
                    column.push(item(state, layer, i18n))
                });
            content = content.push(scrollable(items).height(Length::Fill));

            if paginated {
                if let Some(selector) = pagination::view(i18n, state.page_info()) {
                    content = content.push(selector);
                }
            }
        }
    }

    Container::new(content)
        .width(sizing::PANEL_WIDTH)
        .height(Length::Fill)
        .padding(spacing::MD)
        .into()
}

fn item<'a>(state: &State, layer: &'a Layer, i18n: &I18n) -> Element<'a, Message> {
    let title = match &layer.aoi_id {
        Some(aoi_id) => i18n.tr_with_args("aoi-list-item-title", &[("id", aoi_id.as_str())]),
        None => i18n.tr("aoi-list-item-no-id"),
    };

    let mut details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(title).size(typography::BODY_LG))
        .push(Text::new(display::area_line(i18n, &layer.area)).size(typography::CAPTION));

    if layer.area.is_suspiciously_small() {
        let warning = Column::new()
            .push(Text::new(i18n.tr("aoi-list-small-area-warning")).size(typography::CAPTION))
            .push(
                Text::new(i18n.tr("aoi-list-small-area-hint"))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            );
        details = details.push(
            Container::new(warning)
                .padding(spacing::XXS)
                .style(styles::container::warning),
        );
    }

    let fetching = layer
        .aoi_id
        .as_ref()
        .is_some_and(|aoi_id| state.is_fetching(aoi_id));

    let rapid = action(
        i18n.tr("aoi-list-action-rapid"),
        i18n.tr("aoi-list-action-rapid-tooltip"),
        layer.aoi_id.clone().map(|aoi_id| Message::OpenEditor {
            editor: Editor::Rapid,
            aoi_id,
        }),
    );
    let osm = action(
        i18n.tr("aoi-list-action-osm"),
        i18n.tr("aoi-list-action-osm-tooltip"),
        layer.aoi_id.clone().map(|aoi_id| Message::OpenEditor {
            editor: Editor::OsmId,
            aoi_id,
        }),
    );
    let fetch_label = if fetching {
        i18n.tr("aoi-list-action-fetching")
    } else {
        i18n.tr("aoi-list-action-fetch")
    };
    let fetch = action(
        fetch_label,
        i18n.tr("aoi-list-action-fetch-tooltip"),
        layer
            .aoi_id
            .clone()
            .filter(|_| !fetching)
            .map(Message::FetchLabels),
    );
    let zoom = action(
        i18n.tr("aoi-list-action-zoom"),
        i18n.tr("aoi-list-action-zoom-tooltip"),
        Some(Message::ZoomTo(layer.id.clone())),
    );

    let actions = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(rapid)
        .push(osm)
        .push(fetch)
        .push(zoom);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(details).width(Length::Fill))
        .push(actions);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::card)
        .into()
}

/// Builds an action button; `None` renders it disabled.
fn action<'a>(label: String, tip: String, on_press: Option<Message>) -> Element<'a, Message> {
    let control = button(Text::new(label).size(typography::BODY_SM))
        .height(sizing::BUTTON_HEIGHT)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::primary)
        .on_press_maybe(on_press);

    styles::tooltip::styled(control, tip, tooltip::Position::Top).into()
}
