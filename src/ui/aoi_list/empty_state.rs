// SPDX-License-Identifier: MPL-2.0
//! Message displayed when the map holds no AOI.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{Container, Text};
use iced::{alignment, Element, Length};

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let hint = Text::new(i18n.tr("aoi-list-empty"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    Container::new(hint)
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .into()
}
