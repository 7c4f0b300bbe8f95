// SPDX-License-Identifier: MPL-2.0
//! Page selector shown under the list when the AOIs do not fit on one page.

use super::component::Message;
use crate::application::query::PageInfo;
use crate::domain::ui::PageNumber;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Row, Text};
use iced::{alignment, Element};

/// Pages adjacent to the current one that stay visible.
const SIBLING_COUNT: usize = 1;

/// One slot of the page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(usize),
    Gap,
}

/// Returns the slots to render: both ends, the current page and its siblings.
#[must_use]
pub fn page_slots(current: usize, page_count: usize) -> Vec<PageSlot> {
    let mut slots = Vec::new();
    let low = current.saturating_sub(SIBLING_COUNT).max(1);
    let high = (current + SIBLING_COUNT).min(page_count);

    for page in 1..=page_count {
        let shown = page == 1 || page == page_count || (low..=high).contains(&page);
        if shown {
            slots.push(PageSlot::Page(page));
        } else if slots.last() != Some(&PageSlot::Gap) {
            slots.push(PageSlot::Gap);
        }
    }
    slots
}

/// Renders the page selector, or nothing when every AOI fits on one page.
pub fn view<'a>(i18n: &I18n, info: PageInfo) -> Option<Element<'a, Message>> {
    if !info.show_controls {
        return None;
    }
    let current = info.page.value();

    let previous = button(Text::new(i18n.tr("aoi-list-page-previous")).size(typography::BODY_SM))
        .height(sizing::BUTTON_HEIGHT)
        .style(styles::button::page)
        .on_press_maybe(
            (current > 1).then(|| Message::PageSelected(PageNumber::new(current - 1))),
        );
    let next = button(Text::new(i18n.tr("aoi-list-page-next")).size(typography::BODY_SM))
        .height(sizing::BUTTON_HEIGHT)
        .style(styles::button::page)
        .on_press_maybe(
            (current < info.page_count)
                .then(|| Message::PageSelected(PageNumber::new(current + 1))),
        );

    let mut row = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(previous);

    for slot in page_slots(current, info.page_count) {
        row = match slot {
            PageSlot::Page(page) => {
                let style = if page == current {
                    styles::button::primary
                } else {
                    styles::button::page
                };
                row.push(
                    button(Text::new(page.to_string()).size(typography::BODY_SM))
                        .height(sizing::BUTTON_HEIGHT)
                        .style(style)
                        .on_press(Message::PageSelected(PageNumber::new(page))),
                )
            }
            PageSlot::Gap => row.push(Text::new("…").size(typography::BODY_SM)),
        };
    }

    let label = i18n.tr_with_args(
        "aoi-list-page-label",
        &[
            ("page", current.to_string().as_str()),
            ("count", info.page_count.to_string().as_str()),
        ],
    );

    Some(
        row.push(next)
            .push(Text::new(label).size(typography::CAPTION))
            .into(),
    )
}
