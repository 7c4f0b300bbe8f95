// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface of a single AOI item.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

/// Inline warning shown under items with a suspiciously small area.
pub fn warning(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.15,
            ..palette::WARNING_500
        })),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: palette::WARNING_500,
        },
        ..Default::default()
    }
}
