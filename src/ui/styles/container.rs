// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Translucent panel background for forms and dialogs.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette.background.base.color
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Subtle card surface for gallery thumbnails.
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..extended.background.weak.color
        })),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..container::Style::default()
    }
}

/// Card variant with a brand accent border, used for favorited thumbnails.
pub fn card_selected(theme: &Theme) -> container::Style {
    let base = card(theme);

    container::Style {
        border: Border {
            color: palette::PRIMARY_500,
            width: 2.0,
            radius: radius::MD.into(),
        },
        ..base
    }
}
