//! Widget style functions.
//!
//! Style functions receive `&Theme` and read the extended palette:
//!
//! ```rust,ignore
//! button(text("Generate")).style(button_primary)
//! ```

use iced::widget::{button, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::spacing::{BORDER_RADIUS_SM, BORDER_WIDTH_MEDIUM, BORDER_WIDTH_THIN};
use super::{GRAY_100, GRAY_200, GRAY_300, GRAY_500, GRAY_700, PRIMARY_100, PRIMARY_600, WHITE};

fn rounded(width: f32, color: Color) -> Border {
    Border {
        radius: BORDER_RADIUS_SM.into(),
        width,
        color,
    }
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - the generate action.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let (background, shadow) = match status {
        button::Status::Active => (
            palette.primary.base.color,
            Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
        ),
        button::Status::Hovered => (
            PRIMARY_600,
            Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
        ),
        button::Status::Pressed => (PRIMARY_600, Shadow::default()),
        button::Status::Disabled => (GRAY_300, Shadow::default()),
    };

    button::Style {
        background: Some(background.into()),
        text_color: if matches!(status, button::Status::Disabled) {
            GRAY_500
        } else {
            WHITE
        },
        border: rounded(0.0, Color::TRANSPARENT),
        shadow,
        ..Default::default()
    }
}

/// Secondary button style - file and folder pickers.
pub fn button_secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border) = match status {
        button::Status::Active => (WHITE, GRAY_300),
        button::Status::Hovered => (GRAY_100, GRAY_500),
        button::Status::Pressed => (GRAY_200, GRAY_500),
        button::Status::Disabled => (GRAY_100, GRAY_200),
    };

    button::Style {
        background: Some(background.into()),
        text_color: if matches!(status, button::Status::Disabled) {
            GRAY_500
        } else {
            GRAY_700
        },
        border: rounded(BORDER_WIDTH_THIN, border),
        ..Default::default()
    }
}

/// Ghost button style - inline icon actions (clear, close, step).
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        button::Status::Hovered => Some(PRIMARY_100.into()),
        button::Status::Pressed => Some(GRAY_200.into()),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: palette.primary.base.color,
        border: rounded(0.0, Color::TRANSPARENT),
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();

    let (background, border) = match status {
        text_input::Status::Active => (WHITE, rounded(BORDER_WIDTH_THIN, GRAY_300)),
        text_input::Status::Hovered => (WHITE, rounded(BORDER_WIDTH_THIN, GRAY_500)),
        text_input::Status::Focused { .. } => (
            WHITE,
            rounded(BORDER_WIDTH_MEDIUM, palette.primary.base.color),
        ),
        text_input::Status::Disabled => (GRAY_100, rounded(BORDER_WIDTH_THIN, GRAY_200)),
    };

    text_input::Style {
        background: background.into(),
        border,
        icon: GRAY_500,
        placeholder: GRAY_500,
        value: palette.background.base.text,
        selection: PRIMARY_100,
    }
}

/// Text input style for a field that failed to parse.
pub fn text_input_error(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();
    text_input::Style {
        border: rounded(BORDER_WIDTH_MEDIUM, palette.danger.base.color),
        ..text_input_default(theme, status)
    }
}
