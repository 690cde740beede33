//! Theme for the defense paperwork window.
//!
//! - Palette and fixed colors (this module)
//! - Spacing constants (`spacing`)
//! - Widget style functions (`style`)

pub mod spacing;
pub mod style;

use iced::Color;
use iced::Theme;
use iced::theme::Palette;

pub use spacing::{
    BORDER_RADIUS_LG, BORDER_RADIUS_SM, BORDER_WIDTH_MEDIUM, BORDER_WIDTH_THIN, FORM_MAX_WIDTH,
    MODAL_WIDTH_MD, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS,
};
pub use style::{button_ghost, button_primary, button_secondary, text_input_default};

// =============================================================================
// COLORS
// =============================================================================

pub const WHITE: Color = Color::WHITE;
pub const GRAY_50: Color = Color::from_rgb(0.98, 0.98, 0.99);
pub const GRAY_100: Color = Color::from_rgb(0.95, 0.95, 0.96);
pub const GRAY_200: Color = Color::from_rgb(0.89, 0.90, 0.91);
pub const GRAY_300: Color = Color::from_rgb(0.82, 0.83, 0.85);
pub const GRAY_500: Color = Color::from_rgb(0.55, 0.56, 0.59);
pub const GRAY_600: Color = Color::from_rgb(0.42, 0.43, 0.46);
pub const GRAY_700: Color = Color::from_rgb(0.30, 0.31, 0.34);
pub const GRAY_900: Color = Color::from_rgb(0.10, 0.10, 0.12);

/// Navy used for the university letterhead feel.
pub const PRIMARY_500: Color = Color::from_rgb(0.11, 0.30, 0.55);
pub const PRIMARY_600: Color = Color::from_rgb(0.08, 0.24, 0.46);
pub const PRIMARY_100: Color = Color::from_rgb(0.88, 0.92, 0.97);

pub const SUCCESS: Color = Color::from_rgb(0.20, 0.62, 0.36);
pub const WARNING: Color = Color::from_rgb(0.90, 0.60, 0.05);
pub const ERROR: Color = Color::from_rgb(0.80, 0.22, 0.22);

pub const BACKDROP: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.45);
pub const SHADOW_STRONG: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.25);

// =============================================================================
// THEME CREATION
// =============================================================================

/// The application theme (light only).
pub fn app_theme() -> Theme {
    Theme::custom(
        "Sidang Light".to_string(),
        Palette {
            background: GRAY_50,
            text: GRAY_900,
            primary: PRIMARY_500,
            success: SUCCESS,
            warning: WARNING,
            danger: ERROR,
        },
    )
}
