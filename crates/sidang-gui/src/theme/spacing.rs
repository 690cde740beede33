//! Spacing constants for consistent layout.
//!
//! All values are in pixels (f32).

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Icon margins, grid gaps
pub const SPACING_SM: f32 = 8.0;

/// Default padding, gaps between fields
pub const SPACING_MD: f32 = 16.0;

/// Section padding, page margins
pub const SPACING_LG: f32 = 24.0;

// =============================================================================
// BORDERS
// =============================================================================

/// Buttons, inputs
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Modals
pub const BORDER_RADIUS_LG: f32 = 8.0;

pub const BORDER_WIDTH_THIN: f32 = 1.0;

pub const BORDER_WIDTH_MEDIUM: f32 = 2.0;

// =============================================================================
// LAYOUT WIDTHS
// =============================================================================

/// Modal width
pub const MODAL_WIDTH_MD: f32 = 520.0;

/// The form column stops growing past this width
pub const FORM_MAX_WIDTH: f32 = 980.0;
