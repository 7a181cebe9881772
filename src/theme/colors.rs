//! Colors - Clicky Theme Colors

use gpui::{rgb, Rgba};

/// Clicky color palette - All colors are accessed via associated functions
pub struct ClickyColors;

impl ClickyColors {
    // Background colors
    /// Main window background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Panel background
    pub fn panel_bg() -> Rgba { rgb(0xffffff) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Alert colors (toggle label)
    /// Primary alert background
    pub fn alert_primary_bg() -> Rgba { rgb(0xcfe2ff) }
    /// Primary alert border
    pub fn alert_primary_border() -> Rgba { rgb(0xb6d4fe) }
    /// Primary alert text
    pub fn alert_primary_text() -> Rgba { rgb(0x084298) }
}
