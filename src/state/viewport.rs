/// Width reserved for the dimmed strip next to the open profile panel.
pub const PANEL_MARGIN_PX: f64 = 100.0;

/// Viewport size passed explicitly through the menu screen instead of being
/// read as an ambient global; re-measured on every browser resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn panel_width(&self) -> f64 {
        (self.width - PANEL_MARGIN_PX).max(0.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        // Portrait phone fallback when window metrics are unavailable.
        Self {
            width: 375.0,
            height: 667.0,
        }
    }
}
