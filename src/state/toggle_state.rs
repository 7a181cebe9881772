//! ToggleState - One-way "clicked" flag behind the toggle label

/// Text shown before the label has been clicked
pub const NOT_CLICKED_TEXT: &str = "Not clicked";
/// Text shown once the label has been clicked
pub const CLICKED_TEXT: &str = "Clicked";

/// State for the toggle label. The flag only ever goes from `false` to `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleState {
    clicked: bool,
}

impl ToggleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a click. Returns `true` if this click changed the state.
    pub fn click(&mut self) -> bool {
        let changed = !self.clicked;
        self.clicked = true;
        changed
    }

    pub fn is_clicked(&self) -> bool {
        self.clicked
    }

    /// The label text for the current state
    pub fn label(&self) -> &'static str {
        if self.clicked {
            CLICKED_TEXT
        } else {
            NOT_CLICKED_TEXT
        }
    }
}
