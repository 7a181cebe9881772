//! Square Component
//!
//! A fixed-size tile filled with its colour while selected. The tile holds no
//! state: selection lives with whoever renders it, and a click only invokes
//! the handler it was given.

use gpui::{
    div, px, App, ElementId, InteractiveElement, IntoElement, RenderOnce,
    StatefulInteractiveElement, Styled, Window,
};

use crate::domain::colour::Colour;

/// Edge length of a tile in logical pixels
pub const SQUARE_SIZE: f32 = 200.0;

/// A selectable square tile
#[derive(IntoElement)]
pub struct Square {
    id: ElementId,
    colour: Colour,
    selected: bool,
    on_click: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl Square {
    /// Create a new, unselected square
    pub fn new(id: impl Into<ElementId>, colour: Colour) -> Self {
        Self {
            id: id.into(),
            colour,
            selected: false,
            on_click: None,
        }
    }

    /// Set the selected state
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// The colour the square is painted with
    pub fn fill(&self) -> Colour {
        if self.selected {
            self.colour.clone()
        } else {
            Colour::default_fill()
        }
    }
}

impl RenderOnce for Square {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let fill = self.fill();

        let mut element = div()
            .id(self.id)
            .size(px(SQUARE_SIZE))
            .flex_shrink_0()
            .cursor_pointer()
            .bg(fill.to_rgba());

        if let Some(handler) = self.on_click {
            element = element.on_click(move |_event, window, cx| handler(window, cx));
        }

        element
    }
}
