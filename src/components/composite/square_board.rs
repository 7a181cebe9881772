//! Square Board
//!
//! A row of [`Square`] tiles with the selection lifted up into the board.

use gpui::{div, px, Context, IntoElement, ParentElement, Render, Styled, Window};

use crate::components::primitives::square::Square;
use crate::domain::colour::Colour;
use crate::state::selection_state::SelectionState;
use crate::theme::colors::ClickyColors;

/// Board view owning which square is selected
pub struct SquareBoard {
    selection: SelectionState,
}

impl SquareBoard {
    pub fn new(colours: Vec<Colour>, _cx: &mut Context<Self>) -> Self {
        Self {
            selection: SelectionState::new(colours),
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Handle a click reported by the tile at `index`
    fn handle_tile_click(&mut self, index: usize, cx: &mut Context<Self>) {
        let previous = self.selection.selected();
        if self.selection.select(index) && previous != Some(index) {
            cx.notify();
        }
    }
}

impl Render for SquareBoard {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let board = cx.entity();

        let squares = self
            .selection
            .tiles()
            .iter()
            .enumerate()
            .map(|(index, colour)| {
                let board = board.clone();
                Square::new(("square", index), colour.clone())
                    .selected(self.selection.is_selected(index))
                    .on_click(move |_window, cx| {
                        board.update(cx, |this, cx| this.handle_tile_click(index, cx));
                    })
            });

        let caption = match self.selection.selected() {
            Some(index) => format!("Selected: {}", self.selection.tiles()[index]),
            None => "Nothing selected".to_string(),
        };

        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .text_sm()
                    .text_color(ClickyColors::text_secondary())
                    .child(caption),
            )
            .child(div().flex().flex_wrap().gap(px(16.0)).children(squares))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gpui::{point, Entity, Modifiers, TestAppContext, VisualTestContext};

    use super::*;
    use crate::components::primitives::square::SQUARE_SIZE;

    // Tiles sit below the caption; this row is inside both tiles for any caption height
    const TILE_ROW_Y: f32 = SQUARE_SIZE / 2.0 + 40.0;

    fn mount(cx: &mut TestAppContext) -> (Entity<SquareBoard>, Rc<Cell<usize>>, &mut VisualTestContext) {
        let colours: Vec<Colour> = ["blue", "green"]
            .into_iter()
            .map(|name| name.parse().expect("valid colour"))
            .collect();
        let (board, cx) = cx.add_window_view(|_window, cx| SquareBoard::new(colours, cx));

        let notifications = Rc::new(Cell::new(0));
        cx.update(|_window, cx| {
            let notifications = notifications.clone();
            cx.observe(&board, move |_, _| notifications.set(notifications.get() + 1))
                .detach();
        });
        cx.run_until_parked();
        (board, notifications, cx)
    }

    fn click_tile(cx: &mut VisualTestContext, index: usize) {
        let x = index as f32 * (SQUARE_SIZE + 16.0) + SQUARE_SIZE / 2.0;
        cx.simulate_click(point(px(x), px(TILE_ROW_Y)), Modifiers::none());
    }

    fn selected(board: &Entity<SquareBoard>, cx: &mut VisualTestContext) -> Option<usize> {
        board.read_with(cx, |board, _| board.selection().selected())
    }

    #[gpui::test]
    fn clicking_a_tile_selects_it(cx: &mut TestAppContext) {
        let (board, notifications, cx) = mount(cx);
        assert_eq!(selected(&board, cx), None);

        click_tile(cx, 1);
        assert_eq!(selected(&board, cx), Some(1));
        assert_eq!(notifications.get(), 1);

        click_tile(cx, 0);
        assert_eq!(selected(&board, cx), Some(0));
        assert!(!board.read_with(cx, |board, _| board.selection().is_selected(1)));
        assert_eq!(notifications.get(), 2);
    }

    #[gpui::test]
    fn clicking_the_selected_tile_changes_nothing(cx: &mut TestAppContext) {
        let (board, notifications, cx) = mount(cx);

        click_tile(cx, 0);
        assert_eq!(notifications.get(), 1);

        click_tile(cx, 0);
        assert_eq!(selected(&board, cx), Some(0));
        assert_eq!(notifications.get(), 1);
    }
}
