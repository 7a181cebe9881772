//! Workspace - Main Shell with Layout
//!
//! The workspace is the window root. It lays out the two exercises side by side.

use gpui::{
    div, px, AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::components::composite::square_board::SquareBoard;
use crate::components::primitives::toggle_label::ToggleLabel;
use crate::domain::config::AppConfig;
use crate::theme::colors::ClickyColors;

/// Main workspace containing both exercises
pub struct Workspace {
    toggle_label: Entity<ToggleLabel>,
    square_board: Entity<SquareBoard>,
}

impl Workspace {
    pub fn new(config: &AppConfig, cx: &mut Context<Self>) -> Self {
        let colours = config.board.colours.clone();
        let toggle_label = cx.new(ToggleLabel::new);
        let square_board = cx.new(|cx| SquareBoard::new(colours, cx));

        Self {
            toggle_label,
            square_board,
        }
    }

    fn render_section(title: &'static str, body: impl IntoElement) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_2()
            .p_4()
            .rounded_md()
            .border_1()
            .border_color(ClickyColors::border())
            .bg(ClickyColors::panel_bg())
            .child(
                div()
                    .text_lg()
                    .text_color(ClickyColors::text_primary())
                    .child(title),
            )
            .child(body)
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .items_start()
            .gap(px(24.0))
            .p(px(24.0))
            .bg(ClickyColors::background())
            .child(Self::render_section("Clicked", self.toggle_label.clone()))
            .child(Self::render_section("Squares", self.square_board.clone()))
    }
}
