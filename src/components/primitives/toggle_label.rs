//! Toggle Label Component
//!
//! Shows "Not clicked" until the first click, then "Clicked" for good.

use gpui::{
    div, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};

use crate::state::toggle_state::ToggleState;
use crate::theme::colors::ClickyColors;

/// Label view that owns its clicked flag
pub struct ToggleLabel {
    state: ToggleState,
}

impl ToggleLabel {
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            state: ToggleState::new(),
        }
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    /// Mark the label clicked and re-render if that changed anything
    pub fn handle_click(&mut self, cx: &mut Context<Self>) {
        if self.state.click() {
            tracing::debug!("Toggle label clicked");
            cx.notify();
        }
    }
}

impl Render for ToggleLabel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("toggle-label")
            .mt(px(24.0))
            .px(px(16.0))
            .py(px(12.0))
            .rounded_md()
            .border_1()
            .border_color(ClickyColors::alert_primary_border())
            .bg(ClickyColors::alert_primary_bg())
            .text_color(ClickyColors::alert_primary_text())
            .cursor_pointer()
            .child(self.state.label())
            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                this.handle_click(cx);
            }))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gpui::{point, px, AppContext, Modifiers, TestAppContext};

    use super::*;

    #[gpui::test]
    fn click_switches_label_for_good(cx: &mut TestAppContext) {
        let (label, cx) = cx.add_window_view(|_window, cx| ToggleLabel::new(cx));
        cx.run_until_parked();
        assert_eq!(label.read_with(cx, |label, _| label.state().label()), "Not clicked");

        // Inside the label's left padding, below its top margin
        let inside = point(px(8.0), px(30.0));
        cx.simulate_click(inside, Modifiers::none());
        assert_eq!(label.read_with(cx, |label, _| label.state().label()), "Clicked");

        for _ in 0..3 {
            cx.simulate_click(inside, Modifiers::none());
        }
        assert!(label.read_with(cx, |label, _| label.state().is_clicked()));
        assert_eq!(label.read_with(cx, |label, _| label.state().label()), "Clicked");
    }

    #[gpui::test]
    fn only_the_first_click_rerenders(cx: &mut TestAppContext) {
        let label = cx.new(ToggleLabel::new);
        let notifications = Rc::new(Cell::new(0));
        cx.update(|cx| {
            let notifications = notifications.clone();
            cx.observe(&label, move |_, _| notifications.set(notifications.get() + 1))
                .detach();
        });

        label.update(cx, |label, cx| label.handle_click(cx));
        assert_eq!(notifications.get(), 1);

        label.update(cx, |label, cx| label.handle_click(cx));
        label.update(cx, |label, cx| label.handle_click(cx));
        assert_eq!(notifications.get(), 1);
        assert_eq!(label.read_with(cx, |label, _| label.state()), {
            let mut clicked = ToggleState::new();
            clicked.click();
            clicked
        });
    }
}
