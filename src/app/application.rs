//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::workspace::Workspace;
use crate::domain::config::AppConfig;

actions!(clicky, [Quit]);

/// Run the Clicky application with the given configuration
pub fn run_app(config: AppConfig) {
    Application::new().run(move |cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let size = gpui::size(px(config.window.width), px(config.window.height));
        let bounds = Bounds::centered(None, size, cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Clicky")),
                ..Default::default()
            }),
            ..Default::default()
        };

        if let Err(err) = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(&config, cx))
        }) {
            tracing::error!("Failed to open main window: {err}");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
