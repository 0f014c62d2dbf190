use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::app::{BrowserState, Notice};
use crate::ui::components;
use crate::ui::pages::browser::BrowserPage;
use crate::ui::style::Theme;

/// A trait for UI pages that enforces a standard rendering interface.
pub trait Page {
    /// Renders a page in the provided frame and area.
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// A trait for UI components that enforces a standard rendering interface.
pub trait Component {
    /// Renders a component in the provided frame and area.
    fn render(&self, f: &mut Frame, area: Rect);
}

/// Immutable data required to draw a single UI frame.
pub struct RenderContext<'a> {
    pub notice: Option<&'a Notice>,
    pub state: &'a BrowserState,
    pub theme: &'a Theme,
}

/// Renders a complete frame including status bar, content area, and footer.
pub fn render(f: &mut Frame, context: RenderContext<'_>) {
    let RenderContext {
        notice,
        state,
        theme,
    } = context;

    let area = f.area();
    let outer_chunks = Layout::default()
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let status_bar_area = outer_chunks[0];
    let content_area = outer_chunks[1];
    let footer_bar_area = outer_chunks[2];

    components::status_bar::StatusBar::new(theme).render(f, status_bar_area);
    BrowserPage::new(state, theme).render(f, content_area);
    components::footer_bar::FooterBar::new(notice, theme).render(f, footer_bar_area);
}
