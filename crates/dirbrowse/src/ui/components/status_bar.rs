use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::Component;
use crate::ui::style::Theme;

/// Top bar showing the application name and version.
pub struct StatusBar<'a> {
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Component for StatusBar<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let version = env!("CARGO_PKG_VERSION");
        let title = Span::styled(format!(" dirbrowse v{version}"), self.theme.title);
        let status_bar = Paragraph::new(Line::from(title)).style(self.theme.chrome);

        f.render_widget(status_bar, area);
    }
}
