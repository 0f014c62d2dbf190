use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{Notice, NoticeLevel};
use crate::ui::Component;
use crate::ui::icon::Icon;
use crate::ui::style::Theme;

const HELP_TEXT: &str = " j/k: move | Enter: open | Backspace: parent | q: quit";

/// Bottom bar showing the active notice, or key help when there is none.
pub struct FooterBar<'a> {
    notice: Option<&'a Notice>,
    theme: &'a Theme,
}

impl<'a> FooterBar<'a> {
    pub fn new(notice: Option<&'a Notice>, theme: &'a Theme) -> Self {
        Self { notice, theme }
    }

    fn line(&self) -> Line<'a> {
        let Some(notice) = self.notice else {
            return Line::from(Span::styled(HELP_TEXT, self.theme.help));
        };

        let icon = match notice.level {
            NoticeLevel::Warning => Icon::Warn,
            NoticeLevel::Error => Icon::Cross,
        };

        Line::from(Span::styled(
            format!(" {icon} {}", notice.message),
            self.theme.notice(notice.level),
        ))
    }
}

impl Component for FooterBar<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let footer = Paragraph::new(self.line()).style(self.theme.chrome);

        f.render_widget(footer, area);
    }
}
