use ratatui::style::{Color, Modifier, Style};

use crate::app::NoticeLevel;

/// Colors and text styles used by every widget, passed down explicitly from
/// `main`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Status bar and footer background.
    pub chrome: Style,
    /// Highlighted row.
    pub cursor_row: Style,
    /// Directory rows.
    pub directory: Style,
    /// Notice of [`NoticeLevel::Error`].
    pub error: Style,
    /// File rows.
    pub file: Style,
    /// Key binding hints.
    pub help: Style,
    /// Secondary labels such as `At:` and the entry count.
    pub label: Style,
    /// The current path.
    pub path: Style,
    /// Application name in the status bar.
    pub title: Style,
    /// Notice of [`NoticeLevel::Warning`].
    pub warning: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            chrome: Style::default().bg(Color::DarkGray).fg(Color::White),
            cursor_row: Style::default()
                .fg(Color::Indexed(205))
                .add_modifier(Modifier::BOLD),
            directory: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::LightRed),
            file: Style::default().fg(Color::Cyan),
            help: Style::default().fg(Color::Indexed(244)),
            label: Style::default().fg(Color::Indexed(240)),
            path: Style::default(),
            title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            warning: Style::default().fg(Color::Yellow),
        }
    }
}

impl Theme {
    /// Returns the style for a notice of `level`.
    pub fn notice(&self, level: NoticeLevel) -> Style {
        match level {
            NoticeLevel::Warning => self.warning,
            NoticeLevel::Error => self.error,
        }
    }

    /// Returns the style for a directory or file row.
    pub fn entry(&self, is_dir: bool) -> Style {
        if is_dir { self.directory } else { self.file }
    }
}
