use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::app::BrowserState;
use crate::domain::entry::Entry;
use crate::ui::Page;
use crate::ui::icon::Icon;
use crate::ui::style::Theme;

const EMPTY_DIRECTORY_MESSAGE: &str = "Empty directory";
const HEADER_HEIGHT: u16 = 1;

/// Renders the current directory and its entries with the cursor row marked.
pub struct BrowserPage<'a> {
    state: &'a BrowserState,
    theme: &'a Theme,
}

impl<'a> BrowserPage<'a> {
    pub fn new(state: &'a BrowserState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Renders `At: <path> (<n> files)`.
    fn render_header(&self, f: &mut Frame, area: Rect) {
        let header = Line::from(vec![
            Span::styled("At: ", self.theme.label),
            Span::styled(
                self.state.current_path().display().to_string(),
                self.theme.path,
            ),
            Span::styled(
                format!(" ({})", entry_count_label(self.state.entries().len())),
                self.theme.label,
            ),
        ]);

        f.render_widget(Paragraph::new(header), area);
    }

    fn render_entries(&self, f: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL);
        let entries = self.state.entries();

        if entries.is_empty() {
            let placeholder =
                ListItem::new(Span::styled(EMPTY_DIRECTORY_MESSAGE, self.theme.label));
            f.render_widget(List::new(vec![placeholder]).block(block), area);

            return;
        }

        let items: Vec<ListItem<'_>> = entries
            .iter()
            .map(|entry| ListItem::new(entry_line(entry, self.theme)))
            .collect();
        let marker = cursor_marker();
        let mut list_state = ListState::default().with_selected(Some(self.state.cursor()));
        let list = List::new(items)
            .block(block)
            .highlight_style(self.theme.cursor_row)
            .highlight_symbol(marker.as_str());

        f.render_stateful_widget(list, area, &mut list_state);
    }
}

impl Page for BrowserPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
            .split(area);

        self.render_header(f, chunks[0]);
        self.render_entries(f, chunks[1]);
    }
}

/// Formats one row as icon, name and a trailing `/` for directories.
fn entry_line<'a>(entry: &'a Entry, theme: &Theme) -> Line<'a> {
    let style = theme.entry(entry.is_dir);
    let suffix = if entry.is_dir { "/" } else { "" };

    Line::from(vec![
        Span::styled(format!("{} ", Icon::for_entry(entry.is_dir)), style),
        Span::styled(entry.display_name(), style),
        Span::styled(suffix, style),
    ])
}

fn cursor_marker() -> String {
    format!("{} ", Icon::Pointer)
}

fn entry_count_label(count: usize) -> String {
    if count == 1 {
        return "1 file".to_string();
    }

    format!("{count} files")
}
