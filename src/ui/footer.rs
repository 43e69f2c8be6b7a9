use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::Section;
use crate::ui::theme::Palette;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    section: Section,
    busy: bool,
}

impl Footer {
    pub fn new(section: Section, busy: bool) -> Self {
        Self { section, busy }
    }

    pub fn widget(&self, palette: &Palette, area: Rect) -> Paragraph<'static> {
        let hints = if self.busy {
            " Sending...".to_string()
        } else if self.section == Section::Contact {
            " ↑/↓: Field │ Enter: Next/Send │ Ctrl+S: Send │ Tab: Section │ Ctrl+T: Theme │ Ctrl+Q: Quit".to_string()
        } else {
            " Tab/1-5: Section │ ↑/↓: Browse │ t: Theme │ q: Quit".to_string()
        };
        let version = format!("v{} ", VERSION);

        // Pad with char counts, not byte counts, so the box art stays aligned.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(palette.muted).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(Style::default().bg(palette.bg))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            )
    }
}
