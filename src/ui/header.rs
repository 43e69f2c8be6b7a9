use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::content;
use crate::ui::app::Section;
use crate::ui::theme::Palette;

/// The newspaper masthead: name, tagline, and the section navigation
/// line with the active section highlighted.
pub struct Header {
    active: Section,
}

impl Header {
    pub fn new(active: Section) -> Self {
        Self { active }
    }

    pub fn widget(&self, palette: &Palette) -> Paragraph<'static> {
        let title_style = Style::default()
            .fg(palette.fg)
            .add_modifier(Modifier::BOLD);
        let tagline_style = Style::default()
            .fg(palette.muted)
            .add_modifier(Modifier::ITALIC);
        let separator_style = Style::default().fg(palette.muted);

        let mut nav_spans: Vec<Span<'static>> = Vec::new();
        for (idx, section) in Section::ALL.iter().enumerate() {
            if idx > 0 {
                nav_spans.push(Span::styled("  │  ", separator_style));
            }
            let style = if *section == self.active {
                Style::default()
                    .fg(palette.fg)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(palette.muted)
            };
            nav_spans.push(Span::styled(
                format!("{}. {}", idx + 1, section.title()),
                style,
            ));
        }

        let lines = vec![
            Line::from(Span::styled(content::NAME, title_style)),
            Line::from(Span::styled(content::TAGLINE, tagline_style)),
            Line::from(nav_spans),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(palette.bg))
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(palette.border)),
            )
    }
}
