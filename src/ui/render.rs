use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::content;
use crate::submit::SubmissionResult;
use crate::ui::app::{App, Section};
use crate::ui::contact::ContactField;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::Palette;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let palette = app.theme().palette();
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    // Paint the paper color under everything first.
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg)),
        area,
    );

    frame.render_widget(Header::new(app.section()).widget(&palette), header);

    match app.section() {
        Section::About => draw_about(frame, body, &palette),
        Section::Projects => draw_projects(frame, body, &palette, app.project_selection()),
        Section::Skills => draw_skills(frame, body, &palette),
        Section::Contact => draw_contact(frame, body, &palette, app),
        Section::Socials => draw_socials(frame, body, &palette),
    }

    let footer_widget = Footer::new(app.section(), app.contact().busy);
    frame.render_widget(footer_widget.widget(&palette, footer), footer);

    if let Some(result) = &app.contact().result {
        draw_result_overlay(frame, body, &palette, result);
    }
}

fn section_block(title: &'static str, palette: &Palette) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(palette.fg)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.bg))
}

fn draw_about(frame: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let block = section_block("About Me", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(inner);

    let about = Paragraph::new(content::ABOUT)
        .style(Style::default().fg(palette.fg))
        .wrap(Wrap { trim: true });
    frame.render_widget(about, columns[0]);

    let mut facts = vec![Line::from(Span::styled(
        "Quick Facts about me",
        Style::default()
            .fg(palette.fg)
            .add_modifier(Modifier::BOLD),
    ))];
    for fact in content::QUICK_FACTS {
        facts.push(Line::from(Span::styled(
            format!("• {}", fact),
            Style::default().fg(palette.fg),
        )));
    }
    let facts_widget = Paragraph::new(facts)
        .style(Style::default().bg(palette.panel_bg))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );
    frame.render_widget(facts_widget, columns[1]);
}

fn draw_projects(frame: &mut Frame<'_>, area: Rect, palette: &Palette, selected: usize) {
    let block = section_block("Latest Projects", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line<'static>> = Vec::new();
    for (idx, project) in content::PROJECTS.iter().enumerate() {
        let highlight = idx == selected;
        let base = if highlight {
            Style::default().fg(palette.fg).bg(palette.panel_bg)
        } else {
            Style::default().fg(palette.fg)
        };

        lines.push(
            Line::from(Span::styled(
                format!("{} {}", if highlight { "▸" } else { " " }, project.title),
                base.add_modifier(Modifier::BOLD),
            ))
            .style(base),
        );
        lines.push(Line::from(Span::styled(format!("  {}", project.description), base)).style(base));
        lines.push(
            Line::from(vec![
                Span::styled("  GitHub: ", Style::default().fg(palette.muted)),
                Span::styled(project.github, base.add_modifier(Modifier::UNDERLINED)),
            ])
            .style(base),
        );
        lines.push(
            Line::from(vec![
                Span::styled("  Live:   ", Style::default().fg(palette.muted)),
                Span::styled(project.live, base.add_modifier(Modifier::UNDERLINED)),
            ])
            .style(base),
        );
        lines.push(
            Line::from(Span::styled(
                format!("  [{}]", project.technologies.join("] [")),
                Style::default().fg(palette.muted),
            ))
            .style(base),
        );
        if idx + 1 < content::PROJECTS.len() {
            lines.push(Line::from(""));
        }
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(widget, inner);
}

fn draw_skills(frame: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let block = section_block("Skills & Expertise", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let constraints: Vec<Constraint> = content::SKILL_GROUPS
        .iter()
        .map(|_| Constraint::Ratio(1, content::SKILL_GROUPS.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (group, column) in content::SKILL_GROUPS.iter().zip(columns.iter()) {
        let lines: Vec<Line<'static>> = group
            .items
            .iter()
            .map(|item| {
                Line::from(Span::styled(
                    format!("• {}", item),
                    Style::default().fg(palette.fg),
                ))
            })
            .collect();
        let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", group.title),
                    Style::default()
                        .fg(palette.fg)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .style(Style::default().bg(palette.panel_bg)),
        );
        frame.render_widget(widget, *column);
    }
}

fn draw_contact(frame: &mut Frame<'_>, area: Rect, palette: &Palette, app: &App) {
    let block = section_block("Contact Me", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(inner);

    let contact = app.contact();
    draw_field(frame, rows[0], palette, app, ContactField::Name);
    draw_field(frame, rows[1], palette, app, ContactField::Email);
    draw_field(frame, rows[2], palette, app, ContactField::Message);

    let (label, style) = if contact.busy {
        (
            "Sending...",
            Style::default().fg(palette.muted).add_modifier(Modifier::DIM),
        )
    } else if contact.can_submit() {
        (
            "➤ Send Message (Ctrl+S)",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            "Fill in all fields to send",
            Style::default().fg(palette.muted),
        )
    };
    let send_row = Paragraph::new(Line::from(Span::styled(label, style)))
        .alignment(Alignment::Center);
    frame.render_widget(send_row, rows[3]);
}

fn draw_field(
    frame: &mut Frame<'_>,
    area: Rect,
    palette: &Palette,
    app: &App,
    field: ContactField,
) {
    let contact = app.contact();
    let focused = contact.focused == field;
    let border_style = if focused {
        Style::default()
            .fg(palette.fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.muted)
    };

    let mut text = contact.field(field).to_string();
    if focused && !contact.busy {
        text.push('_');
    }

    let widget = Paragraph::new(text)
        .style(Style::default().fg(palette.fg).bg(palette.panel_bg))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(field.label())
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(widget, area);
}

fn draw_socials(frame: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let block = section_block("Social Links", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = content::SOCIAL_LINKS
        .iter()
        .map(|link| link.label.chars().count())
        .max()
        .unwrap_or(0);

    let lines: Vec<Line<'static>> = content::SOCIAL_LINKS
        .iter()
        .map(|link| {
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}  ", link.label, width = width),
                    Style::default()
                        .fg(palette.fg)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    link.url,
                    Style::default()
                        .fg(palette.fg)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// The transient submission outcome, centered over the body. Rendered
/// last so it sits above everything, exactly until the timer clears it.
fn draw_result_overlay(
    frame: &mut Frame<'_>,
    body: Rect,
    palette: &Palette,
    result: &SubmissionResult,
) {
    let color = if result.success {
        palette.status_ok
    } else {
        palette.status_error
    };

    let width = (result.message.chars().count() as u16).saturating_add(6);
    let area = centered_rect_by_size(body, width.max(30), 5);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(palette.panel_bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            result.message.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}
