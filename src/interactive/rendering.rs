//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Mask, Rule};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Candidates
            Constraint::Percentage(60), // Rules, history, messages
        ])
        .split(chunks[1]);

    render_candidates(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE FILTER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let total = app.dictionary_size();
    let remaining = app.candidates_count();
    let percent = if total == 0 {
        0
    } else {
        (remaining * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Remaining ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent)
        .label(format!("{remaining}/{total} words"));
    f.render_widget(gauge, chunks[0]);

    let mut lines: Vec<Line> = if remaining == 0 {
        vec![Line::styled(
            "No candidates remain",
            Style::default().fg(Color::Red),
        )]
    } else {
        app.sample
            .shown
            .iter()
            .map(|word| {
                Line::styled(
                    format!("  {}", word.text()),
                    Style::default()
                        .fg(Color::LightBlue)
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect()
    };

    if app.sample.is_truncated() {
        lines.push(Line::styled(
            format!("  ... showing {} of {remaining} (Ctrl-S reshuffle)", app.sample.shown.len()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Possible Words (random order) ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, chunks[1]);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Rules
            Constraint::Percentage(25), // History
            Constraint::Percentage(25), // Messages
        ])
        .split(area);

    render_rules(f, app.rules(), chunks[0]);
    render_history(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_rules(f: &mut Frame, rules: &[Rule], area: Rect) {
    let items: Vec<ListItem> = if rules.is_empty() {
        vec![ListItem::new("No rules entered yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        rules
            .iter()
            .map(|rule| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {} ", rule.letter()),
                        Style::default()
                            .fg(Color::LightBlue)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(rule.describe(), Style::default().fg(Color::Green)),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Rules ({}) ", rules.len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .enumerate()
        .map(|(i, entry)| {
            let content = format!(
                "{}: {} {} +{} rules {} → {}",
                app.history.len() - i,
                entry.word,
                entry.mask.to_emoji(),
                entry.rules_added,
                entry.candidates_before,
                entry.candidates_after
            );
            ListItem::new(content)
        })
        .collect();

    let title = format!(" History ({}) ", app.session.rules().batch_count());
    let history =
        List::new(history_items).block(Block::default().title(title).borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Word => (" Enter Word (5 letters) | Enter to continue ", Color::Cyan),
        InputMode::Mask => (
            " Enter Mask (N=absent E=exact M=elsewhere) | TAB to edit word ",
            Color::Yellow,
        ),
    };

    let preview = Mask::parse(&app.mask_buffer)
        .map(Mask::to_emoji)
        .unwrap_or_default();

    let mut spans = vec![Span::styled(
        format!("{:<5}", app.word_buffer),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if app.input_mode == InputMode::Mask {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{:<5}", app.mask_buffer),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("  "));
        spans.push(Span::raw(preview));
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("Esc: Quit | Ctrl-U: Undo | Ctrl-R: Clear rules | Ctrl-S: Reshuffle")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
