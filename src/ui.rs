//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`: one line
//! of controls per loaded track, a status box and the file picker popup.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{App, NoticeLevel};
use crate::config::UiSettings;
use crate::picker::FilePicker;
use crate::registry::TrackRow;

const CONTROLS: &[(&str, &str)] = &[
    ("o", "load"),
    ("j/k", "up/down"),
    ("space", "play/stop"),
    ("r", "loop"),
    ("h/l", "volume -/+"),
    ("0/9", "mute/full"),
    ("q", "quit"),
];

const BAR_WIDTH: usize = 20;

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Render `ratio` (0..=1) as a fixed-width text bar.
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}

fn pad(s: &str, width: usize) -> String {
    let n = s.chars().count();
    if n >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - n))
    }
}

fn row_line(row: &TrackRow, name_width: usize) -> Line<'static> {
    let loop_style = if !row.loop_enabled() {
        Style::default().fg(Color::DarkGray)
    } else if row.looping {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    };
    let play_style = if row.playing {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::LightGreen)
    };

    Line::from(vec![
        Span::raw(pad(&row.display, name_width)),
        Span::raw("  "),
        Span::styled(format!("[{:<8}]", row.loop_label()), loop_style),
        Span::raw(" "),
        Span::styled(format!("[{:<4}]", row.play_label()), play_style),
        Span::raw(format!("  Vol {:.2}  ", row.volume)),
        Span::styled(
            progress_bar(row.progress.ratio(), BAR_WIDTH),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(format!("  {}", row.time_label())),
    ])
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, app: &App, rows: &[TrackRow], ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" soundboard ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Track rows
    {
        let items: Vec<ListItem> = rows
            .iter()
            .map(|r| ListItem::new(row_line(r, ui_settings.title_max_chars)))
            .collect();
        let title = if rows.is_empty() {
            " tracks (press o to load) ".to_string()
        } else {
            format!(" tracks ({}) ", rows.len())
        };
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if !rows.is_empty() {
            state.select(Some(app.selected.min(rows.len() - 1)));
        }
        frame.render_stateful_widget(list, chunks[1], &mut state);
    }

    // Status box
    let status = match &app.notice {
        Some(n) => {
            let style = match n.level {
                NoticeLevel::Info => Style::default(),
                NoticeLevel::Error => Style::default().fg(Color::Red),
            };
            Line::from(Span::styled(n.text.clone(), style))
        }
        None => {
            let playing = rows.iter().filter(|r| r.playing).count();
            Line::from(format!("{} loaded • {} playing", rows.len(), playing))
        }
    };
    let status_par = Paragraph::new(status).block(
        Block::bordered()
            .padding(Padding {
                left: 1,
                right: 0,
                top: 0,
                bottom: 0,
            })
            .title(" status "),
    );
    frame.render_widget(status_par, chunks[2]);

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);

    if let Some(picker) = &app.picker {
        draw_picker(frame, picker, chunks[1]);
    }
}

fn picker_item(picker: &FilePicker, idx: usize) -> ListItem<'static> {
    let entry = &picker.entries()[idx];
    if entry.is_dir {
        ListItem::new(Line::from(Span::styled(
            format!("    {}/", entry.name),
            Style::default().fg(Color::Blue),
        )))
    } else {
        let mark = if picker.is_marked(&entry.path) {
            "[x]"
        } else {
            "[ ]"
        };
        ListItem::new(format!("{} {}", mark, entry.name))
    }
}

fn draw_picker(frame: &mut Frame, picker: &FilePicker, area: Rect) {
    let popup = centered_rect_sized(area.width.saturating_sub(8), area.height, area);
    frame.render_widget(Clear, popup);

    let items: Vec<ListItem> = (0..picker.entries().len())
        .map(|i| picker_item(picker, i))
        .collect();
    let title = format!(" load: {} ", picker.dir().display());
    let hint = format!(
        " {} marked • space mark • enter open/load • backspace up • esc cancel ",
        picker.marked_count()
    );
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_bottom(hint),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !picker.entries().is_empty() {
        state.select(Some(picker.cursor()));
    }
    frame.render_stateful_widget(list, popup, &mut state);
}
