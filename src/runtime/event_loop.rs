use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::warn;

use crate::app::{App, stepped_volume};
use crate::audio::AudioBackend;
use crate::config;
use crate::picker::{FilePicker, PickerAction};
use crate::registry::{Registry, TrackRow};
use crate::ui;

/// Main terminal event loop: draws the rows and dispatches key presses to the
/// registry. Returns `Ok(())` when the user closes the window.
pub fn run<B: AudioBackend>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    registry: &mut Registry<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Redraw at least as often as the monitors refresh progress.
    let frame_interval = Duration::from_millis(settings.monitor.tick_ms.max(1));

    loop {
        let rows = registry.rows();
        if !rows.is_empty() && app.selected >= rows.len() {
            app.selected = rows.len() - 1;
        }

        terminal.draw(|f| ui::draw(f, app, &rows, &settings.ui))?;

        if event::poll(frame_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if is_interrupt(&key) {
                    break;
                }
                let quit = if app.picker_open() {
                    handle_picker_key(key, app, registry);
                    false
                } else {
                    handle_key_event(key, settings, app, registry, &rows)
                };
                if quit {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Handle a key on the main view. Returns true when the window should close.
pub(super) fn handle_key_event<B: AudioBackend>(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    registry: &mut Registry<B>,
    rows: &[TrackRow],
) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('o') => open_picker(settings, app),
        KeyCode::Char('j') | KeyCode::Down => app.next(rows.len()),
        KeyCode::Char('k') | KeyCode::Up => app.prev(rows.len()),
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Enter => {
            if let Some(id) = app.selected_id(rows) {
                if let Err(e) = registry.toggle_play(id) {
                    warn!(track = %id, error = %e, "toggle play failed");
                    app.error(e.to_string());
                }
            }
        }
        KeyCode::Char('r') => {
            if let Some(id) = app.selected_id(rows) {
                if let Err(e) = registry.toggle_loop(id) {
                    app.error(e.to_string());
                }
            }
        }
        KeyCode::Char('h') | KeyCode::Char('-') | KeyCode::Left => {
            nudge_volume(app, registry, rows, -settings.audio.volume_step)
        }
        KeyCode::Char('l') | KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
            nudge_volume(app, registry, rows, settings.audio.volume_step)
        }
        KeyCode::Char('0') => set_volume(app, registry, rows, 0.0),
        KeyCode::Char('9') => set_volume(app, registry, rows, 1.0),
        _ => {}
    }
    false
}

/// Handle a key while the file picker is open.
pub(super) fn handle_picker_key<B: AudioBackend>(
    key: KeyEvent,
    app: &mut App,
    registry: &mut Registry<B>,
) {
    if key.code == KeyCode::Esc {
        app.picker = None;
        return;
    }
    let Some(picker) = app.picker.as_mut() else {
        return;
    };

    let outcome = match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            picker.next();
            Ok(PickerAction::Nothing)
        }
        KeyCode::Char('k') | KeyCode::Up => {
            picker.prev();
            Ok(PickerAction::Nothing)
        }
        KeyCode::Char(' ') => {
            picker.toggle_mark();
            picker.next();
            Ok(PickerAction::Nothing)
        }
        KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
            picker.ascend().map(|()| PickerAction::Nothing)
        }
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => picker.activate(),
        _ => Ok(PickerAction::Nothing),
    };

    match outcome {
        Ok(PickerAction::Chosen(paths)) => {
            app.picker = None;
            let report = registry.load(paths);
            app.report_load(&report);
        }
        Ok(_) => {}
        Err(e) => app.error(format!("Cannot open directory: {e}")),
    }
}

fn open_picker(settings: &config::Settings, app: &mut App) {
    let start = match settings.picker.start_dir.clone() {
        Some(dir) => dir,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                app.error(format!("Cannot open picker: {e}"));
                return;
            }
        },
    };

    match FilePicker::open(&start, &settings.library) {
        Ok(picker) => app.picker = Some(picker),
        Err(e) => app.error(format!("Cannot open {}: {e}", start.display())),
    }
}

fn nudge_volume<B: AudioBackend>(
    app: &mut App,
    registry: &mut Registry<B>,
    rows: &[TrackRow],
    delta: f32,
) {
    let current = app.selected_id(rows).and_then(|id| registry.volume(id));
    if let Some(volume) = current {
        set_volume(app, registry, rows, stepped_volume(volume, delta));
    }
}

fn set_volume<B: AudioBackend>(
    app: &mut App,
    registry: &mut Registry<B>,
    rows: &[TrackRow],
    value: f32,
) {
    if let Some(id) = app.selected_id(rows) {
        if let Err(e) = registry.set_volume(id, value) {
            app.error(e.to_string());
        }
    }
}
