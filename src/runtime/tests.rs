use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::event_loop::{handle_key_event, handle_picker_key};
use crate::app::{App, NoticeLevel};
use crate::audio::fake::FakeBackend;
use crate::config::Settings;
use crate::picker::FilePicker;
use crate::registry::Registry;

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn press<B: crate::audio::AudioBackend>(
    code: KeyEvent,
    settings: &Settings,
    app: &mut App,
    registry: &mut Registry<B>,
) -> bool {
    let rows = registry.rows();
    handle_key_event(code, settings, app, registry, &rows)
}

fn setup(paths: &[&str]) -> (Settings, App, Registry<FakeBackend>) {
    let mut settings = Settings::default();
    settings.monitor.tick_ms = 5;
    let mut registry = Registry::new(FakeBackend::new(), &settings);
    registry.load(paths.iter().copied());
    (settings, App::new(), registry)
}

#[test]
fn q_closes_the_window() {
    let (settings, mut app, mut registry) = setup(&[]);
    assert!(press(key('q'), &settings, &mut app, &mut registry));
}

#[test]
fn space_toggles_the_selected_row_only() {
    let (settings, mut app, mut registry) = setup(&["/c/a.wav", "/c/b.wav"]);

    press(key('j'), &settings, &mut app, &mut registry);
    press(key(' '), &settings, &mut app, &mut registry);

    let rows = registry.rows();
    assert!(!rows[0].playing);
    assert!(rows[1].playing);

    press(key(' '), &settings, &mut app, &mut registry);
    assert!(!registry.rows()[1].playing);
}

#[test]
fn loop_key_while_playing_shows_an_error_notice() {
    let (settings, mut app, mut registry) = setup(&["/c/a.wav"]);

    press(key(' '), &settings, &mut app, &mut registry);
    press(key('r'), &settings, &mut app, &mut registry);

    let notice = app.notice.clone().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(!registry.rows()[0].looping);
}

#[test]
fn volume_keys_step_and_clamp() {
    let (settings, mut app, mut registry) = setup(&["/c/a.wav"]);

    press(key('l'), &settings, &mut app, &mut registry);
    assert_eq!(registry.rows()[0].volume, 0.55);

    press(key('9'), &settings, &mut app, &mut registry);
    press(key('l'), &settings, &mut app, &mut registry);
    assert_eq!(registry.rows()[0].volume, 1.0);

    press(key('0'), &settings, &mut app, &mut registry);
    press(key('h'), &settings, &mut app, &mut registry);
    assert_eq!(registry.rows()[0].volume, 0.0);
    assert!(app.notice.is_none());
}

#[test]
fn keys_without_rows_are_harmless() {
    let (settings, mut app, mut registry) = setup(&[]);
    for c in [' ', 'r', 'l', 'h', '0', 'j', 'k'] {
        assert!(!press(key(c), &settings, &mut app, &mut registry));
    }
    assert!(app.notice.is_none());
}

#[test]
fn picker_choice_loads_rows_and_closes_picker() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.wav"), b"x").unwrap();
    std::fs::write(dir.path().join("b.mp3"), b"x").unwrap();

    let (settings, mut app, mut registry) = setup(&[]);
    app.picker = Some(FilePicker::open(dir.path(), &settings.library).unwrap());

    handle_picker_key(key(' '), &mut app, &mut registry);
    handle_picker_key(key(' '), &mut app, &mut registry);
    handle_picker_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &mut app, &mut registry);

    assert!(app.picker.is_none());
    assert_eq!(registry.len(), 2);
    assert_eq!(app.notice.unwrap().text, "Loaded 2 files");
}

#[test]
fn picker_escape_cancels_without_loading() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.wav"), b"x").unwrap();

    let (settings, mut app, mut registry) = setup(&[]);
    app.picker = Some(FilePicker::open(dir.path(), &settings.library).unwrap());

    handle_picker_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), &mut app, &mut registry);
    assert!(app.picker.is_none());
    assert!(registry.is_empty());
}
