use super::display::{display_from_fields, truncate_display};
use super::tags::describe;
use crate::config::{LibrarySettings, TrackDisplayField};
use std::path::Path;

#[test]
fn display_from_fields_can_format_artist_title() {
    let p = Path::new("/tmp/Song.mp3");
    let fields = [TrackDisplayField::Artist, TrackDisplayField::Title];
    assert_eq!(
        display_from_fields(p, "Song", Some("Artist"), None, &fields, " - "),
        "Artist - Song"
    );
    assert_eq!(
        display_from_fields(p, "Song", Some("  Artist  "), None, &fields, " - "),
        "Artist - Song"
    );
    assert_eq!(
        display_from_fields(p, "Song", None, None, &fields, " - "),
        "Song"
    );
}

#[test]
fn display_from_fields_filename_keeps_extension() {
    let p = Path::new("/clips/door-slam.wav");
    assert_eq!(
        display_from_fields(p, "door-slam", None, None, &[TrackDisplayField::Filename], " - "),
        "door-slam.wav"
    );
}

#[test]
fn truncate_display_keeps_short_names_and_cuts_long_ones() {
    assert_eq!(truncate_display("short.mp3", 20), "short.mp3");
    assert_eq!(truncate_display("exactly-twenty-chars", 20), "exactly-twenty-chars");
    assert_eq!(
        truncate_display("a-very-long-recording-name.wav", 20),
        "a-very-long-recor..."
    );
    assert_eq!(truncate_display("a-very-long-recording-name.wav", 20).chars().count(), 20);
}

#[test]
fn truncate_display_counts_characters_not_bytes() {
    assert_eq!(truncate_display("ééééééé", 5), "éé...");
}

#[test]
fn describe_untagged_file_uses_filename() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("some-extremely-long-clip-name.mp3");
    std::fs::write(&path, b"no tags here").unwrap();

    let info = describe(&path, &LibrarySettings::default(), 20);
    assert_eq!(info.title, "some-extremely-long-clip-name");
    assert_eq!(info.display, "some-extremely-lo...");
    assert!(info.artist.is_none());
    assert!(info.album.is_none());
    assert!(info.duration.is_none());
    assert_eq!(info.path, path);
}

#[test]
fn describe_missing_file_still_yields_a_row_name() {
    let settings = LibrarySettings {
        display_fields: vec![TrackDisplayField::Artist, TrackDisplayField::Title],
        ..LibrarySettings::default()
    };
    let info = describe(Path::new("/nowhere/kick.wav"), &settings, 20);
    assert_eq!(info.title, "kick");
    assert_eq!(info.display, "kick");
    assert!(info.duration.is_none());
}

#[test]
fn describe_reads_the_container_duration() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("half.wav");
    std::fs::write(&path, crate::library::test_wav(8_000, 4_000)).unwrap();

    let info = describe(&path, &LibrarySettings::default(), 20);
    let d = info.duration.unwrap();
    assert!(d >= std::time::Duration::from_millis(490) && d <= std::time::Duration::from_millis(510));
    assert_eq!(info.display, "half.wav");
}
