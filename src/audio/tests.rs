use super::sink::decode;
use super::types::AudioError;

#[test]
fn decode_reports_missing_file_as_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.wav");

    match decode(&missing) {
        Err(AudioError::Open { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected open error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn decode_rejects_garbage_as_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let bogus = dir.path().join("noise.mp3");
    std::fs::write(&bogus, b"definitely not audio").unwrap();

    assert!(matches!(decode(&bogus), Err(AudioError::Decode { .. })));
}

#[test]
fn audio_error_messages_name_the_file() {
    let err = AudioError::UnknownDuration {
        path: "/tmp/clip.wav".into(),
    };
    assert!(err.to_string().contains("clip.wav"));
}
