use super::*;

#[test]
fn preset_test() {
    assert_eq!(owned(LINE), preset("line").unwrap());
    assert_eq!(owned(DOTS), preset("dots").unwrap());
    assert_eq!(owned(ARROW), preset("arrow").unwrap());
    assert_eq!(owned(PIPE), preset("pipe").unwrap());
}

#[test]
fn unknown_preset_test() {
    assert!(matches!(preset("wobble"), Err(ConfigError::UnknownPreset(name)) if name == "wobble"));
}

#[test]
fn presets_are_not_empty_test() {
    for frames in [LINE, DOTS, ARROW, PIPE] {
        assert!(!frames.is_empty());
        assert!(frames.iter().all(|frame| !frame.is_empty()));
    }
}
