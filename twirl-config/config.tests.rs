use super::*;

#[test]
fn defaults_test() {
    let config = Config::default();

    assert_eq!(vec!["-", "\\", "|", "/"], config.frames);
    assert_eq!(80, config.interval);
    assert_eq!(Duration::from_millis(80), config.period());
    assert_eq!("  ", config.indent);
    assert!(!config.clear_on_complete);
    assert!(!config.debug);
    assert_eq!(SpinColor::new(Color::Blue), config.incomplete_color);
    assert_eq!(SpinColor::new(Color::Green), config.success_color);
    assert_eq!(SpinColor::new(Color::Red), config.error_color);
    assert_eq!("✓", config.success_symbol);
    assert_eq!("✖", config.error_symbol);
}

#[test]
fn with_options_test() {
    let options = Options {
        frames: Some(vec!["∙".to_owned(), "●".to_owned()]),
        interval: Some(120),
        indent: Some(String::new()),
        clear_on_complete: Some(true),
        success_symbol: Some("OK".to_owned()),
        ..Default::default()
    };

    let config = Config::with_options(options).unwrap();

    assert_eq!(vec!["∙", "●"], config.frames);
    assert_eq!(120, config.interval);
    assert_eq!("", config.indent);
    assert!(config.clear_on_complete);
    assert_eq!("OK", config.success_symbol);
    assert_eq!("✖", config.error_symbol);
}

#[test]
fn with_options_validation_test() {
    let options = Options {
        interval: Some(0),
        ..Default::default()
    };
    assert!(matches!(Config::with_options(options), Err(ConfigError::InvalidInterval)));

    let options = Options {
        frames: Some(Vec::new()),
        ..Default::default()
    };
    assert!(matches!(Config::with_options(options), Err(ConfigError::NoFrames)));

    let options = Options {
        frames: Some(vec![String::new()]),
        ..Default::default()
    };
    assert!(matches!(Config::with_options(options), Err(ConfigError::EmptyFrame)));
}

#[test]
fn preset_option_test() {
    let config = Config::with_options(Options {
        preset: Some("dots".to_owned()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(frames::owned(frames::DOTS), config.frames);

    let explicit = vec!["x".to_owned()];
    let config = Config::with_options(Options {
        preset: Some("dots".to_owned()),
        frames: Some(explicit.clone()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(explicit, config.frames);

    let result = Config::with_options(Options {
        preset: Some("wobble".to_owned()),
        ..Default::default()
    });
    assert!(matches!(result, Err(ConfigError::UnknownPreset(_))));
}

#[test]
fn from_yaml_test() {
    let options = Options::from_yaml("interval: 50\npreset: dots\nerror_color: dark_red\n").unwrap();

    assert_eq!(Some(50), options.interval);
    assert_eq!(Some("dots".to_owned()), options.preset);
    assert_eq!(Some(SpinColor::new(Color::DarkRed)), options.error_color);
}

#[test]
fn from_yaml_rejects_unknown_keys_test() {
    assert!(Options::from_yaml("intervall: 50").is_err());
    assert!(Options::from_yaml("interval: fast").is_err());
    assert!(Options::from_yaml("interval: -10").is_err());
    assert!(Options::from_yaml("success_color: greenish").is_err());
}

#[test]
fn merged_options_test() {
    let base = Options::from_yaml("interval: 40\nindent: '    '\n").unwrap();
    let overrides = Options {
        interval: Some(90),
        ..Default::default()
    };

    let merged = base.merged(overrides);

    assert_eq!(Some(90), merged.interval);
    assert_eq!(Some("    ".to_owned()), merged.indent);
    assert_eq!(None, merged.preset);
}
