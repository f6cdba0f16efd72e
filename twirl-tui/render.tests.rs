use super::*;
use crate::registry::Spinners;

#[test]
fn line_format_test() {
    let config = Config::default();
    let spinner = Spinner::new("a", "task a");

    let line = render_line(&spinner, &config, 0);

    let painted = config.incomplete_color.paint("- task a".to_owned());
    assert_eq!(format!("  {painted}"), line);
}

#[test]
fn terminal_line_format_test() {
    let config = Config::default();

    let mut spinner = Spinner::new("a", "task a");
    spinner.complete(SpinnerState::Success);
    let painted = config.success_color.paint("✓ task a".to_owned());
    assert_eq!(format!("  {painted}"), render_line(&spinner, &config, 2));

    spinner.complete(SpinnerState::Error);
    let painted = config.error_color.paint("✖ task a".to_owned());
    assert_eq!(format!("  {painted}"), render_line(&spinner, &config, 2));
}

#[test]
fn block_order_and_rendered_lines_test() {
    let config = Config::default();
    let mut registry = Registry::new(Spinners::from_pairs([("a", "task a"), ("b", "task b")])).unwrap();

    let block = render_block(&mut registry, &config);
    let lines = block.split(LINE_SEPARATOR).collect::<Vec<_>>();

    assert_eq!(2, lines.len());
    assert!(lines[0].contains("task a"));
    assert!(lines[1].contains("task b"));
    assert_eq!(lines[0], registry.get("a").unwrap().rendered());
    assert_eq!(lines[1], registry.get("b").unwrap().rendered());
}

#[test]
fn frame_cycles_test() {
    let config = Config::default();
    let mut registry = Registry::new(Spinners::from_labels(["x"])).unwrap();

    let mut blocks = Vec::new();
    for _ in 0..=config.frames.len() {
        registry.advance_frame(config.frames.len());
        blocks.push(render_block(&mut registry, &config));
    }

    assert_eq!(blocks[0], blocks[config.frames.len()]);
    assert_ne!(blocks[0], blocks[1]);
}

#[test]
fn terminal_glyph_ignores_frame_index_test() {
    let config = Config::default();
    let mut registry = Registry::new(Spinners::from_pairs([("a", "task a"), ("b", "task b")])).unwrap();
    registry.complete("a", SpinnerState::Success).unwrap();

    registry.advance_frame(config.frames.len());
    let first = render_block(&mut registry, &config);
    registry.advance_frame(config.frames.len());
    let second = render_block(&mut registry, &config);

    let first_line = |block: &str| block.split(LINE_SEPARATOR).next().unwrap().to_owned();
    assert_eq!(first_line(&first), first_line(&second));
    assert_ne!(first, second);
}
