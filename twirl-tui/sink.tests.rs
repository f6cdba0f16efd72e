use super::*;

#[test]
fn terminal_sink_redraws_in_place_test() {
    let mut buffer = Vec::new();
    {
        let mut sink = TerminalSink::new(&mut buffer);
        sink.replace("one a\ntwo b").unwrap();
        sink.replace("three c\ntwo d").unwrap();
        sink.finish().unwrap();
    }

    let written = String::from_utf8(buffer).unwrap();

    assert!(written.contains("\x1b[?25l"));
    assert!(written.contains("one a\ntwo b"));
    assert!(written.contains("\x1b[1F"));
    assert!(written.contains("\x1b[J"));
    assert!(written.contains("three c\ntwo d"));
    assert!(written.ends_with("\n\x1b[?25h"));
}

#[test]
fn terminal_sink_clear_test() {
    let mut buffer = Vec::new();
    {
        let mut sink = TerminalSink::new(&mut buffer);
        sink.replace("spin x").unwrap();
        sink.clear().unwrap();
    }

    let written = String::from_utf8(buffer).unwrap();

    assert!(written.contains("\x1b[1G"));
    assert!(written.ends_with("\x1b[J\x1b[?25h"));
}

#[test]
fn terminal_sink_clear_without_block_test() {
    let mut buffer = Vec::new();
    {
        let mut sink = TerminalSink::new(&mut buffer);
        sink.clear().unwrap();
        sink.finish().unwrap();
    }

    assert!(buffer.is_empty());
}

#[test]
fn terminal_sink_drop_restores_cursor_test() {
    let mut buffer = Vec::new();
    {
        let mut sink = TerminalSink::new(&mut buffer);
        sink.replace("spin x").unwrap();
    }

    let written = String::from_utf8(buffer).unwrap();

    assert!(written.ends_with("\x1b[?25h"));
}

#[test]
fn capture_sink_test() {
    let sink = CaptureSink::default();
    let mut boxed: Box<dyn RenderSink + Send> = Box::new(sink.clone());

    boxed.replace("a").unwrap();
    boxed.replace("b").unwrap();
    boxed.clear().unwrap();
    boxed.finish().unwrap();

    assert_eq!(vec!["a", "b"], sink.blocks());
    assert_eq!(Some("b".to_owned()), sink.last_block());
    assert_eq!(2, sink.replaces());
    assert_eq!(1, sink.clears());
    assert_eq!(1, sink.finishes());
}

#[test]
fn null_sink_test() {
    let mut sink = NullSink;

    sink.replace("a").unwrap();
    sink.clear().unwrap();
    sink.finish().unwrap();
}
