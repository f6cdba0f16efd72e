use std::time::Duration;

use super::*;
use crate::sink::CaptureSink;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn new_set_is_incomplete_test() {
    let (set, _sink) = capture_set(fast_options());

    assert!(!set.all_completed());
    assert!(!set.is_running());
    assert_eq!(Some(SpinnerState::Incomplete), set.state("a"));
    assert_eq!(Some(SpinnerState::Incomplete), set.state("b"));
    assert_eq!(None, set.state("zzz"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn rejects_invalid_spinners_test() {
    let result = SpinnerSet::new(Handle::current(), Spinners::default(), Options::default());
    assert!(matches!(result, Err(SpinError::NoSpinners)));

    let doubled = Spinners::from_labels(["a", "b", "a"]);
    let result = SpinnerSet::new(Handle::current(), doubled, Options::default());
    assert!(matches!(result, Err(SpinError::DuplicateSpinner(name)) if name == "a"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn rejects_invalid_options_test() {
    let options = Options {
        interval: Some(0),
        ..Default::default()
    };

    let result = SpinnerSet::new(Handle::current(), Spinners::from_labels(["x", "y"]), options);
    assert!(matches!(result, Err(SpinError::Config(_))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn completion_overwrites_previous_state_test() {
    let (mut set, _sink) = capture_set(fast_options());

    set.success("a").expect("first completion should succeed");
    assert_eq!(Some(SpinnerState::Success), set.state("a"));

    set.error("a").expect("second completion should succeed");
    assert_eq!(Some(SpinnerState::Error), set.state("a"));

    set.stop();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn completion_validation_test() {
    let (mut set, _sink) = capture_set(fast_options());

    let result = set.success("zzz");
    assert!(matches!(result, Err(SpinError::UnknownSpinner(name)) if name == "zzz"));
    assert!(!set.is_running());

    let result = set.complete("a", SpinnerState::Incomplete);
    assert!(matches!(result, Err(SpinError::InvalidState)));
    assert!(!set.is_running());
    assert_eq!(Some(SpinnerState::Incomplete), set.state("a"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn loop_stops_when_all_completed_test() {
    let (mut set, sink) = capture_set(fast_options());
    set.start();

    wait_until(|| sink.replaces() > 0).await;

    set.success("a").expect("completion should succeed");
    set.error("b").expect("completion should succeed");

    wait_until(|| !set.is_running()).await;

    assert!(set.all_completed());

    let block = sink.last_block().expect("a block should be rendered");
    let lines = block.split(render::LINE_SEPARATOR).collect::<Vec<_>>();
    assert_eq!(2, lines.len());
    assert!(lines[0].contains("✓ Task A"));
    assert!(lines[1].contains("✖ Task B"));

    assert_eq!(1, sink.finishes());
    assert_eq!(0, sink.clears());

    let frozen = sink.replaces();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(frozen, sink.replaces());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn clears_once_after_completion_test() {
    let options = Options {
        interval: Some(10),
        clear_on_complete: Some(true),
        ..Default::default()
    };

    let (mut set, sink) = capture_set(options);
    set.start();

    set.success("a").expect("completion should succeed");
    set.error("b").expect("completion should succeed");

    wait_until(|| !set.is_running()).await;

    assert_eq!(1, sink.clears());
    assert_eq!(0, sink.finishes());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn renders_in_insertion_order_test() {
    let (mut set, sink) = capture_set(fast_options());

    set.error("b").expect("completion should succeed");
    set.success("a").expect("completion should succeed");

    wait_until(|| !set.is_running()).await;

    let block = sink.last_block().expect("a block should be rendered");
    let first = block.find("Task A").expect("Task A should be rendered");
    let second = block.find("Task B").expect("Task B should be rendered");
    assert!(first < second);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn completion_starts_idle_set_test() {
    let (mut set, sink) = capture_set(fast_options());

    set.success("a").expect("completion should succeed");

    assert!(set.is_running());
    wait_until(|| sink.replaces() > 0).await;

    let block = sink.last_block().expect("a block should be rendered");
    assert!(block.contains("✓ Task A"));
    assert!(block.contains("Task B"));
    assert!(!block.contains("✖"));

    set.error("b").expect("completion should succeed");
    wait_until(|| !set.is_running()).await;

    assert!(set.all_completed());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn stop_is_idempotent_test() {
    let (mut set, _sink) = capture_set(fast_options());
    set.stop();

    set.start();
    assert!(set.is_running());

    set.stop();
    set.stop();
    assert!(!set.is_running());
}

fn spinners() -> Spinners {
    Spinners::from_pairs([("a", "Task A"), ("b", "Task B")])
}

fn fast_options() -> Options {
    Options {
        interval: Some(10),
        ..Default::default()
    }
}

fn capture_set(options: Options) -> (SpinnerSet, CaptureSink) {
    let sink = CaptureSink::default();
    let set = SpinnerSet::with_sink(Handle::current(), spinners(), options, Box::new(sink.clone()))
        .expect("spinner set should be created");

    (set, sink)
}

async fn wait_until(mut condition: impl FnMut() -> bool) {
    for _ in 0..200 {
        if condition() {
            return;
        }

        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    panic!("condition was not met in the expected time");
}
