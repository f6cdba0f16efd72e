use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn stops_on_verdict_test() {
    let counter = Arc::new(AtomicUsize::new(0));
    let _counter = Arc::clone(&counter);

    let mut ticker = Ticker::default();
    ticker.start(&Handle::current(), Duration::from_millis(5), move || {
        if _counter.fetch_add(1, Ordering::SeqCst) >= 2 {
            TickFlow::Stop
        } else {
            TickFlow::Continue
        }
    });

    wait_until(|| !ticker.is_running()).await;

    assert_eq!(3, counter.load(Ordering::SeqCst));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn restart_stops_previous_task_test() {
    let first = Arc::new(AtomicUsize::new(0));
    let _first = Arc::clone(&first);

    let mut ticker = Ticker::default();
    ticker.start(&Handle::current(), Duration::from_millis(5), move || {
        _first.fetch_add(1, Ordering::SeqCst);
        TickFlow::Continue
    });

    wait_until(|| first.load(Ordering::SeqCst) > 0).await;

    let second = Arc::new(AtomicUsize::new(0));
    let _second = Arc::clone(&second);

    ticker.start(&Handle::current(), Duration::from_millis(5), move || {
        _second.fetch_add(1, Ordering::SeqCst);
        TickFlow::Continue
    });

    let frozen = first.load(Ordering::SeqCst);
    wait_until(|| second.load(Ordering::SeqCst) > 2).await;

    assert_eq!(frozen, first.load(Ordering::SeqCst));
    assert!(ticker.is_running());

    ticker.stop();

    assert!(!ticker.is_running());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn stop_is_idempotent_test() {
    let mut ticker = Ticker::default();
    ticker.stop();

    assert!(!ticker.is_running());

    ticker.start(&Handle::current(), Duration::from_millis(5), || TickFlow::Continue);

    assert!(ticker.is_running());

    ticker.stop();
    ticker.stop();

    assert!(!ticker.is_running());
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
