use super::*;

#[test]
fn wait_for_missing_task_test() {
    wait_for_task::<()>(None, "missing");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn wait_for_finished_task_test() {
    let task = tokio::spawn(async { 2 + 2 });

    wait_for_task(Some(task), "finished");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn wait_aborts_stuck_task_test() {
    let task = tokio::spawn(async {
        tokio::time::sleep(Duration::from_secs(60)).await;
    });

    let started = Instant::now();
    wait_for_task(Some(task), "stuck");

    assert!(started.elapsed() < Duration::from_secs(1));
}
