use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

#[cfg(test)]
#[path = "./tasks.tests.rs"]
mod tasks_tests;

const ABORT_AFTER: Duration = Duration::from_millis(50);
const GIVE_UP_AFTER: Duration = Duration::from_millis(100);

/// Synchronously waits for a cancelled task to end, aborting it if it does not stop on its own.
pub fn wait_for_task<T>(task: Option<JoinHandle<T>>, task_name: &str) {
    let Some(task) = task else {
        return;
    };

    let started = Instant::now();
    while !task.is_finished() {
        if started.elapsed() > GIVE_UP_AFTER {
            tracing::error!("Task {task_name} is still running after abort, giving up waiting.");
            break;
        }

        if started.elapsed() > ABORT_AFTER {
            task.abort();
        }

        std::thread::sleep(Duration::from_millis(1));
    }
}
