use anyhow::Result;
use clap::Parser;
use jobs::Job;
use std::process::{ExitCode, ExitStatus, Stdio};
use std::sync::{Arc, Mutex};
use std::thread::sleep;
use std::time::Duration;
use tokio::process::Command;
use tokio::runtime::Builder;
use tokio::task::JoinSet;
use tracing::{error, info};
use twirl_config::{APP_NAME, APP_VERSION};
use twirl_tui::{SpinnerSet, Spinners};

pub mod cli;
pub mod jobs;

fn main() -> Result<ExitCode> {
    let args = cli::Args::parse();

    let _logging_guard = twirl_common::logging::initialize(APP_NAME)?;
    info!("{} v{} started", APP_NAME, APP_VERSION);

    match run_application(&args) {
        Ok(failed) => {
            info!("{} v{} stopped", APP_NAME, APP_VERSION);
            Ok(if failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        },
        Err(error) => {
            error!("{} v{} terminated with an error: {}", APP_NAME, APP_VERSION, error);
            Err(error)
        },
    }
}

fn run_application(args: &cli::Args) -> Result<usize> {
    let rt = Builder::new_multi_thread().enable_all().build()?;

    let (jobs, options) = rt.block_on(jobs::collect_jobs(args))?;
    if jobs.is_empty() {
        return Err(anyhow::anyhow!("There are no jobs to run, see --help for usage."));
    }

    let spinners = Spinners::from_labels(jobs.iter().map(|job| job.label.clone()));
    let mut spinner_set = SpinnerSet::new(rt.handle().clone(), spinners, options)?;
    spinner_set.start();

    let spinner_set = Arc::new(Mutex::new(spinner_set));
    let failed = rt.block_on(run_jobs(jobs, Arc::clone(&spinner_set)))?;

    // The animation task stops itself right after it draws the last terminal state.
    while spinner_set.lock().expect("spinner set mutex poisoned").is_running() {
        sleep(Duration::from_millis(10));
    }

    Ok(failed)
}

async fn run_jobs(jobs: Vec<Job>, spinner_set: Arc<Mutex<SpinnerSet>>) -> Result<usize> {
    let mut tasks = JoinSet::new();
    for job in jobs {
        tasks.spawn(run_job(job));
    }

    let mut failed = 0;
    while let Some(result) = tasks.join_next().await {
        let (label, success) = result?;
        let mut spinner_set = spinner_set.lock().expect("spinner set mutex poisoned");
        if success {
            spinner_set.success(&label)?;
        } else {
            spinner_set.error(&label)?;
            failed += 1;
        }
    }

    Ok(failed)
}

async fn run_job(job: Job) -> (String, bool) {
    match spawn_command(&job.command).await {
        Ok(status) => (job.label, status.success()),
        Err(error) => {
            error!("Cannot run job '{}': {}", job.label, error);
            (job.label, false)
        },
    }
}

#[cfg(unix)]
async fn spawn_command(command: &str) -> std::io::Result<ExitStatus> {
    Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
}

#[cfg(windows)]
async fn spawn_command(command: &str) -> std::io::Result<ExitStatus> {
    Command::new("cmd")
        .args(["/C", command])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
}
