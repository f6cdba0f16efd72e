use clap::Parser;
use rstest::rstest;

use super::*;

#[rstest]
#[case("build=cargo build", "build", "cargo build")]
#[case(" lint = cargo clippy ", "lint", "cargo clippy")]
#[case("eq=a=b", "eq", "a=b")]
fn job_from_arg_test(#[case] arg: &str, #[case] label: &str, #[case] command: &str) {
    let job = Job::from_arg(arg).expect("job should be parsed");

    assert_eq!(label, job.label);
    assert_eq!(command, job.command);
}

#[rstest]
#[case("cargo build")]
#[case("=cargo build")]
#[case("build=")]
#[case("")]
fn malformed_job_test(#[case] arg: &str) {
    let result = Job::from_arg(arg);

    assert!(matches!(result, Err(JobsError::MalformedJob(bad)) if bad == arg));
}

#[test]
fn jobs_file_mapping_test() {
    let yaml = "jobs:\n  build: cargo build\n  lint: cargo clippy\n";
    let file = serde_yaml::from_str::<JobsFile>(yaml).expect("jobs file should be deserialized");

    assert_eq!(2, file.jobs.len());
    assert_eq!(job("build", "cargo build"), file.jobs[0]);
    assert_eq!(job("lint", "cargo clippy"), file.jobs[1]);
}

#[test]
fn jobs_file_sequence_test() {
    let yaml = "jobs:\n  - cargo build\n  - cargo test\n";
    let file = serde_yaml::from_str::<JobsFile>(yaml).expect("jobs file should be deserialized");

    assert_eq!(2, file.jobs.len());
    assert_eq!(job("cargo build", "cargo build"), file.jobs[0]);
    assert_eq!(job("cargo test", "cargo test"), file.jobs[1]);
}

#[test]
fn jobs_file_options_test() {
    let yaml = "jobs:\n  build: cargo build\noptions:\n  interval: 120\n  preset: dots\n";
    let file = serde_yaml::from_str::<JobsFile>(yaml).expect("jobs file should be deserialized");

    assert_eq!(Some(120), file.options.interval);
    assert_eq!(Some("dots".to_owned()), file.options.preset);
}

#[rstest]
#[case("jobs: 42\n")]
#[case("jobs:\n  - cargo build\nunknown: 1\n")]
#[case("jobs:\n  build: cargo build\noptions:\n  intervall: 50\n")]
fn jobs_file_invalid_shape_test(#[case] yaml: &str) {
    assert!(serde_yaml::from_str::<JobsFile>(yaml).is_err());
}

#[tokio::test]
async fn collect_jobs_without_file_test() {
    let args = cli::Args::parse_from(["twirl", "build=cargo build", "--interval", "120"]);
    let (jobs, options) = collect_jobs(&args).await.expect("jobs should be collected");

    assert_eq!(1, jobs.len());
    assert_eq!(job("build", "cargo build"), jobs[0]);
    assert_eq!(Some(120), options.interval);
}

#[tokio::test]
async fn collect_jobs_rejects_malformed_argument_test() {
    let args = cli::Args::parse_from(["twirl", "cargo build"]);
    let result = collect_jobs(&args).await;

    assert!(matches!(result, Err(JobsError::MalformedJob(bad)) if bad == "cargo build"));
}

fn job(label: &str, command: &str) -> Job {
    Job {
        label: label.to_owned(),
        command: command.to_owned(),
    }
}
