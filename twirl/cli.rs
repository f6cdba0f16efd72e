use clap::Parser;
use std::io::IsTerminal;
use twirl_config::{Options, SpinColor};

/// twirl runs shell jobs concurrently, rendering a named spinner for each one.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Jobs to run, each in 'LABEL=COMMAND' form.
    #[arg()]
    pub jobs: Vec<String>,

    /// Path to a YAML file with jobs and options.
    #[arg(long, short, env = "TWIRL_JOBS_FILE")]
    pub file: Option<String>,

    /// Animation interval in milliseconds.
    #[arg(long, short)]
    pub interval: Option<u64>,

    /// Frame preset to animate with (line, dots, arrow or pipe).
    #[arg(long, short)]
    pub preset: Option<String>,

    /// Prefix prepended to every rendered line.
    #[arg(long)]
    pub indent: Option<String>,

    /// Remove the spinners block once all jobs are completed.
    #[arg(long, short)]
    pub clear: bool,

    /// Suppress drawing, keeping the application logs only.
    #[arg(long, short)]
    pub debug: bool,

    /// Color used for spinners that are still running.
    #[arg(long)]
    pub color: Option<SpinColor>,
}

impl Args {
    /// Returns configuration options assembled from the command line switches.\
    /// **Note** that drawing is suppressed when `stderr` is not an interactive terminal.
    pub fn options(&self) -> Options {
        Options {
            preset: self.preset.clone(),
            interval: self.interval,
            indent: self.indent.clone(),
            clear_on_complete: self.clear.then_some(true),
            debug: (self.debug || !std::io::stderr().is_terminal()).then_some(true),
            incomplete_color: self.color,
            ..Default::default()
        }
    }
}
