use serde::Deserialize;
use serde::de::{MapAccess, SeqAccess, Visitor};
use std::fmt::{self, Formatter};
use std::path::Path;
use tokio::{fs::File, io::AsyncReadExt};
use twirl_config::Options;

use crate::cli;

#[cfg(test)]
#[path = "./jobs.tests.rs"]
mod jobs_tests;

/// Possible errors from assembling the jobs list.
#[derive(thiserror::Error, Debug)]
pub enum JobsError {
    /// Positional job argument is malformed.
    #[error("job '{0}' is not in 'LABEL=COMMAND' form")]
    MalformedJob(String),

    /// IO error.
    #[error("IO error")]
    IoError(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error")]
    SerializationError(#[from] serde_yaml::Error),
}

/// Single shell job together with the label shown next to its spinner.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub label: String,
    pub command: String,
}

impl Job {
    /// Parses a job from the 'LABEL=COMMAND' command line form.
    pub fn from_arg(arg: &str) -> Result<Self, JobsError> {
        let Some((label, command)) = arg.split_once('=') else {
            return Err(JobsError::MalformedJob(arg.to_owned()));
        };

        let (label, command) = (label.trim(), command.trim());
        if label.is_empty() || command.is_empty() {
            return Err(JobsError::MalformedJob(arg.to_owned()));
        }

        Ok(Self {
            label: label.to_owned(),
            command: command.to_owned(),
        })
    }
}

/// Assembles the final jobs list and options from the command line and the optional jobs file.\
/// **Note** that command line options take precedence over the file ones.
pub async fn collect_jobs(args: &cli::Args) -> Result<(Vec<Job>, Options), JobsError> {
    let mut file = match &args.file {
        Some(path) => load(Path::new(path)).await?,
        None => JobsFile::default(),
    };

    for arg in &args.jobs {
        file.jobs.push(Job::from_arg(arg)?);
    }

    Ok((file.jobs, file.options.merged(args.options())))
}

/// Contents of a YAML jobs file.\
/// Jobs can be either a sequence of commands or a map of labels to commands.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct JobsFile {
    #[serde(default, deserialize_with = "jobs_entries")]
    jobs: Vec<Job>,

    #[serde(default)]
    options: Options,
}

async fn load(path: &Path) -> Result<JobsFile, JobsError> {
    let mut file = File::open(path).await?;
    let mut yaml = String::new();
    file.read_to_string(&mut yaml).await?;

    Ok(serde_yaml::from_str(&yaml)?)
}

fn jobs_entries<'de, D>(deserializer: D) -> Result<Vec<Job>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserializer.deserialize_any(JobsVisitor)
}

struct JobsVisitor;

impl<'de> Visitor<'de> for JobsVisitor {
    type Value = Vec<Job>;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of commands or a map of labels to commands")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut jobs = Vec::new();
        while let Some(command) = seq.next_element::<String>()? {
            jobs.push(Job {
                label: command.clone(),
                command,
            });
        }

        Ok(jobs)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut jobs = Vec::new();
        while let Some((label, command)) = map.next_entry::<String, String>()? {
            jobs.push(Job { label, command });
        }

        Ok(jobs)
    }
}
