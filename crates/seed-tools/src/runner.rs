//! Sequential child-process pipelines.
//!
//! Steps run one after another with the parent's stdio inherited. The first
//! step that fails to spawn or exits unsuccessfully stops the pipeline; later
//! steps never start.

use std::fmt;
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Step `{step}` has an empty command line")]
    EmptyCommand { step: String },
    #[error("Failed to start step `{step}` ({program}): {source}")]
    Spawn {
        step: String,
        program: String,
        source: std::io::Error,
    },
    #[error("Step `{step}` failed with {}", describe_exit(.code))]
    ChildFailed { step: String, code: Option<i32> },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {code}"),
        None => "no exit status (terminated by signal)".to_string(),
    }
}

/// One external command in a pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    name: String,
    program: String,
    args: Vec<String>,
}

impl Step {
    pub fn new(name: impl Into<String>, program: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Splits a command line on whitespace. No shell quoting is interpreted.
    pub fn from_command_line(name: impl Into<String>, line: &str) -> Result<Self, RunnerError> {
        let name = name.into();
        let mut words = line.split_whitespace();
        let Some(program) = words.next() else {
            return Err(RunnerError::EmptyCommand { step: name });
        };
        Ok(Self::new(name, program).args(words))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the command to completion.
    pub fn run(&self) -> Result<(), RunnerError> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| RunnerError::Spawn {
                step: self.name.clone(),
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(RunnerError::ChildFailed {
                step: self.name.clone(),
                code: status.code(),
            })
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Steps that completed before the pipeline returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub completed: Vec<String>,
}

/// An ordered, fail-fast list of steps.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::default();

        for (i, step) in self.steps.iter().enumerate() {
            info!("[{}/{}] {}: {}", i + 1, self.steps.len(), step.name, step);

            if let Err(e) = step.run() {
                error!("{e}");
                let skipped = self.steps.len() - i - 1;
                if skipped > 0 {
                    warn!("Skipping {skipped} remaining step(s)");
                }
                return Err(e);
            }

            info!("{} completed", step.name);
            summary.completed.push(step.name.clone());
        }

        Ok(summary)
    }
}
