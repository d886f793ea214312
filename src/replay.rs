//! Headless driver: applies a scripted list of navigation steps to a
//! [`TabCoordinator`] and prints every change notification.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use thiserror::Error;

use crate::config::NavigatorSettings;
use crate::nav::{DecodeError, PathLog, Route, SelectionTab, TabCoordinator, Tagged};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("malformed step '{0}' (expected push:<taxonomy>:<tag>, pop, clear or select:<tab>)")]
    Malformed(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// One scripted interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Push(Route),
    Pop,
    Clear,
    Select(SelectionTab),
}

impl FromStr for Step {
    type Err = ReplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pop" => return Ok(Step::Pop),
            "clear" => return Ok(Step::Clear),
            _ => {}
        }
        if let Some(route) = s.strip_prefix("push:") {
            return Ok(Step::Push(Route::parse(route)?));
        }
        if let Some(tab) = s.strip_prefix("select:") {
            return Ok(Step::Select(SelectionTab::from_tag(tab)?));
        }
        Err(ReplayError::Malformed(s.to_string()))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Push(route) => write!(f, "push:{}", route.qualified()),
            Step::Pop => f.write_str("pop"),
            Step::Clear => f.write_str("clear"),
            Step::Select(tab) => write!(f, "select:{tab}"),
        }
    }
}

/// Parse every step up front so a bad script runs nothing.
pub fn parse_steps<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Step>, ReplayError> {
    raw.iter().map(|step| step.as_ref().parse()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `[first] navigation path [stacked, first]`
    #[default]
    Text,
    /// `{"tab":"first","path":["link:stacked","stacked:first"]}`
    Json,
}

/// Apply `steps` in order, writing one line per change notification.
pub fn run<W: Write>(
    steps: &[Step],
    settings: &NavigatorSettings,
    format: OutputFormat,
    mut out: W,
) -> io::Result<()> {
    let mut tabs = TabCoordinator::new(settings.reset_stack_on_tab_switch, settings.clear_mode);
    // Every notification of a step has to survive until it is printed.
    let log = PathLog::new(usize::MAX);
    for tab in SelectionTab::ALL {
        tabs.store_mut(*tab).observe(log.recorder(*tab));
    }

    for step in steps {
        match *step {
            Step::Push(route) => tabs.current_mut().push(route),
            Step::Pop => {
                tabs.current_mut().pop();
            }
            Step::Clear => tabs.current_mut().clear(),
            Step::Select(tab) => {
                tabs.select(tab);
            }
        }
        tracing::debug!(step = %step, depth = tabs.current().len(), "replayed");

        for entry in log.drain() {
            match format {
                OutputFormat::Text => writeln!(out, "{entry}")?,
                OutputFormat::Json => {
                    serde_json::to_writer(&mut out, &entry)?;
                    writeln!(out)?;
                }
            }
        }
    }
    out.flush()
}
