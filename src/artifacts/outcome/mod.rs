use crate::errors::ResolveError;
use colored::Colorize;
use derive_new::new;
use std::path::PathBuf;

const LABEL_WIDTH: usize = 9;

#[derive(Debug)]
pub enum FileOutcome {
    Resolved { regions: usize },
    /// No conflict markers; the file was left untouched.
    Clean,
    Skipped(ResolveError),
}

impl FileOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            FileOutcome::Resolved { .. } => "resolved",
            FileOutcome::Clean => "clean",
            FileOutcome::Skipped(_) => "skipped",
        }
    }
}

#[derive(Debug, new)]
pub struct FileReport {
    path: PathBuf,
    outcome: FileOutcome,
}

impl FileReport {
    pub fn is_skipped(&self) -> bool {
        matches!(self.outcome, FileOutcome::Skipped(_))
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.outcome, FileOutcome::Resolved { .. })
    }
}

impl std::fmt::Display for FileReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = format!("{:<width$}", self.outcome.label(), width = LABEL_WIDTH);
        let path = self.path.display();

        match &self.outcome {
            FileOutcome::Resolved { regions } => {
                let noun = if *regions == 1 { "region" } else { "regions" };
                write!(f, "{}{path} ({regions} {noun})", label.as_str().green())
            }
            FileOutcome::Clean => write!(f, "{}{path}", label.as_str().normal()),
            FileOutcome::Skipped(err) => write!(f, "{}{path}: {err}", label.as_str().red()),
        }
    }
}

/// Outcomes of one batch run, in plan order.
#[derive(Debug, Default)]
pub struct BatchSummary {
    reports: Vec<FileReport>,
}

impl BatchSummary {
    pub fn push(&mut self, report: FileReport) {
        self.reports.push(report);
    }

    pub fn resolved_count(&self) -> usize {
        self.reports.iter().filter(|r| r.is_resolved()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.reports.iter().any(FileReport::is_skipped)
    }
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Resolved {} of {} files",
            self.resolved_count(),
            self.reports.len()
        )
    }
}
