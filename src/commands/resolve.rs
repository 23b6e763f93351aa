use crate::areas::resolver::Resolver;
use crate::artifacts::conflict::resolver::Resolution;
use crate::artifacts::outcome::{BatchSummary, FileOutcome, FileReport};
use crate::artifacts::plan::ResolutionPlan;
use crate::artifacts::rules::ResolutionRule;
use crate::errors::ResolveError;
use derive_new::new;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, new)]
pub struct ResolveOptions {
    /// Resolve in memory only.
    pub dry_run: bool,
    pub backup: bool,
}

impl Resolver {
    /// Resolves every plan entry in order. A failing file is reported and
    /// skipped; it never stops the remaining entries.
    pub fn resolve_plan(
        &self,
        plan: &ResolutionPlan,
        options: ResolveOptions,
    ) -> anyhow::Result<BatchSummary> {
        let mut summary = BatchSummary::default();

        for entry in &plan.files {
            let outcome = self.resolve_file(&entry.path, &entry.rules, options);
            let report = FileReport::new(entry.path.clone(), outcome);

            writeln!(self.writer(), "{report}")?;
            summary.push(report);
        }

        writeln!(self.writer(), "{summary}")?;

        Ok(summary)
    }

    pub fn resolve_file(
        &self,
        path: &Path,
        rules: &[ResolutionRule],
        options: ResolveOptions,
    ) -> FileOutcome {
        match self.try_resolve_file(path, rules, options) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping file");
                FileOutcome::Skipped(err)
            }
        }
    }

    fn try_resolve_file(
        &self,
        path: &Path,
        rules: &[ResolutionRule],
        options: ResolveOptions,
    ) -> Result<FileOutcome, ResolveError> {
        let text = self.workspace().read_file(path)?;

        let (resolved, regions) = match self.conflicts().resolve(&text, rules)? {
            Resolution::Clean => {
                tracing::info!(path = %path.display(), "no conflict markers");
                return Ok(FileOutcome::Clean);
            }
            Resolution::Resolved { text, regions } => (text, regions),
        };

        if options.dry_run {
            tracing::info!(path = %path.display(), regions, "dry run, not writing");
            return Ok(FileOutcome::Resolved { regions });
        }

        if options.backup {
            let backup = self.workspace().backup_file(path)?;
            tracing::debug!(backup = %backup.display(), "saved original");
        }

        self.workspace().write_file(path, &resolved)?;
        tracing::info!(path = %path.display(), regions, "wrote resolved file");

        Ok(FileOutcome::Resolved { regions })
    }
}
