//! Resolution plans
//!
//! A plan is a TOML table that names each file to repair together with the
//! rules for its conflict regions. Relative paths are taken from the
//! directory that holds the plan file.
//!
//! ```toml
//! backup = false
//!
//! [markers]
//! ours = "<<<<<<< HEAD"
//! separator = "======="
//! theirs = ">>>>>>> origin/main"
//!
//! [[file]]
//! path = "client/src/components/UserMenu.test.js"
//!
//! [[file.rules]]
//! kind = "concatenate"
//!
//! [[file.rules.transforms]]
//! kind = "extract_container"
//! name = "UserMenu"
//! ```

use crate::artifacts::conflict::ConflictMarkers;
use crate::artifacts::rules::ResolutionRule;
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_PLAN_FILE: &str = "unconflict.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolutionPlan {
    /// Copy each file to `<path>.orig` before overwriting it.
    #[serde(default)]
    pub backup: bool,

    #[serde(default)]
    pub markers: ConflictMarkers,

    #[serde(default, rename = "file")]
    pub files: Vec<PlanEntry>,

    #[serde(skip)]
    root: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanEntry {
    pub path: PathBuf,
    pub rules: Vec<ResolutionRule>,
}

impl ResolutionPlan {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read plan file {}", path.display()))?;

        let root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let plan = Self::parse(&content, root)
            .with_context(|| format!("invalid plan file {}", path.display()))?;

        tracing::info!(
            plan = %path.display(),
            files = plan.files.len(),
            "loaded resolution plan"
        );

        Ok(plan)
    }

    pub fn parse(content: &str, root: PathBuf) -> anyhow::Result<Self> {
        let mut plan: ResolutionPlan = toml::from_str(content)?;
        plan.root = root;
        plan.validate()?;
        Ok(plan)
    }

    fn validate(&self) -> anyhow::Result<()> {
        self.markers.validate()?;

        for entry in &self.files {
            if entry.path.as_os_str().is_empty() {
                anyhow::bail!("plan entry with an empty path");
            }
            if entry.rules.is_empty() {
                anyhow::bail!("no rules configured for {}", entry.path.display());
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
