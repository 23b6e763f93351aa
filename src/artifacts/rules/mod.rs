//! Resolution rules
//!
//! A rule turns one conflict region into the text that replaces it, markers
//! included. Rules are plain data so that a plan file can name them:
//!
//! - `replace`: discard both sides and substitute a known-good text
//! - `keep_ours` / `keep_theirs`: keep one side verbatim
//! - `concatenate`: keep ours, then append theirs after running it through
//!   a list of [`TheirsTransform`]s

pub mod transform;

use crate::artifacts::conflict::region::ConflictRegion;
use crate::errors::ResolveError;
use serde::Deserialize;

pub use transform::TheirsTransform;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionRule {
    Replace {
        text: String,
    },
    KeepOurs,
    KeepTheirs,
    Concatenate {
        #[serde(default)]
        transforms: Vec<TheirsTransform>,
    },
}

impl ResolutionRule {
    /// `eol` is the line ending of the whole document.
    pub fn apply(&self, region: &ConflictRegion, eol: &str) -> Result<String, ResolveError> {
        match self {
            ResolutionRule::Replace { text } => Ok(text.clone()),
            ResolutionRule::KeepOurs => Ok(region.ours().to_string()),
            ResolutionRule::KeepTheirs => Ok(region.theirs().to_string()),
            ResolutionRule::Concatenate { transforms } => {
                let theirs = transforms
                    .iter()
                    .try_fold(region.theirs().to_string(), |theirs, transform| {
                        transform.apply(&theirs, eol)
                    })?;

                Ok(join_sides(region.ours(), &theirs, eol))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ResolutionRule::Replace { .. } => "replace",
            ResolutionRule::KeepOurs => "keep_ours",
            ResolutionRule::KeepTheirs => "keep_theirs",
            ResolutionRule::Concatenate { .. } => "concatenate",
        }
    }
}

/// Ours, one blank line, then theirs. An empty side contributes nothing.
fn join_sides(ours: &str, theirs: &str, eol: &str) -> String {
    match (ours.is_empty(), theirs.is_empty()) {
        (true, _) => theirs.to_string(),
        (false, true) => ours.to_string(),
        (false, false) => format!("{ours}{eol}{eol}{theirs}"),
    }
}
