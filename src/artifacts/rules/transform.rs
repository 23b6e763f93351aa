use crate::artifacts::conflict::strip_terminator;
use crate::errors::ResolveError;
use serde::Deserialize;

pub const DEFAULT_CONTAINER_CALL: &str = "describe";
pub const DEFAULT_CONTAINER_SUFFIX: &str = " main";

/// A rewrite applied to the theirs side before it is appended to ours.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TheirsTransform {
    /// Trim the side, then drop its first `count` lines.
    DropLeadingLines { count: usize },
    /// Keep only the `call("name", () => { ... });` block, renamed to
    /// `call('name<suffix>', () => { ... });`.
    ExtractContainer {
        #[serde(default = "default_container_call")]
        call: String,
        name: String,
        #[serde(default = "default_container_suffix")]
        suffix: String,
    },
    /// Rewrite every line equal to `from` (ignoring indentation) into `to`.
    SubstituteLine { from: String, to: String },
}

fn default_container_call() -> String {
    DEFAULT_CONTAINER_CALL.to_string()
}

fn default_container_suffix() -> String {
    DEFAULT_CONTAINER_SUFFIX.to_string()
}

impl TheirsTransform {
    pub fn apply(&self, theirs: &str, eol: &str) -> Result<String, ResolveError> {
        match self {
            TheirsTransform::DropLeadingLines { count } => drop_leading_lines(theirs, *count, eol),
            TheirsTransform::ExtractContainer { call, name, suffix } => {
                extract_container(theirs, call, name, suffix)
            }
            TheirsTransform::SubstituteLine { from, to } => substitute_line(theirs, from, to),
        }
    }
}

fn drop_leading_lines(theirs: &str, count: usize, eol: &str) -> Result<String, ResolveError> {
    let lines = theirs.trim().lines().collect::<Vec<_>>();

    if lines.len() < count {
        return Err(ResolveError::pattern_not_found(format!(
            "{count} leading lines (found {})",
            lines.len()
        )));
    }

    Ok(lines[count..].join(eol))
}

fn extract_container(
    theirs: &str,
    call: &str,
    name: &str,
    suffix: &str,
) -> Result<String, ResolveError> {
    let pattern = format!(
        r#"(?s){call}\((?:"{name}"|'{name}'),\s*\(\)\s*=>\s*\{{(.*)\}}\);"#,
        call = regex::escape(call),
        name = regex::escape(name)
    );
    let re = regex::Regex::new(&pattern)?;

    let body = re
        .captures(theirs)
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| ResolveError::pattern_not_found(format!("{call}(\"{name}\", ...)")))?;

    tracing::debug!(call, name, "extracted container from theirs");

    let renamed = format!("{name}{suffix}").replace('\'', "\\'");
    Ok(format!("{call}('{renamed}', () => {{{}}});", body.as_str()))
}

fn substitute_line(theirs: &str, from: &str, to: &str) -> Result<String, ResolveError> {
    let target = from.trim();
    let mut substituted = 0usize;

    let rewritten = theirs
        .split_inclusive('\n')
        .map(|raw| {
            let content = strip_terminator(raw);
            if content.trim() == target {
                substituted += 1;
                let indent = &content[..content.len() - content.trim_start().len()];
                format!("{indent}{to}{}", &raw[content.len()..])
            } else {
                raw.to_string()
            }
        })
        .collect::<String>();

    if substituted == 0 {
        return Err(ResolveError::pattern_not_found(from));
    }

    tracing::debug!(substituted, "substituted lines in theirs");
    Ok(rewritten)
}
