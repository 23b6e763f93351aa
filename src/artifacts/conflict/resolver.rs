use crate::artifacts::conflict::{ConflictMarkers, line_ending};
use crate::artifacts::conflict::lexer::MarkerLexer;
use crate::artifacts::conflict::region::{ConflictRegion, Segment};
use crate::artifacts::rules::ResolutionRule;
use crate::errors::ResolveError;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No markers in the document; nothing to write.
    Clean,
    Resolved { text: String, regions: usize },
}

impl Resolution {
    /// The resolved text, or `original` when the document was clean.
    pub fn into_text(self, original: &str) -> String {
        match self {
            Resolution::Clean => original.to_string(),
            Resolution::Resolved { text, .. } => text,
        }
    }
}

/// A lexed document: plain spans interleaved with conflict regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    segments: Vec<Segment>,
    eol: &'static str,
}

impl Document {
    pub fn parse(text: &str, markers: &ConflictMarkers) -> Result<Self, ResolveError> {
        let segments = MarkerLexer::new(markers).tokenize(text)?;
        Ok(Document {
            segments,
            eol: line_ending(text),
        })
    }

    pub fn regions(&self) -> impl Iterator<Item = &ConflictRegion> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Conflict(region) => Some(region),
            Segment::Plain(_) => None,
        })
    }

    pub fn region_count(&self) -> usize {
        self.regions().count()
    }

    pub fn is_clean(&self) -> bool {
        self.region_count() == 0
    }

    /// Resolves every region in order. A single rule applies to all regions,
    /// otherwise rules and regions are paired one to one.
    pub fn resolve(&self, rules: &[ResolutionRule]) -> Result<String, ResolveError> {
        let regions = self.region_count();
        if rules.is_empty() || (rules.len() != 1 && rules.len() != regions) {
            return Err(ResolveError::RuleCountMismatch {
                regions,
                rules: rules.len(),
            });
        }

        let mut resolved = String::new();
        let mut region_index = 0;
        let mut drop_terminator = false;

        for segment in &self.segments {
            match segment {
                Segment::Plain(text) => {
                    let text = if drop_terminator {
                        text.strip_prefix("\r\n")
                            .or_else(|| text.strip_prefix('\n'))
                            .unwrap_or(text)
                    } else {
                        text
                    };
                    resolved.push_str(text);
                    drop_terminator = false;
                }
                Segment::Conflict(region) => {
                    let rule = rules.get(region_index).unwrap_or(&rules[0]);
                    let span = rule.apply(region, self.eol)?;

                    tracing::debug!(
                        line = region.line(),
                        rule = rule.name(),
                        "resolved conflict region"
                    );

                    // An empty resolution removes the region's line entirely.
                    drop_terminator = span.is_empty();
                    resolved.push_str(&span);
                    region_index += 1;
                }
            }
        }

        Ok(resolved)
    }
}

#[derive(Debug, Clone, Default, new)]
pub struct ConflictResolver {
    markers: ConflictMarkers,
}

impl ConflictResolver {
    pub fn parse(&self, text: &str) -> Result<Document, ResolveError> {
        Document::parse(text, &self.markers)
    }

    /// Resolves all conflict regions of `text`. A document without markers
    /// is reported as [`Resolution::Clean`] and is never an error.
    pub fn resolve(
        &self,
        text: &str,
        rules: &[ResolutionRule],
    ) -> Result<Resolution, ResolveError> {
        let document = self.parse(text)?;

        if document.is_clean() {
            return Ok(Resolution::Clean);
        }

        let regions = document.region_count();
        let text = document.resolve(rules)?;

        Ok(Resolution::Resolved { text, regions })
    }

    pub fn resolve_text(
        &self,
        text: &str,
        rules: &[ResolutionRule],
    ) -> Result<String, ResolveError> {
        Ok(self.resolve(text, rules)?.into_text(text))
    }
}
