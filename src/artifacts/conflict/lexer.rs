use crate::artifacts::conflict::region::{ConflictRegion, Segment};
use crate::artifacts::conflict::{ConflictMarkers, Marker, strip_terminator};
use crate::errors::{MalformedReason, ResolveError};
use derive_new::new;

enum State {
    Plain,
    Ours {
        line: usize,
        ours: String,
    },
    Theirs {
        line: usize,
        ours: String,
        theirs: String,
    },
}

/// Single-pass tokenizer over marker lines.
///
/// Concatenating the plain spans with the original region text reproduces
/// the input, so a document without markers comes back as one `Plain`
/// segment holding the input byte-for-byte.
#[derive(Debug, new)]
pub struct MarkerLexer<'m> {
    markers: &'m ConflictMarkers,
}

impl MarkerLexer<'_> {
    pub fn tokenize(&self, text: &str) -> Result<Vec<Segment>, ResolveError> {
        let mut segments = Vec::new();
        let mut plain = String::new();
        let mut state = State::Plain;

        for (index, raw) in text.split_inclusive('\n').enumerate() {
            let line_no = index + 1;
            let content = strip_terminator(raw);
            let marker = self.markers.classify(content);

            state = match (state, marker) {
                (_, Some(Marker::Foreign)) => {
                    return Err(ResolveError::malformed(
                        line_no,
                        MalformedReason::UnexpectedMarker(content.to_string()),
                    ));
                }

                (State::Plain, None) => {
                    plain.push_str(raw);
                    State::Plain
                }
                (State::Plain, Some(Marker::Start)) => {
                    if !plain.is_empty() {
                        segments.push(Segment::Plain(std::mem::take(&mut plain)));
                    }
                    State::Ours {
                        line: line_no,
                        ours: String::new(),
                    }
                }
                (State::Plain, Some(Marker::Separator)) => {
                    return Err(ResolveError::malformed(
                        line_no,
                        MalformedReason::StraySeparator,
                    ));
                }
                (State::Plain, Some(Marker::End)) => {
                    return Err(ResolveError::malformed(line_no, MalformedReason::StrayEnd));
                }

                (State::Ours { line, mut ours }, None) => {
                    ours.push_str(raw);
                    State::Ours { line, ours }
                }
                (State::Ours { line, ours }, Some(Marker::Separator)) => State::Theirs {
                    line,
                    ours,
                    theirs: String::new(),
                },
                (State::Ours { .. }, Some(Marker::End)) => {
                    return Err(ResolveError::malformed(
                        line_no,
                        MalformedReason::EndBeforeSeparator,
                    ));
                }

                (
                    State::Theirs {
                        line,
                        ours,
                        mut theirs,
                    },
                    None,
                ) => {
                    theirs.push_str(raw);
                    State::Theirs { line, ours, theirs }
                }
                (State::Theirs { line, ours, theirs }, Some(Marker::End)) => {
                    segments.push(Segment::Conflict(ConflictRegion::new(
                        line,
                        strip_terminator(&ours).to_string(),
                        strip_terminator(&theirs).to_string(),
                    )));
                    plain.push_str(&raw[content.len()..]);
                    State::Plain
                }
                (State::Theirs { .. }, Some(Marker::Separator)) => {
                    return Err(ResolveError::malformed(
                        line_no,
                        MalformedReason::DuplicateSeparator,
                    ));
                }

                (State::Ours { .. } | State::Theirs { .. }, Some(Marker::Start)) => {
                    return Err(ResolveError::malformed(
                        line_no,
                        MalformedReason::NestedStart,
                    ));
                }
            };
        }

        match state {
            State::Plain => {
                if !plain.is_empty() {
                    segments.push(Segment::Plain(plain));
                }
                Ok(segments)
            }
            State::Ours { line, .. } | State::Theirs { line, .. } => Err(
                ResolveError::malformed(line, MalformedReason::Unterminated),
            ),
        }
    }
}
