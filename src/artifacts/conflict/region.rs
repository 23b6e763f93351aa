use derive_new::new;

/// One conflict region. Neither side includes the terminator of its last
/// line; the end marker's own terminator belongs to the following plain span.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ConflictRegion {
    /// 1-based line number of the start marker.
    line: usize,
    ours: String,
    theirs: String,
}

impl ConflictRegion {
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn ours(&self) -> &str {
        &self.ours
    }

    pub fn theirs(&self) -> &str {
        &self.theirs
    }

    pub fn ours_line_count(&self) -> usize {
        self.ours.lines().count()
    }

    pub fn theirs_line_count(&self) -> usize {
        self.theirs.lines().count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Conflict(ConflictRegion),
}
