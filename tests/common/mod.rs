#![allow(dead_code)]

pub mod command;
pub mod file;

pub const OURS_MARKER: &str = "<<<<<<< HEAD";
pub const SEPARATOR_MARKER: &str = "=======";
pub const THEIRS_MARKER: &str = ">>>>>>> origin/main";

/// A conflict region with the default markers, without a trailing newline.
pub fn conflict(ours: &str, theirs: &str) -> String {
    format!("{OURS_MARKER}\n{ours}\n{SEPARATOR_MARKER}\n{theirs}\n{THEIRS_MARKER}")
}
