//! Conflict resolution data structures and algorithms
//!
//! - `conflict`: marker lexing, conflict regions and the text resolver
//! - `rules`: resolution rules and theirs-side transforms
//! - `plan`: the TOML resolution plan
//! - `outcome`: per-file outcomes and the batch summary

pub mod conflict;
pub mod outcome;
pub mod plan;
pub mod rules;
