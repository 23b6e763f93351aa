//! Batch resolution components
//!
//! - `resolver`: the batch driver that owns the output writer and workspace
//! - `workspace`: file reads, atomic writes and backups

pub mod resolver;
pub mod workspace;
