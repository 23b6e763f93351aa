//! Command implementations
//!
//! Each command is an `impl` block on [`Resolver`](crate::areas::resolver::Resolver):
//!
//! - `resolve`: apply a resolution plan and rewrite the files in place
//! - `inspect`: list the conflict regions of files without touching them

pub mod inspect;
pub mod resolve;
