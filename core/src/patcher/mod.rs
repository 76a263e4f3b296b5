#![deny(missing_docs)]

//! # Code Patching
//!
//! Regex-driven block replacement for source files.
//!
//! - **substitution**: compiling a pattern and replacing its first match in memory.
//! - **files**: reading a target, gating the write on a content change, backups.

/// In-memory first-match substitution.
pub mod substitution;

/// Applying a patch to a file on disk.
pub mod files;

pub use files::{apply_to_file, backup_path, ApplyOptions};
pub use substitution::{Patch, PatchOutcome, Substitution};
