#![deny(missing_docs)]

//! # Fixval Core
//!
//! Locates one multi-line block in a source file and swaps it for a revised
//! one, rewriting the file only when its content actually changes.

/// Shared error types.
pub mod error;

/// Pattern substitution and file application.
pub mod patcher;

/// Built-in patches.
pub mod presets;

pub use error::{AppError, AppResult};
pub use patcher::{apply_to_file, ApplyOptions, Patch, PatchOutcome, Substitution};
pub use presets::{booking_validation, DEFAULT_TARGET};
