#![deny(missing_docs)]

//! # Apply Command
//!
//! Patches the target file and prints a single status line.
//!
//! With no arguments this rewrites `app/pago/page.tsx` using the built-in
//! booking validation preset. A custom pattern/replacement pair can be read
//! from files instead.

use fixval_core::{
    apply_to_file, booking_validation, AppError, AppResult, ApplyOptions, Patch, PatchOutcome,
    DEFAULT_TARGET,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Arguments for applying a patch.
#[derive(clap::Args, Debug, Clone)]
pub struct ApplyArgs {
    /// File to patch in place.
    #[clap(long, env = "FIXVAL_TARGET", default_value = DEFAULT_TARGET)]
    pub target: PathBuf,

    /// Read the search pattern (a multi-line regex) from this file.
    #[clap(long, requires = "replacement_file")]
    pub pattern_file: Option<PathBuf>,

    /// Read the replacement text from this file. It is inserted verbatim.
    #[clap(long, requires = "pattern_file")]
    pub replacement_file: Option<PathBuf>,

    /// Match the pattern file content as plain text instead of a regex.
    #[clap(long, requires = "pattern_file")]
    pub literal: bool,

    /// Report whether the pattern would be replaced without writing.
    #[clap(long)]
    pub dry_run: bool,

    /// Copy the original file to `<target>.bak` before overwriting it.
    #[clap(long)]
    pub backup: bool,
}

/// Executes the patch and prints the outcome.
///
/// A missing pattern is reported on stdout and is not an error; IO failures
/// and invalid patterns are.
pub fn execute(args: &ApplyArgs) -> AppResult<PatchOutcome> {
    let patch = load_patch(args)?;
    debug!(pattern = patch.pattern().as_str(), "compiled pattern");

    let options = ApplyOptions {
        dry_run: args.dry_run,
        backup: args.backup,
    };
    let outcome = apply_to_file(&args.target, &patch, &options)?;

    println!("{}", status_line(outcome, &args.target, args.dry_run));
    Ok(outcome)
}

fn load_patch(args: &ApplyArgs) -> AppResult<Patch> {
    match (&args.pattern_file, &args.replacement_file) {
        (None, None) => booking_validation(),
        (Some(pattern_file), Some(replacement_file)) => {
            let pattern = read_input(pattern_file)?;
            let replacement = read_input(replacement_file)?;
            if args.literal {
                Patch::literal(&pattern, replacement)
            } else {
                Patch::new(&pattern, replacement)
            }
        }
        _ => Err(AppError::General(
            "--pattern-file and --replacement-file must be given together".into(),
        )),
    }
}

fn read_input(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|e| AppError::file_access(path, e))
}

/// The human-readable line printed for an outcome.
pub fn status_line(outcome: PatchOutcome, target: &Path, dry_run: bool) -> String {
    match outcome {
        PatchOutcome::Applied if dry_run => format!(
            "✅ Pattern found in {} (dry run, file not written)",
            target.display()
        ),
        PatchOutcome::Applied => format!("✅ Replacement applied to {}", target.display()),
        PatchOutcome::NotFound => format!(
            "❌ Pattern not found in {}; nothing replaced",
            target.display()
        ),
    }
}
