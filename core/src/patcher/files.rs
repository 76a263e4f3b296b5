use crate::error::{AppError, AppResult};
use crate::patcher::substitution::{Patch, PatchOutcome};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Controls how [`apply_to_file`] touches the filesystem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyOptions {
    /// Compute the outcome without writing anything.
    pub dry_run: bool,
    /// Copy the original file to `<file>.bak` before overwriting it.
    pub backup: bool,
}

/// Reads `path`, replaces the first match of `patch`, and writes the file
/// back only if its content changed.
///
/// Missing or unreadable files (including non-UTF-8 content) fail with
/// [`AppError::FileAccess`] before anything is written.
pub fn apply_to_file(
    path: &Path,
    patch: &Patch,
    options: &ApplyOptions,
) -> AppResult<PatchOutcome> {
    let content = fs::read_to_string(path).map_err(|e| AppError::file_access(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "read target");

    let substitution = patch.substitute(&content);
    let outcome = substitution.outcome();
    if let Some(span) = substitution.matched_span() {
        debug!(start = span.start, end = span.end, "pattern matched");
    }

    if !outcome.is_applied() {
        return Ok(outcome);
    }

    if options.dry_run {
        info!(path = %path.display(), "dry run, leaving file untouched");
        return Ok(outcome);
    }

    if options.backup {
        let backup = backup_path(path);
        fs::write(&backup, &content).map_err(|e| AppError::file_access(&backup, e))?;
        info!(backup = %backup.display(), "saved original");
    }

    fs::write(path, substitution.content()).map_err(|e| AppError::file_access(path, e))?;
    info!(
        path = %path.display(),
        bytes = substitution.content().len(),
        "wrote patched file"
    );

    Ok(outcome)
}

/// `page.tsx` -> `page.tsx.bak`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}
