use crate::error::AppResult;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use std::ops::Range;

/// Result of applying a [`Patch`] to a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The content changed and (unless dry-running) was written back.
    Applied,
    /// The pattern did not match, or matching produced identical content.
    NotFound,
}

impl PatchOutcome {
    /// True for [`PatchOutcome::Applied`].
    pub fn is_applied(self) -> bool {
        matches!(self, PatchOutcome::Applied)
    }
}

/// A compiled search pattern paired with the text that replaces its first match.
#[derive(Debug, Clone)]
pub struct Patch {
    pattern: Regex,
    replacement: String,
}

impl Patch {
    /// Compiles `pattern` with multi-line semantics, so `^` and `$` anchor at
    /// line boundaries.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> AppResult<Self> {
        let pattern = RegexBuilder::new(pattern).multi_line(true).build()?;
        Ok(Self {
            pattern,
            replacement: replacement.into(),
        })
    }

    /// Builds a patch whose search text is matched verbatim.
    pub fn literal(search: &str, replacement: impl Into<String>) -> AppResult<Self> {
        Self::new(&regex::escape(search), replacement)
    }

    /// The compiled search pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// The replacement text, inserted as-is.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replaces the first match in `content`.
    ///
    /// The replacement is spliced in literally: `$1` or `\s` in it are not
    /// expanded. Content without a match is returned borrowed.
    pub fn substitute<'a>(&self, content: &'a str) -> Substitution<'a> {
        let Some(found) = self.pattern.find(content) else {
            return Substitution {
                original: content,
                patched: Cow::Borrowed(content),
                span: None,
            };
        };

        let span = found.range();
        let mut patched =
            String::with_capacity(content.len() - span.len() + self.replacement.len());
        patched.push_str(&content[..span.start]);
        patched.push_str(&self.replacement);
        patched.push_str(&content[span.end..]);

        Substitution {
            original: content,
            patched: Cow::Owned(patched),
            span: Some(span),
        }
    }
}

/// The before/after pair produced by [`Patch::substitute`].
#[derive(Debug, Clone)]
pub struct Substitution<'a> {
    original: &'a str,
    patched: Cow<'a, str>,
    span: Option<Range<usize>>,
}

impl<'a> Substitution<'a> {
    /// Whether the patched content differs from the original by value.
    pub fn changed(&self) -> bool {
        self.patched.as_ref() != self.original
    }

    /// `Applied` iff [`Substitution::changed`]. A match that reproduces the
    /// original text reports `NotFound`.
    pub fn outcome(&self) -> PatchOutcome {
        if self.changed() {
            PatchOutcome::Applied
        } else {
            PatchOutcome::NotFound
        }
    }

    /// Byte range of the first match within the original content.
    pub fn matched_span(&self) -> Option<Range<usize>> {
        self.span.clone()
    }

    /// The content after substitution.
    pub fn content(&self) -> &str {
        &self.patched
    }

    /// Consumes the substitution, returning the patched content.
    pub fn into_content(self) -> Cow<'a, str> {
        self.patched
    }
}
