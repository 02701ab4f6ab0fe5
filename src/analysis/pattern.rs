//! Whole-string regex predicates for token acceptance.
//!
//! [`AcceptPattern`] wraps a compiled regular expression that must match a
//! token's entire text, not just a substring of it.
//!
//! # Examples
//!
//! ```
//! use token_sieve::analysis::pattern::AcceptPattern;
//!
//! let pattern = AcceptPattern::new(r"[a-z]+").unwrap();
//! assert!(pattern.is_full_match("hello"));
//! assert!(!pattern.is_full_match("hello1"));
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::error::{Result, SieveError};

/// Source of the default accept pattern: one or more ASCII letters.
pub const DEFAULT_ALPHA_PATTERN: &str = r"[A-Za-z]+";

static DEFAULT_ALPHA: LazyLock<AcceptPattern> = LazyLock::new(|| AcceptPattern {
    source: DEFAULT_ALPHA_PATTERN.to_string(),
    anchored: Arc::new(Regex::new(r"\A(?:[A-Za-z]+)\z").expect("default pattern is valid")),
});

/// A compiled pattern tested against the whole of a token's text.
///
/// The source text is kept for display and configuration output. Matching
/// runs against an anchored copy of the expression, so alternations such as
/// `a|ab` still accept `"ab"`.
#[derive(Clone)]
pub struct AcceptPattern {
    source: String,
    anchored: Arc<Regex>,
}

impl AcceptPattern {
    /// Compile a pattern.
    ///
    /// The source must compile on its own before it is anchored, so an
    /// unbalanced pattern such as `a)|(b` cannot close the anchoring group.
    pub fn new(source: &str) -> Result<Self> {
        let invalid = |e: regex::Error| {
            SieveError::invalid_config(format!("Invalid accept pattern {source:?}: {e}"))
        };

        Regex::new(source).map_err(invalid)?;

        // A balanced source only fails to anchor when it ends inside a
        // verbose-mode comment; the newline ends that comment and is
        // whitespace in verbose mode.
        let anchored = Regex::new(&format!(r"\A(?:{source})\z"))
            .or_else(|_| Regex::new(&format!("\\A(?:{source}\n)\\z")))
            .map_err(invalid)?;

        Ok(AcceptPattern {
            source: source.to_string(),
            anchored: Arc::new(anchored),
        })
    }

    /// The alphabetic-token pattern, compiled once per process.
    pub fn alphabetic() -> Self {
        DEFAULT_ALPHA.clone()
    }

    /// Test whether `text` matches the pattern in its entirety.
    pub fn is_full_match(&self, text: &str) -> bool {
        self.anchored.is_match(text)
    }

    /// The pattern as written by the caller.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Default for AcceptPattern {
    fn default() -> Self {
        Self::alphabetic()
    }
}

impl FromStr for AcceptPattern {
    type Err = SieveError;

    fn from_str(s: &str) -> Result<Self> {
        AcceptPattern::new(s)
    }
}

impl PartialEq for AcceptPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for AcceptPattern {}

impl fmt::Debug for AcceptPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AcceptPattern").field(&self.source).finish()
    }
}

impl fmt::Display for AcceptPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
