//! Sequence cleaner implementation.
//!
//! This module provides a filter that keeps only tokens whose whole text
//! matches an accept pattern. Optionally, the text of each removed token is
//! recorded on the nearest kept token before it under [`DELETION_MARK`], so
//! later stages (bigram extraction, for example) can tell that two kept
//! tokens were not adjacent in the source.
//!
//! # Examples
//!
//! ```
//! use token_sieve::analysis::pattern::AcceptPattern;
//! use token_sieve::analysis::token::TokenSequence;
//! use token_sieve::analysis::token_filter::sequence_cleaner::{
//!     TokenSequenceCleaner, DELETION_MARK,
//! };
//!
//! let cleaner = TokenSequenceCleaner::with_mark_deletions(true, AcceptPattern::alphabetic());
//! let tokens = TokenSequence::from_texts(["Hello", "3", "world", "!!", "42"]);
//!
//! let cleaned = cleaner.clean(tokens);
//!
//! assert_eq!(cleaned.texts(), vec!["Hello", "world"]);
//! assert_eq!(cleaned[0].property_text(DELETION_MARK), Some("3"));
//! assert_eq!(cleaned[1].property_text(DELETION_MARK), Some("42"));
//! ```

use std::io::{Read, Write};

use log::{debug, trace};

use crate::analysis::pattern::AcceptPattern;
use crate::analysis::token::{IntoTokenStream, TokenSequence, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::config::TokenSequenceCleanerConfig;
use crate::error::{Result, SieveError};
use crate::instance::{Instance, Payload, Pipe};
use crate::util::record;

/// Property key under which removed token text is recorded.
pub const DELETION_MARK: &str = "FeatureSequenceWithBigrams.deletionMark";

/// A filter that removes tokens not fully matching an accept pattern.
///
/// With `mark_deletions` enabled, every removed token writes its text onto
/// the most recent kept token under [`DELETION_MARK`]. A later removal before
/// the next kept token overwrites the earlier one. Removals before the first
/// kept token leave no trace.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenSequenceCleaner {
    mark_deletions: bool,
    accept_pattern: AcceptPattern,
}

impl TokenSequenceCleaner {
    /// Create a cleaner that keeps alphabetic tokens and marks nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cleaner with a custom accept pattern and no deletion marks.
    pub fn with_pattern(accept_pattern: AcceptPattern) -> Self {
        Self::with_mark_deletions(false, accept_pattern)
    }

    /// Create a cleaner with both settings given explicitly.
    pub fn with_mark_deletions(mark_deletions: bool, accept_pattern: AcceptPattern) -> Self {
        TokenSequenceCleaner {
            mark_deletions,
            accept_pattern,
        }
    }

    /// Compile `pattern` and create a cleaner from it.
    pub fn from_regex(mark_deletions: bool, pattern: &str) -> Result<Self> {
        Ok(Self::with_mark_deletions(
            mark_deletions,
            AcceptPattern::new(pattern)?,
        ))
    }

    /// Build a cleaner from its configuration. A missing pattern selects the
    /// alphabetic default.
    pub fn from_config(config: &TokenSequenceCleanerConfig) -> Result<Self> {
        let accept_pattern = match config.accept_pattern.as_deref() {
            Some(pattern) => AcceptPattern::new(pattern)?,
            None => AcceptPattern::alphabetic(),
        };

        Ok(Self::with_mark_deletions(
            config.mark_deletions,
            accept_pattern,
        ))
    }

    /// Export the current settings, pattern included.
    pub fn to_config(&self) -> TokenSequenceCleanerConfig {
        TokenSequenceCleanerConfig {
            mark_deletions: self.mark_deletions,
            accept_pattern: Some(self.accept_pattern.as_str().to_string()),
        }
    }

    /// Whether removed tokens are recorded on their kept predecessor.
    pub fn mark_deletions(&self) -> bool {
        self.mark_deletions
    }

    /// The pattern a token's text must fully match to be kept.
    pub fn accept_pattern(&self) -> &AcceptPattern {
        &self.accept_pattern
    }

    /// Clean a sequence, returning a new one holding only accepted tokens.
    ///
    /// Kept tokens are moved, not copied, and keep their relative order. The
    /// sequence-level properties carry over to the result.
    pub fn clean(&self, sequence: TokenSequence) -> TokenSequence {
        let (tokens, properties) = sequence.into_parts();
        let input_len = tokens.len();

        let mut cleaned = TokenSequence::with_capacity(input_len);
        cleaned.properties = properties;
        let mut marks = 0usize;

        for token in tokens {
            if self.accept_pattern.is_full_match(&token.text) {
                cleaned.push(token);
            } else if self.mark_deletions {
                // The last kept token is always the tail of the output.
                if let Some(prev) = cleaned.last_mut() {
                    trace!("Marking deletion of {:?} on {:?}", token.text, prev.text);
                    prev.set_property(DELETION_MARK, token.text);
                    marks += 1;
                }
            }
        }

        debug!(
            "Cleaned token sequence: {} in, {} kept, {} deletion marks",
            input_len,
            cleaned.len(),
            marks
        );

        cleaned
    }

    /// Persist the cleaner state. The accept pattern is not part of it.
    pub fn to_state_bytes(&self) -> Result<Vec<u8>> {
        record::encode_state(self.mark_deletions)
    }

    /// Write the cleaner state to `writer`.
    pub fn write_state<W: Write>(&self, writer: &mut W) -> Result<()> {
        record::write_state(writer, self.mark_deletions)
    }

    /// Restore state written by [`Self::to_state_bytes`]. Only the
    /// `mark_deletions` flag changes; the accept pattern is kept as is.
    pub fn restore_state(&mut self, bytes: &[u8]) -> Result<()> {
        self.mark_deletions = record::decode_state(bytes)?;
        Ok(())
    }

    /// Restore state from `reader`.
    pub fn read_state<R: Read>(&mut self, reader: &mut R) -> Result<()> {
        self.mark_deletions = record::read_state(reader)?;
        Ok(())
    }
}

impl Pipe for TokenSequenceCleaner {
    fn pipe<'a>(&self, instance: &'a mut Instance) -> Result<&'a mut Instance> {
        match &mut instance.data {
            Payload::Tokens(sequence) => {
                let input = std::mem::take(sequence);
                *sequence = self.clean(input);
            }
            other => return Err(SieveError::type_mismatch("tokens", other.kind())),
        }

        Ok(instance)
    }

    fn name(&self) -> &'static str {
        "sequence_cleaner"
    }
}

impl Filter for TokenSequenceCleaner {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(self.clean(tokens.collect()).into_token_stream())
    }

    fn name(&self) -> &'static str {
        "sequence_cleaner"
    }
}
