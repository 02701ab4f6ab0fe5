//! Token filters that transform token streams.
//!
//! # Available Filters
//!
//! - [`sequence_cleaner::TokenSequenceCleaner`] - Keeps tokens matching an
//!   accept pattern, optionally marking what was removed
//!
//! # Examples
//!
//! ```
//! use token_sieve::analysis::token::Token;
//! use token_sieve::analysis::token_filter::Filter;
//! use token_sieve::analysis::token_filter::sequence_cleaner::TokenSequenceCleaner;
//!
//! let filter = TokenSequenceCleaner::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("42", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].text, "Hello");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// Filters receive a stream of tokens and produce a new stream. The trait
/// requires `Send + Sync` so one configured filter can serve many threads.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod sequence_cleaner;

pub use sequence_cleaner::{DELETION_MARK, TokenSequenceCleaner};
