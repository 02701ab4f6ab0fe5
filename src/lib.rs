//! # token-sieve
//!
//! Token sequence cleaning for text analysis pipelines.
//!
//! ## Features
//!
//! - Whole-string regex acceptance of tokens
//! - Optional deletion marks recorded on the surviving neighbour
//! - A pipe seam for instance-carrying pipelines and a filter seam for token streams
//! - Versioned binary state and JSON configuration
//!
//! ## Example
//!
//! ```
//! use token_sieve::analysis::token::TokenSequence;
//! use token_sieve::analysis::token_filter::TokenSequenceCleaner;
//! use token_sieve::instance::{Instance, Pipe};
//!
//! let cleaner = TokenSequenceCleaner::new();
//! let mut instance = Instance::new(TokenSequence::from_texts(["one", "2", "three"]));
//!
//! cleaner.pipe(&mut instance).unwrap();
//!
//! let tokens = instance.data.as_tokens().unwrap();
//! assert_eq!(tokens.texts(), vec!["one", "three"]);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod instance;
pub mod util;

pub mod prelude {
    pub use crate::analysis::pattern::AcceptPattern;
    pub use crate::analysis::token::{PropertyValue, Token, TokenSequence};
    pub use crate::analysis::token_filter::{DELETION_MARK, Filter, TokenSequenceCleaner};
    pub use crate::config::TokenSequenceCleanerConfig;
    pub use crate::error::{Result, SieveError};
    pub use crate::instance::{Instance, Payload, Pipe};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
