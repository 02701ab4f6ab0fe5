//! Text analysis module for token-sieve.
//!
//! Tokens, accept patterns and the filters that clean token sequences.

pub mod pattern;
pub mod token;
pub mod token_filter;
