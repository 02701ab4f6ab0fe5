//! Token types for text analysis.
//!
//! This module defines the units that flow through a cleaning stage:
//!
//! - [`Token`] - A single token with text, position and a property map
//! - [`PropertyValue`] - A text or numeric annotation value
//! - [`TokenSequence`] - An ordered, annotated sequence of tokens
//! - [`TokenStream`] - Type alias for a boxed iterator of tokens
//!
//! # Examples
//!
//! ```
//! use token_sieve::analysis::token::{PropertyValue, Token};
//!
//! let mut token = Token::with_offsets("world", 1, 6, 11);
//! token.set_property("source", "title");
//!
//! assert_eq!(token.text, "world");
//! assert_eq!(token.property_text("source"), Some("title"));
//! assert_eq!(
//!     token.property("source"),
//!     Some(&PropertyValue::Text("title".to_string()))
//! );
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Value stored under a property key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// A text annotation, e.g. the text of a removed neighbour.
    Text(String),
    /// A numeric annotation, e.g. a weight or a count.
    Number(f64),
}

impl PropertyValue {
    /// Get the text value, if this is a text property.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s.as_str()),
            PropertyValue::Number(_) => None,
        }
    }

    /// Get the numeric value, if this is a numeric property.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            PropertyValue::Text(_) => None,
        }
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

/// Property map attached to tokens and sequences.
///
/// Keys are kept sorted so annotated output is stable when printed or serialized.
pub type Properties = BTreeMap<String, PropertyValue>;

/// A token is a single unit of text produced by a tokenizer.
///
/// Stages may add or overwrite properties; none remove them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the tokenizer output (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Annotations attached by upstream and downstream stages
    #[serde(default)]
    pub properties: Properties,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            properties: Properties::new(),
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            properties: Properties::new(),
        }
    }

    /// Set a property, replacing any previous value under the same key.
    pub fn set_property<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<PropertyValue>,
    {
        self.properties.insert(key.into(), value.into());
    }

    /// Builder form of [`Token::set_property`].
    pub fn with_property<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<PropertyValue>,
    {
        self.set_property(key, value);
        self
    }

    /// Get a property value.
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Get a property value as text.
    pub fn property_text(&self, key: &str) -> Option<&str> {
        self.property(key).and_then(PropertyValue::as_text)
    }

    /// Check if a property is set.
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// An ordered sequence of tokens in reading order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenSequence {
    tokens: Vec<Token>,
    /// Sequence-level annotations
    #[serde(default)]
    pub properties: Properties,
}

impl TokenSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sequence with room for `capacity` tokens.
    pub fn with_capacity(capacity: usize) -> Self {
        TokenSequence {
            tokens: Vec::with_capacity(capacity),
            properties: Properties::new(),
        }
    }

    /// Build a sequence from plain strings, numbering positions from 0.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(position, text)| Token::new(text, position))
            .collect()
    }

    /// Append a token.
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the sequence holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The most recently pushed token.
    pub fn last_mut(&mut self) -> Option<&mut Token> {
        self.tokens.last_mut()
    }

    /// Iterate over the tokens in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// The texts of all tokens, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Split into the token vector and the sequence-level properties.
    pub fn into_parts(self) -> (Vec<Token>, Properties) {
        (self.tokens, self.properties)
    }
}

impl From<Vec<Token>> for TokenSequence {
    fn from(tokens: Vec<Token>) -> Self {
        TokenSequence {
            tokens,
            properties: Properties::new(),
        }
    }
}

impl FromIterator<Token> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenSequence::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl IntoIterator for TokenSequence {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl Index<usize> for TokenSequence {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for TokenSequence {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.tokens.into_iter())
    }
}
