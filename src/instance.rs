//! Pipeline instances and the pipe seam.
//!
//! An [`Instance`] carries one payload through a sequence of processing
//! stages. Each stage implements [`Pipe`]: it inspects the payload, replaces
//! it, and hands the same instance back.
//!
//! # Examples
//!
//! ```
//! use token_sieve::analysis::token::TokenSequence;
//! use token_sieve::instance::{Instance, Payload};
//!
//! let instance = Instance::new(Payload::Tokens(TokenSequence::from_texts(["a", "b"])))
//!     .with_name("doc-1");
//!
//! assert_eq!(instance.data.kind(), "tokens");
//! assert_eq!(instance.name.as_deref(), Some("doc-1"));
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenSequence;
use crate::error::Result;

/// The payload slot of an instance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Payload {
    /// Tokenized text.
    Tokens(TokenSequence),
    /// Raw, not yet tokenized text.
    Text(String),
    /// Nothing attached.
    #[default]
    Empty,
}

impl Payload {
    /// Short name of the payload variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Tokens(_) => "tokens",
            Payload::Text(_) => "text",
            Payload::Empty => "empty",
        }
    }

    pub fn as_tokens(&self) -> Option<&TokenSequence> {
        match self {
            Payload::Tokens(seq) => Some(seq),
            _ => None,
        }
    }
}

impl From<TokenSequence> for Payload {
    fn from(seq: TokenSequence) -> Self {
        Payload::Tokens(seq)
    }
}

/// A unit of work moving through a pipeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// The payload stages read and replace
    pub data: Payload,
    /// Label or class of the instance, if known
    pub target: Option<String>,
    /// Identifier, e.g. a file name or document id
    pub name: Option<String>,
    /// Where the payload came from, kept for reporting
    pub source: Option<String>,
}

impl Instance {
    /// Create an instance holding `data`.
    pub fn new<P: Into<Payload>>(data: P) -> Self {
        Instance {
            data: data.into(),
            ..Default::default()
        }
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_target<S: Into<String>>(mut self, target: S) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Replace the payload, returning the previous one.
    pub fn set_data<P: Into<Payload>>(&mut self, data: P) -> Payload {
        std::mem::replace(&mut self.data, data.into())
    }

    /// Take the payload out, leaving [`Payload::Empty`] behind.
    pub fn take_data(&mut self) -> Payload {
        std::mem::take(&mut self.data)
    }
}

/// A processing stage that transforms an instance's payload.
///
/// Implementors receive exclusive access to the instance for the duration
/// of one call and return the same instance. A failed call leaves the
/// payload as it was.
pub trait Pipe: Send + Sync {
    /// Process one instance.
    fn pipe<'a>(&self, instance: &'a mut Instance) -> Result<&'a mut Instance>;

    /// Get the name of this pipe (for debugging and configuration).
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_builders() {
        let instance = Instance::new(Payload::Text("raw".to_string()))
            .with_name("a.txt")
            .with_target("spam")
            .with_source("/tmp/a.txt");

        assert_eq!(instance.data, Payload::Text("raw".to_string()));
        assert_eq!(instance.name.as_deref(), Some("a.txt"));
        assert_eq!(instance.target.as_deref(), Some("spam"));
        assert_eq!(instance.source.as_deref(), Some("/tmp/a.txt"));
    }

    #[test]
    fn test_payload_kind() {
        assert_eq!(Payload::Tokens(TokenSequence::new()).kind(), "tokens");
        assert_eq!(Payload::Text(String::new()).kind(), "text");
        assert_eq!(Payload::Empty.kind(), "empty");
        assert!(Payload::Empty.as_tokens().is_none());
    }

    #[test]
    fn test_set_and_take_data() {
        let mut instance = Instance::new(TokenSequence::from_texts(["x"]));

        let old = instance.set_data(Payload::Text("y".to_string()));
        assert_eq!(old.as_tokens().map(TokenSequence::len), Some(1));

        let taken = instance.take_data();
        assert_eq!(taken, Payload::Text("y".to_string()));
        assert_eq!(instance.data, Payload::Empty);
    }
}
