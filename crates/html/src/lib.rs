//! Byte-level HTML token source.
//!
//! `Tokenizer` turns a document buffer into a lazy stream of typed tokens that
//! borrow their exact source bytes. Consumers that rewrite markup (the minifier)
//! decide per token what to keep; nothing here allocates unless a name needs
//! lowercasing or a value needs decoding.

mod attrs;
mod entities;
pub mod perf_fixtures;
mod tokenizer;
mod types;

pub use crate::entities::{decode_entities, may_start_char_ref};
pub use crate::tokenizer::{Tokenizer, TokenizerConfig, TokenizerStats, tokenize};
pub use crate::types::{Attribute, Attributes, Tag, Token, TokenizeError};

/// HTML void elements; they never have content or an end tag.
pub fn is_void_element(name: &[u8]) -> bool {
    matches!(
        name,
        b"area"
            | b"base"
            | b"br"
            | b"col"
            | b"embed"
            | b"hr"
            | b"img"
            | b"input"
            | b"link"
            | b"meta"
            | b"param"
            | b"source"
            | b"track"
            | b"wbr"
    )
}
