use std::borrow::Cow;
use std::fmt;

use crate::attrs::{AttrScan, RawAttr, scan_attr};
use crate::entities::decode_entities;

/// Lexical HTML token borrowed from the tokenizer input.
///
/// Every variant carries its exact source bytes; concatenating `raw()` over a
/// whole token stream reproduces the input.
#[derive(Clone, PartialEq, Eq)]
pub enum Token<'a> {
    StartTag(Tag<'a>),
    SelfClosingTag(Tag<'a>),
    EndTag(Tag<'a>),
    Text(&'a [u8]),
    Comment(&'a [u8]),
    Doctype(&'a [u8]),
    /// Bogus comments, CDATA sections, `</>` and unterminated markup.
    Other(&'a [u8]),
}

impl<'a> Token<'a> {
    pub fn raw(&self) -> &'a [u8] {
        match self {
            Token::StartTag(tag) | Token::SelfClosingTag(tag) | Token::EndTag(tag) => tag.raw(),
            Token::Text(raw) | Token::Comment(raw) | Token::Doctype(raw) | Token::Other(raw) => raw,
        }
    }

    pub fn tag(&self) -> Option<&Tag<'a>> {
        match self {
            Token::StartTag(tag) | Token::SelfClosingTag(tag) | Token::EndTag(tag) => Some(tag),
            _ => None,
        }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, raw) = match self {
            Token::StartTag(tag) => ("StartTag", tag.raw()),
            Token::SelfClosingTag(tag) => ("SelfClosingTag", tag.raw()),
            Token::EndTag(tag) => ("EndTag", tag.raw()),
            Token::Text(raw) => ("Text", *raw),
            Token::Comment(raw) => ("Comment", *raw),
            Token::Doctype(raw) => ("Doctype", *raw),
            Token::Other(raw) => ("Other", *raw),
        };
        write!(f, "{kind}({:?})", String::from_utf8_lossy(raw))
    }
}

/// A start, self-closing or end tag.
///
/// The name is ASCII-lowercased; attributes are scanned lazily from the raw
/// bytes in source order.
#[derive(Clone, PartialEq, Eq)]
pub struct Tag<'a> {
    raw: &'a [u8],
    name: Cow<'a, [u8]>,
    attrs_start: usize,
}

impl<'a> Tag<'a> {
    pub(crate) fn new(raw: &'a [u8], name: &'a [u8], attrs_start: usize) -> Self {
        debug_assert!(attrs_start <= raw.len());
        Self {
            raw,
            name: ascii_lowercase(name),
            attrs_start,
        }
    }

    pub fn raw(&self) -> &'a [u8] {
        self.raw
    }

    pub fn name(&self) -> &[u8] {
        &self.name
    }

    pub fn attrs(&self) -> Attributes<'a> {
        Attributes {
            raw: self.raw,
            pos: self.attrs_start,
        }
    }
}

impl fmt::Debug for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tag")
            .field("name", &String::from_utf8_lossy(&self.name))
            .field("raw", &String::from_utf8_lossy(self.raw))
            .finish()
    }
}

/// Lazy attribute iterator over a tag's raw bytes.
#[derive(Clone, Debug)]
pub struct Attributes<'a> {
    raw: &'a [u8],
    pos: usize,
}

impl<'a> Iterator for Attributes<'a> {
    type Item = Attribute<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match scan_attr(self.raw, self.pos) {
            AttrScan::Attr(attr, next) => {
                self.pos = next;
                Some(Attribute::new(self.raw, attr))
            }
            AttrScan::Close { .. } | AttrScan::Eof => {
                self.pos = self.raw.len();
                None
            }
        }
    }
}

/// One attribute of a tag.
#[derive(Clone, PartialEq, Eq)]
pub struct Attribute<'a> {
    key: Cow<'a, [u8]>,
    raw_value: Option<&'a [u8]>,
    quote: Option<u8>,
}

impl<'a> Attribute<'a> {
    fn new(raw: &'a [u8], attr: RawAttr) -> Self {
        Self {
            key: ascii_lowercase(&raw[attr.name]),
            raw_value: attr.value.map(|v| &raw[v]),
            quote: attr.quote,
        }
    }

    /// ASCII-lowercased attribute name.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Source bytes of the value with character references still encoded.
    /// `None` for an attribute written without `=`.
    pub fn raw_value(&self) -> Option<&'a [u8]> {
        self.raw_value
    }

    /// Quote byte the value was written with, if any.
    pub fn quote(&self) -> Option<u8> {
        self.quote
    }

    /// Entity-decoded value; empty for a bare attribute.
    pub fn value(&self) -> Cow<'a, [u8]> {
        decode_entities(self.raw_value.unwrap_or_default())
    }
}

impl fmt::Debug for Attribute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("key", &String::from_utf8_lossy(&self.key))
            .field("raw_value", &self.raw_value.map(String::from_utf8_lossy))
            .finish()
    }
}

fn ascii_lowercase(name: &[u8]) -> Cow<'_, [u8]> {
    if name.iter().any(u8::is_ascii_uppercase) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

/// Tokenizer failure other than end of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenizeError {
    /// A single token exceeded `TokenizerConfig::max_token_len`.
    TokenTooLong {
        position: usize,
        len: usize,
        limit: usize,
    },
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizeError::TokenTooLong {
                position,
                len,
                limit,
            } => write!(
                f,
                "token at byte {position} is {len} bytes long, exceeding the {limit}-byte limit"
            ),
        }
    }
}

impl std::error::Error for TokenizeError {}
