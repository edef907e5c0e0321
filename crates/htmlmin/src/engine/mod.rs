//! Single-pass minification engine.
//!
//! The engine pulls tokens from `html::Tokenizer` one at a time and writes a
//! smaller serialization into a per-call buffer. It never builds a tree and
//! never rejects markup; the only state carried between tokens is:
//! - `raw_depth`: how many raw elements (`script`, `style`, `pre`, `code`,
//!   `textarea`) are open. Text inside any of them is written verbatim.
//! - `in_script` / `in_style`: whether the next text token is a JavaScript or
//!   CSS body eligible for delegation.
//! - `seen_space`: whether the output ends in collapsed whitespace, so text
//!   on both sides of a dropped comment collapses as one run.
//!
//! Invariants:
//! - `raw_depth` never underflows; unmatched end tags clamp at zero.
//! - A tokenizer error discards everything written so far.
//! - Sub-minifier failures never fail the call; the original bytes are kept.

use html::{Tag, Token, Tokenizer, TokenizerConfig};

use crate::delegate::{ScriptMinifier, StyleMinifier};
use crate::error::MinifyError;
use crate::options::Options;

mod comment;
mod tags;
mod text;

pub use text::collapse_whitespace;

/// Elements whose text content must not be collapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RawElement {
    Script,
    Style,
    Pre,
    Code,
    Textarea,
}

impl RawElement {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"script" => Some(Self::Script),
            b"style" => Some(Self::Style),
            b"pre" => Some(Self::Pre),
            b"code" => Some(Self::Code),
            b"textarea" => Some(Self::Textarea),
            _ => None,
        }
    }
}

pub(crate) struct Engine<'m> {
    options: &'m Options,
    script: &'m dyn ScriptMinifier,
    style: &'m dyn StyleMinifier,
    raw_depth: usize,
    in_script: bool,
    in_style: bool,
    /// The output ends inside a collapsed whitespace run.
    seen_space: bool,
    out: Vec<u8>,
}

impl<'m> Engine<'m> {
    pub(crate) fn new(
        options: &'m Options,
        script: &'m dyn ScriptMinifier,
        style: &'m dyn StyleMinifier,
    ) -> Self {
        Self {
            options,
            script,
            style,
            raw_depth: 0,
            in_script: false,
            in_style: false,
            seen_space: false,
            out: Vec::new(),
        }
    }

    /// Minify one whole document.
    pub(crate) fn run(mut self, data: &[u8]) -> Result<Vec<u8>, MinifyError> {
        self.out.reserve(data.len());
        let config = TokenizerConfig {
            max_token_len: self.options.max_token_len,
        };
        let mut tokenizer = Tokenizer::with_config(data, config);
        for token in tokenizer.by_ref() {
            let token = token?;
            self.dispatch(token);
        }
        let stats = tokenizer.stats();
        log::debug!(
            target: "htmlmin.engine",
            "minified {} -> {} bytes ({} tokens, {} raw text runs)",
            data.len(),
            self.out.len(),
            stats.tokens_emitted,
            stats.rawtext_runs
        );
        Ok(self.out)
    }

    fn dispatch(&mut self, token: Token<'_>) {
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(
            target: "htmlmin.engine",
            "dispatch depth={} script={} style={}: {token:?}",
            self.raw_depth,
            self.in_script,
            self.in_style
        );
        match token {
            Token::StartTag(tag) => self.start_tag(&tag, false),
            Token::SelfClosingTag(tag) => self.start_tag(&tag, true),
            Token::EndTag(tag) => self.end_tag(&tag),
            Token::Text(raw) => self.text(raw),
            Token::Comment(raw) => self.comment(raw),
            Token::Doctype(raw) | Token::Other(raw) => {
                self.seen_space = false;
                self.out.extend_from_slice(raw);
            }
        }
    }

    fn start_tag(&mut self, tag: &Tag<'_>, self_closing: bool) {
        self.seen_space = false;
        match RawElement::from_name(tag.name()) {
            Some(RawElement::Script) => {
                self.raw_depth = self.raw_depth.saturating_add(1);
                self.in_script = self.options.minify_scripts;
            }
            Some(RawElement::Style) => {
                self.raw_depth = self.raw_depth.saturating_add(1);
                self.in_style = true;
            }
            Some(_) => self.raw_depth = self.raw_depth.saturating_add(1),
            None => {}
        }
        self.write_start_tag(tag, self_closing);
    }

    fn end_tag(&mut self, tag: &Tag<'_>) {
        self.seen_space = false;
        if let Some(element) = RawElement::from_name(tag.name()) {
            self.raw_depth = self.raw_depth.saturating_sub(1);
            match element {
                RawElement::Script => self.in_script = false,
                RawElement::Style => self.in_style = false,
                _ => {}
            }
        }
        self.write_end_tag(tag);
    }
}
