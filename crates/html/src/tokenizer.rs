//! Lazy, forward-only HTML lexer over a byte buffer.
//!
//! The tokenizer never decodes or rewrites input: every token borrows its exact
//! source bytes, so concatenating `Token::raw` over the whole stream reproduces
//! the input. Tag and attribute names are ASCII-lowercased on access; values are
//! decoded only when asked for.
//!
//! Known limitations (intentional):
//! - Not a full HTML5 tokenizer/state machine (no spec parse-error recovery beyond
//!   what is needed to agree with browsers on token boundaries).
//! - Rawtext elements are a fixed list; there is no tree-construction feedback, so
//!   foreign content (`<svg><style>`) is treated like HTML.
//! - Duplicate attributes are reported as written; nothing is dropped.
use crate::attrs::{AttrScan, is_html_whitespace, scan_attr};
use crate::types::{Tag, Token, TokenizeError};
use memchr::{memchr, memmem};

const HTML_COMMENT_START: &[u8] = b"<!--";
const HTML_COMMENT_END: &[u8] = b"-->";
const DOCTYPE: &[u8] = b"<!doctype";

/// Elements whose content is scanned as text up to the matching close tag.
const RAWTEXT_ELEMENTS: [&[u8]; 8] = [
    b"script",
    b"style",
    b"textarea",
    b"title",
    b"xmp",
    b"iframe",
    b"noembed",
    b"noframes",
];

fn starts_with_ignore_ascii_case_at(haystack: &[u8], start: usize, needle: &[u8]) -> bool {
    haystack.len() >= start + needle.len()
        && haystack[start..start + needle.len()].eq_ignore_ascii_case(needle)
}

/// Find the start of `</name` (ASCII case-insensitive) that actually closes a
/// rawtext element: the name must be followed by whitespace, `/` or `>`.
// it only attempts matches starting at ASCII <
// < cannot appear in UTF-8 continuation bytes
fn find_rawtext_close_tag(haystack: &[u8], name: &[u8]) -> Option<usize> {
    let len = haystack.len();
    let n = name.len() + 2;
    let mut i = 0;
    while i + n <= len {
        let rel = memchr(b'<', &haystack[i..])?;
        i += rel;
        if i + n > len {
            return None;
        }
        if haystack[i + 1] == b'/' && haystack[i + 2..i + n].eq_ignore_ascii_case(name) {
            match haystack.get(i + n) {
                Some(&b) if is_html_whitespace(b) || b == b'/' || b == b'>' => return Some(i),
                _ => {}
            }
        }
        i += 1;
    }
    None
}

/// Configuration for the tokenizer.
#[derive(Clone, Debug, Default)]
pub struct TokenizerConfig {
    /// Reject any single token longer than this many bytes.
    pub max_token_len: Option<usize>,
}

/// Minimal tokenizer instrumentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenizerStats {
    pub tokens_emitted: u64,
    pub rawtext_runs: u64,
}

/// Forward-only token source; `None` from `next` is end of input.
///
/// After an error the tokenizer is fused and yields `None`.
pub struct Tokenizer<'a> {
    input: &'a [u8],
    pos: usize,
    config: TokenizerConfig,
    rawtext: Option<&'static [u8]>,
    failed: bool,
    stats: TokenizerStats,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_config(input, TokenizerConfig::default())
    }

    pub fn with_config(input: &'a [u8], config: TokenizerConfig) -> Self {
        Self {
            input,
            pos: 0,
            config,
            rawtext: None,
            failed: false,
            stats: TokenizerStats::default(),
        }
    }

    /// Byte offset of the next unread input byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn stats(&self) -> TokenizerStats {
        self.stats
    }

    fn emit(&mut self, start: usize, token: Token<'a>) -> Result<Token<'a>, TokenizeError> {
        let len = token.raw().len();
        if let Some(limit) = self.config.max_token_len {
            if len > limit {
                self.failed = true;
                return Err(TokenizeError::TokenTooLong {
                    position: start,
                    len,
                    limit,
                });
            }
        }
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(target: "html.tokenizer", "emit token @{start}: {token:?}");
        self.stats.tokens_emitted = self.stats.tokens_emitted.saturating_add(1);
        Ok(token)
    }

    fn next_rawtext(&mut self, name: &'static [u8]) -> Option<(usize, Token<'a>)> {
        let start = self.pos;
        let rest = &self.input[start..];
        let end = match find_rawtext_close_tag(rest, name) {
            Some(rel) => start + rel,
            // If the rawtext close tag is missing, the remainder is rawtext content.
            None => self.input.len(),
        };
        if end == start {
            return None;
        }
        self.pos = end;
        self.stats.rawtext_runs = self.stats.rawtext_runs.saturating_add(1);
        Some((start, Token::Text(&self.input[start..end])))
    }

    fn next_text(&mut self) -> Token<'a> {
        let bytes = self.input;
        let start = self.pos;
        let mut i = start;
        while i < bytes.len() {
            let Some(rel) = memchr(b'<', &bytes[i..]) else {
                i = bytes.len();
                break;
            };
            i += rel;
            if i > start && starts_markup(bytes, i) {
                break;
            }
            i += 1;
        }
        self.pos = i;
        Token::Text(&bytes[start..i])
    }

    fn next_markup(&mut self) -> Token<'a> {
        let bytes = self.input;
        let i = self.pos;
        debug_assert_eq!(bytes[i], b'<');

        if bytes[i..].starts_with(HTML_COMMENT_START) {
            let end = comment_end(bytes, i);
            self.pos = end;
            return Token::Comment(&bytes[i..end]);
        }
        if starts_with_ignore_ascii_case_at(bytes, i, DOCTYPE) {
            let end = memchr(b'>', &bytes[i..]).map_or(bytes.len(), |rel| i + rel + 1);
            self.pos = end;
            return Token::Doctype(&bytes[i..end]);
        }

        match bytes.get(i + 1) {
            Some(b'/') => match bytes.get(i + 2) {
                Some(b) if b.is_ascii_alphabetic() => self.next_tag(i, i + 2, true),
                Some(b'>') => {
                    self.pos = i + 3;
                    Token::Other(&bytes[i..i + 3])
                }
                _ => self.next_bogus(i),
            },
            Some(b) if b.is_ascii_alphabetic() => self.next_tag(i, i + 1, false),
            _ => self.next_bogus(i),
        }
    }

    fn next_bogus(&mut self, i: usize) -> Token<'a> {
        let bytes = self.input;
        let end = memchr(b'>', &bytes[i..]).map_or(bytes.len(), |rel| i + rel + 1);
        self.pos = end;
        Token::Other(&bytes[i..end])
    }

    fn next_tag(&mut self, start: usize, name_start: usize, is_end: bool) -> Token<'a> {
        let bytes = self.input;
        let mut j = name_start;
        while j < bytes.len() && !is_html_whitespace(bytes[j]) && bytes[j] != b'/' && bytes[j] != b'>'
        {
            j += 1;
        }
        let name_end = j;

        let mut k = name_end;
        let (end, self_closing) = loop {
            match scan_attr(bytes, k) {
                AttrScan::Attr(_, next) => k = next,
                AttrScan::Close { self_closing, end } => break (end, self_closing),
                AttrScan::Eof => {
                    // Unterminated tag: pass the remainder through untouched.
                    self.pos = bytes.len();
                    return Token::Other(&bytes[start..]);
                }
            }
        };
        self.pos = end;

        let raw = &bytes[start..end];
        let tag = Tag::new(raw, &bytes[name_start..name_end], name_end - start);
        if is_end {
            return Token::EndTag(tag);
        }

        // `<script/>` still opens a script in HTML: the slash is ignored on
        // non-void elements, so rawtext scanning starts either way.
        self.rawtext = RAWTEXT_ELEMENTS
            .iter()
            .copied()
            .find(|name| *name == tag.name());
        if self_closing {
            Token::SelfClosingTag(tag)
        } else {
            Token::StartTag(tag)
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token<'a>, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if let Some(name) = self.rawtext.take() {
            if let Some((start, token)) = self.next_rawtext(name) {
                return Some(self.emit(start, token));
            }
        }
        if self.pos >= self.input.len() {
            return None;
        }
        let start = self.pos;
        let token = if starts_markup(self.input, start) {
            self.next_markup()
        } else {
            self.next_text()
        };
        debug_assert!(self.pos > start, "tokenizer must make progress");
        Some(self.emit(start, token))
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

/// Whether the `<` at `i` opens markup rather than being literal text.
fn starts_markup(bytes: &[u8], i: usize) -> bool {
    bytes[i] == b'<'
        && matches!(bytes.get(i + 1), Some(b) if b.is_ascii_alphabetic() || matches!(b, b'/' | b'!' | b'?'))
}

/// End (exclusive) of the comment starting at `i`.
///
/// `<!-->` and `<!--->` close immediately; an unterminated comment runs to the
/// end of input.
fn comment_end(bytes: &[u8], i: usize) -> usize {
    let body = i + HTML_COMMENT_START.len();
    if bytes.get(body) == Some(&b'>') {
        return body + 1;
    }
    if bytes.get(body..body + 2) == Some(b"->") {
        return body + 2;
    }
    match memmem::find(&bytes[body..], HTML_COMMENT_END) {
        Some(rel) => body + rel + HTML_COMMENT_END.len(),
        None => bytes.len(),
    }
}

/// Convenience: collect every token, stopping at the first error.
pub fn tokenize(input: &[u8]) -> Result<Vec<Token<'_>>, TokenizeError> {
    Tokenizer::new(input).collect()
}
