//! Tag and attribute serialization.

use std::borrow::Cow;

use html::{Attribute, Tag, is_void_element, may_start_char_ref};

use super::Engine;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Quote {
    Unquoted,
    Double,
    Single,
}

/// Whether a value must be quoted to survive re-tokenization unchanged.
pub(crate) fn needs_quotes(value: &[u8]) -> bool {
    value.is_empty()
        || value.iter().any(|b| {
            matches!(
                b,
                b'\'' | b'`' | b'=' | b'<' | b'>' | b' ' | b'\t' | b'\r' | b'\n' | b'\x0C' | b'\x08'
            )
        })
}

fn choose_quote(value: &[u8], unquote: bool) -> Quote {
    if !unquote || needs_quotes(value) {
        Quote::Double
    } else if value.contains(&b'"') {
        Quote::Single
    } else {
        Quote::Unquoted
    }
}

/// Write a source-escaped value, escaping only what the chosen quoting needs.
///
/// Existing character references are left alone, so escaping an already
/// escaped value is a no-op.
fn escape_value(raw: &[u8], quote: Quote, out: &mut Vec<u8>) {
    for (i, &b) in raw.iter().enumerate() {
        match b {
            b'"' if quote == Quote::Double => out.extend_from_slice(b"&#34;"),
            b'<' => out.extend_from_slice(b"&lt;"),
            b'>' => out.extend_from_slice(b"&gt;"),
            b'&' if !may_start_char_ref(raw, i) => out.extend_from_slice(b"&amp;"),
            _ => out.push(b),
        }
    }
}

impl Engine<'_> {
    pub(super) fn write_start_tag(&mut self, tag: &Tag<'_>, self_closing: bool) {
        self.out.push(b'<');
        self.out.extend_from_slice(tag.name());
        let is_script = tag.name() == b"script";
        let mut last_unquoted = false;
        for attr in tag.attrs() {
            if is_script
                && self.in_script
                && attr.key() == b"type"
                && attr.value().as_ref() != b"text/javascript"
            {
                self.in_script = false;
            }
            self.out.push(b' ');
            last_unquoted = self.write_attr(&attr);
        }
        if self_closing && !is_void_element(tag.name()) {
            if last_unquoted {
                self.out.push(b' ');
            }
            self.out.push(b'/');
        }
        self.out.push(b'>');
    }

    pub(super) fn write_end_tag(&mut self, tag: &Tag<'_>) {
        self.out.extend_from_slice(b"</");
        self.out.extend_from_slice(tag.name());
        self.out.push(b'>');
    }

    /// Returns whether the value was written without quotes, in which case a
    /// following `/` would be read as part of it.
    fn write_attr(&mut self, attr: &Attribute<'_>) -> bool {
        self.out.extend_from_slice(attr.key());
        let Some(raw) = attr.raw_value() else {
            return false;
        };
        let minified = if attr.key() == b"style" {
            self.minify_inline_style(raw)
        } else {
            None
        };
        let (raw, value) = match &minified {
            Some(css) => (css.as_bytes(), Cow::Borrowed(css.as_bytes())),
            None => (raw, attr.value()),
        };
        if raw.is_empty() && self.options.unquote_attrs {
            return false;
        }

        let quote = choose_quote(&value, self.options.unquote_attrs);
        self.out.push(b'=');
        match quote {
            Quote::Unquoted => escape_value(raw, quote, &mut self.out),
            Quote::Double | Quote::Single => {
                let q = if quote == Quote::Double { b'"' } else { b'\'' };
                self.out.push(q);
                escape_value(raw, quote, &mut self.out);
                self.out.push(q);
            }
        }
        quote == Quote::Unquoted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(raw: &str, quote: Quote) -> String {
        let mut out = Vec::new();
        escape_value(raw.as_bytes(), quote, &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn quoting_required_for_separators_and_empty() {
        for value in ["", "a b", "a\tb", "a\nb", "a=b", "a'b", "a`b", "a<b", "a>b", "\x08"] {
            assert!(needs_quotes(value.as_bytes()), "{value:?} must be quoted");
        }
        for value in ["utf-8", "x", "/a/b.css", "a\"b", "a&amp;b"] {
            assert!(!needs_quotes(value.as_bytes()), "{value:?} may be unquoted");
        }
    }

    #[test]
    fn quote_choice_follows_unquote_option() {
        assert_eq!(choose_quote(b"utf-8", false), Quote::Double);
        assert_eq!(choose_quote(b"utf-8", true), Quote::Unquoted);
        assert_eq!(choose_quote(b"say \"hi\"", true), Quote::Double);
        assert_eq!(choose_quote(b"\"hi\"", true), Quote::Single);
    }

    #[test]
    fn escaping_keeps_references_and_is_stable() {
        assert_eq!(escaped("a & b", Quote::Double), "a &amp; b");
        assert_eq!(escaped("a &amp; b", Quote::Double), "a &amp; b");
        assert_eq!(escaped("&copy 2024", Quote::Double), "&copy 2024");
        assert_eq!(escaped("1<2>0", Quote::Double), "1&lt;2&gt;0");
        assert_eq!(escaped("say \"hi\"", Quote::Double), "say &#34;hi&#34;");
        assert_eq!(escaped("\"hi\"", Quote::Single), "\"hi\"");

        let once = escaped("x & \"y\" <z>", Quote::Double);
        assert_eq!(escaped(&once, Quote::Double), once);
    }
}
