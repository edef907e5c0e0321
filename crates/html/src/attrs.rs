//! Attribute scanning shared by the tokenizer (to find where a tag ends) and
//! the lazy `Attributes` iterator (to read names and values).
//!
//! Follows the HTML attribute states closely enough to agree with browsers on
//! where a tag ends: `>` inside a quoted value does not close the tag, a
//! leading `=` belongs to the name, and an unquoted value may contain `/`.

use std::ops::Range;

use memchr::memchr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RawAttr {
    pub name: Range<usize>,
    pub value: Option<Range<usize>>,
    pub quote: Option<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum AttrScan {
    /// An attribute and the position to resume scanning from.
    Attr(RawAttr, usize),
    /// The tag closes; `end` is the index just past `>`.
    Close { self_closing: bool, end: usize },
    /// Input ended inside the tag.
    Eof,
}

pub(crate) fn is_html_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0C')
}

fn skip_whitespace(bytes: &[u8], mut k: usize) -> usize {
    while k < bytes.len() && is_html_whitespace(bytes[k]) {
        k += 1;
    }
    k
}

pub(crate) fn scan_attr(bytes: &[u8], mut k: usize) -> AttrScan {
    let len = bytes.len();
    loop {
        k = skip_whitespace(bytes, k);
        if k >= len {
            return AttrScan::Eof;
        }
        match bytes[k] {
            b'>' => {
                return AttrScan::Close {
                    self_closing: false,
                    end: k + 1,
                };
            }
            b'/' => {
                if bytes.get(k + 1) == Some(&b'>') {
                    return AttrScan::Close {
                        self_closing: true,
                        end: k + 2,
                    };
                }
                k += 1;
            }
            _ => break,
        }
    }

    let name_start = k;
    // The first byte is always part of the name, even when it is `=`.
    k += 1;
    while k < len && !is_html_whitespace(bytes[k]) && !matches!(bytes[k], b'/' | b'>' | b'=') {
        k += 1;
    }
    let name = name_start..k;

    let j = skip_whitespace(bytes, k);
    if j >= len || bytes[j] != b'=' {
        return AttrScan::Attr(
            RawAttr {
                name,
                value: None,
                quote: None,
            },
            k,
        );
    }

    let mut j = skip_whitespace(bytes, j + 1);
    if j >= len {
        return AttrScan::Eof;
    }
    match bytes[j] {
        quote @ (b'"' | b'\'') => {
            let value_start = j + 1;
            let Some(rel) = memchr(quote, &bytes[value_start..]) else {
                return AttrScan::Eof;
            };
            let value_end = value_start + rel;
            AttrScan::Attr(
                RawAttr {
                    name,
                    value: Some(value_start..value_end),
                    quote: Some(quote),
                },
                value_end + 1,
            )
        }
        // `a=>`: missing value, the tag still closes here.
        b'>' => AttrScan::Attr(
            RawAttr {
                name,
                value: Some(j..j),
                quote: None,
            },
            j,
        ),
        _ => {
            let value_start = j;
            while j < len && !is_html_whitespace(bytes[j]) && bytes[j] != b'>' {
                j += 1;
            }
            AttrScan::Attr(
                RawAttr {
                    name,
                    value: Some(value_start..j),
                    quote: None,
                },
                j,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(src: &[u8]) -> (Vec<(String, Option<String>)>, AttrScan) {
        let mut out = Vec::new();
        let mut k = 0;
        loop {
            match scan_attr(src, k) {
                AttrScan::Attr(attr, next) => {
                    assert!(next > k, "scan must make progress");
                    let name = String::from_utf8_lossy(&src[attr.name]).into_owned();
                    let value = attr
                        .value
                        .map(|v| String::from_utf8_lossy(&src[v]).into_owned());
                    out.push((name, value));
                    k = next;
                }
                end => return (out, end),
            }
        }
    }

    #[test]
    fn scans_quoted_unquoted_and_bare_attributes() {
        let (attrs, end) = collect(br#" a="x y" b='1>2' c=d e>"#);
        assert_eq!(
            attrs,
            vec![
                ("a".into(), Some("x y".into())),
                ("b".into(), Some("1>2".into())),
                ("c".into(), Some("d".into())),
                ("e".into(), None),
            ]
        );
        assert!(matches!(
            end,
            AttrScan::Close {
                self_closing: false,
                ..
            }
        ));
    }

    #[test]
    fn unquoted_value_keeps_trailing_slash() {
        let (attrs, end) = collect(b" href=/a/>");
        assert_eq!(attrs, vec![("href".into(), Some("/a/".into()))]);
        assert!(matches!(
            end,
            AttrScan::Close {
                self_closing: false,
                ..
            }
        ));
    }

    #[test]
    fn detects_self_closing_after_attributes() {
        let (attrs, end) = collect(br#" d="M0" />"#);
        assert_eq!(attrs, vec![("d".into(), Some("M0".into()))]);
        assert_eq!(
            end,
            AttrScan::Close {
                self_closing: true,
                end: 10
            }
        );
    }

    #[test]
    fn leading_equals_belongs_to_name_and_spaces_around_equals_are_allowed() {
        let (attrs, _) = collect(b" =x a = b>");
        assert_eq!(
            attrs,
            vec![("=x".into(), None), ("a".into(), Some("b".into()))]
        );
    }

    #[test]
    fn unterminated_quote_reports_eof() {
        let (_, end) = collect(br#" a="never closed"#);
        assert_eq!(end, AttrScan::Eof);
    }
}
