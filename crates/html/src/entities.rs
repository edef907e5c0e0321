use std::borrow::Cow;

const MAX_HEX_DIGITS: usize = 6; // 0x10FFFF
const MAX_DEC_DIGITS: usize = 7; // 1114111

/// Decode a minimal, explicitly limited subset of HTML entities.
///
/// Contract:
/// - Named entities decoded: `&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;`, `&nbsp;`.
/// - Numeric entities decoded only when well-formed and semicolon-terminated:
///   `&#123;` (decimal) and `&#x1F4A9;` (hex).
/// - Only valid Unicode scalar values decode; invalid scalars pass through unchanged.
/// - Missing semicolons, unknown names, malformed numerics, or overlong digit runs are left
///   unchanged.
/// - Input without `&` is returned borrowed.
///
/// This is intentionally not HTML5-spec-complete. Keep the behavior narrow and stable.
pub fn decode_entities(s: &[u8]) -> Cow<'_, [u8]> {
    if memchr::memchr(b'&', s).is_none() {
        return Cow::Borrowed(s);
    }
    let mut out = Vec::with_capacity(s.len());
    let mut i = 0;
    let mut copy_start = 0;

    while i < s.len() {
        if s[i] != b'&' {
            i += 1;
            continue;
        }

        // Flush bytes up to '&' unchanged (preserves UTF-8).
        out.extend_from_slice(&s[copy_start..i]);

        if let Some((decoded, len)) = named_entity(s, i) {
            push_char(&mut out, decoded);
            i += len;
            copy_start = i;
            continue;
        }

        // numeric entities: &#123; or &#x1F4A9;
        let (digits_start, max_digits, radix) =
            if starts_with_bytes(s, i, b"&#x") || starts_with_bytes(s, i, b"&#X") {
                (i + 3, MAX_HEX_DIGITS, 16)
            } else if starts_with_bytes(s, i, b"&#") {
                (i + 2, MAX_DEC_DIGITS, 10)
            } else {
                // fallback to keep '&' as-is
                out.push(b'&');
                i += 1;
                copy_start = i;
                continue;
            };

        let Some(end) = scan_numeric_entity(s, digits_start, max_digits, radix == 16) else {
            i = emit_malformed_entity(&mut out, s, i);
            copy_start = i;
            continue;
        };

        // Digits are ASCII, so the slice is valid UTF-8.
        let digits = std::str::from_utf8(&s[digits_start..end]).unwrap_or_default();
        match u32::from_str_radix(digits, radix)
            .ok()
            .and_then(char::from_u32)
        {
            Some(ch) => push_char(&mut out, ch),
            // Known end; preserve entire sequence unchanged.
            None => out.extend_from_slice(&s[i..=end]),
        }
        i = end + 1;
        copy_start = i;
    }

    out.extend_from_slice(&s[copy_start..]);
    Cow::Owned(out)
}

/// Reports whether the `&` at `at` may be read by a browser as the start of a
/// character reference.
///
/// Conservative: any `&` followed by `#` or an ASCII alphanumeric counts, since
/// legacy named references (`&copy`, `&amp`) decode without a `;` in many
/// contexts. A `&` for which this returns `false` can always be written as
/// `&amp;` without changing meaning.
pub fn may_start_char_ref(s: &[u8], at: usize) -> bool {
    s.get(at) == Some(&b'&')
        && s
            .get(at + 1)
            .is_some_and(|b| *b == b'#' || b.is_ascii_alphanumeric())
}

fn named_entity(s: &[u8], i: usize) -> Option<(char, usize)> {
    const NAMED: [(&[u8], char); 6] = [
        (b"&amp;", '&'),
        (b"&lt;", '<'),
        (b"&gt;", '>'),
        (b"&quot;", '"'),
        (b"&apos;", '\''),
        (b"&nbsp;", '\u{00A0}'),
    ];
    NAMED
        .iter()
        .find(|(pat, _)| starts_with_bytes(s, i, pat))
        .map(|(pat, ch)| (*ch, pat.len()))
}

// Bounded scan to avoid quadratic behavior on adversarial input.
fn scan_numeric_entity(bytes: &[u8], start: usize, max_digits: usize, is_hex: bool) -> Option<usize> {
    let mut j = start;
    let mut digits = 0usize;

    while j < bytes.len() {
        let b = bytes[j];
        if b == b';' {
            return (digits > 0).then_some(j);
        }
        if digits == max_digits {
            return None;
        }
        let ok = if is_hex {
            b.is_ascii_hexdigit()
        } else {
            b.is_ascii_digit()
        };
        if !ok {
            return None;
        }
        digits += 1;
        j += 1;
    }

    None
}

fn emit_malformed_entity(out: &mut Vec<u8>, bytes: &[u8], start: usize) -> usize {
    let mut j = start + 1;
    while j < bytes.len() {
        let b = bytes[j];
        // Stop at `;`, whitespace, or `&` to avoid spanning into adjacent tokens.
        if b == b';' {
            out.extend_from_slice(&bytes[start..=j]);
            return j + 1;
        }
        if b == b'&' || b.is_ascii_whitespace() {
            out.extend_from_slice(&bytes[start..j]);
            return j;
        }
        j += 1;
    }
    out.extend_from_slice(&bytes[start..]);
    bytes.len()
}

fn starts_with_bytes(bytes: &[u8], i: usize, pat: &[u8]) -> bool {
    bytes.get(i..i + pat.len()).is_some_and(|s| s == pat)
}

fn push_char(out: &mut Vec<u8>, ch: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(s: &str) -> String {
        String::from_utf8(decode_entities(s.as_bytes()).into_owned()).expect("utf-8 output")
    }

    #[test]
    fn decode_entities_borrows_when_nothing_to_decode() {
        assert!(matches!(decode_entities(b"plain"), Cow::Borrowed(_)));
        assert_eq!(decode("120×32"), "120×32");
    }

    #[test]
    fn decode_entities_decodes_common_entities() {
        assert_eq!(decode("a &amp; b"), "a & b");
        assert_eq!(decode("&lt;tag&gt;"), "<tag>");
        assert_eq!(decode("&quot;hi&quot;"), "\"hi\"");
        assert_eq!(decode("&apos;x&apos;"), "'x'");
        assert_eq!(decode("a&nbsp;b"), "a\u{00A0}b");
    }

    #[test]
    fn decode_entities_decodes_numeric_entities() {
        assert_eq!(decode("&#215;"), "×");
        assert_eq!(decode("&#xD7;"), "×");
        assert_eq!(decode("π &amp; σ"), "π & σ");
    }

    #[test]
    fn decode_entities_passes_through_unknown_and_missing_semicolon() {
        assert_eq!(decode("before &copy; after"), "before &copy; after");
        assert_eq!(decode("&amp"), "&amp");
        assert_eq!(decode("loose &amp space"), "loose &amp space");
        assert_eq!(decode("&#xD7 "), "&#xD7 ");
        assert_eq!(decode("&#215 "), "&#215 ");
    }

    #[test]
    fn decode_entities_passes_through_malformed_numeric() {
        for s in [
            "&#xZZ;",
            "&#99999999;",
            "&#xD800;",
            "&#x110000;",
            "&#-1;",
            "&#12345678",
            "&#;",
            "&#x;",
        ] {
            assert_eq!(decode(s), s);
        }
        assert_eq!(decode("&#xZZ;&amp;"), "&#xZZ;&");
    }

    #[test]
    fn decode_entities_respects_numeric_digit_limits() {
        assert_eq!(decode("&#1114111;"), "\u{10FFFF}");
        assert_eq!(decode("&#11141111;"), "&#11141111;");
        assert_eq!(decode("&#x10FFFF;"), "\u{10FFFF}");
    }

    #[test]
    fn may_start_char_ref_is_conservative() {
        assert!(may_start_char_ref(b"&amp;", 0));
        assert!(may_start_char_ref(b"x&copy;", 1));
        assert!(may_start_char_ref(b"&#39;", 0));
        assert!(may_start_char_ref(b"&#x27;", 0));
        // legacy references decode without a semicolon
        assert!(may_start_char_ref(b"&amp", 0));
        assert!(may_start_char_ref(b"&copy 2024", 0));
        assert!(!may_start_char_ref(b"a & b", 2));
        assert!(!may_start_char_ref(b"&&", 0));
        assert!(!may_start_char_ref(b"&", 0));
        assert!(!may_start_char_ref(b"x", 0));
    }
}
