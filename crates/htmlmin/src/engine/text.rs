//! Text handling: whitespace collapsing and script/style delegation.

use super::Engine;

/// Append `raw` to `out` with each run of spaces, tabs, CR and LF replaced by
/// the first character of the run.
pub fn collapse_whitespace(raw: &[u8], out: &mut Vec<u8>) {
    collapse_run(raw, false, out);
}

/// `collapse_whitespace` continuing a run that may have started in earlier
/// text. Returns whether `raw` ended inside a whitespace run.
fn collapse_run(raw: &[u8], mut seen_space: bool, out: &mut Vec<u8>) -> bool {
    out.reserve(raw.len());
    for &b in raw {
        if matches!(b, b' ' | b'\t' | b'\r' | b'\n') {
            if !seen_space {
                out.push(b);
                seen_space = true;
            }
        } else {
            out.push(b);
            seen_space = false;
        }
    }
    seen_space
}

/// Whether a minified raw-text body would be read differently once written
/// back: it closes `element` early, or opens an HTML-like comment the source
/// did not have.
fn breaks_out_of(min: &[u8], source: &[u8], element: &[u8]) -> bool {
    contains_end_tag(min, element) || (contains_comment_open(min) && !contains_comment_open(source))
}

fn contains_end_tag(haystack: &[u8], name: &[u8]) -> bool {
    memchr::memmem::find_iter(haystack, b"</").any(|at| {
        haystack
            .get(at + 2..at + 2 + name.len())
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name))
    })
}

fn contains_comment_open(haystack: &[u8]) -> bool {
    memchr::memmem::find(haystack, b"<!--").is_some()
}

impl Engine<'_> {
    pub(super) fn text(&mut self, raw: &[u8]) {
        if self.in_script && self.options.minify_scripts {
            self.script_body(raw);
        } else if self.in_style && self.options.minify_styles {
            self.style_body(raw);
        } else if self.raw_depth > 0 {
            self.out.extend_from_slice(raw);
        } else {
            // A dropped comment may separate two halves of one whitespace run.
            self.seen_space = collapse_run(raw, self.seen_space, &mut self.out);
            return;
        }
        self.seen_space = false;
    }

    fn script_body(&mut self, raw: &[u8]) {
        match self.script.minify(raw) {
            Ok(min) if breaks_out_of(&min, raw, b"script") => {
                log::debug!(
                    target: "htmlmin.engine",
                    "script kept as is: minified body would end the element"
                );
                self.out.extend_from_slice(raw);
            }
            Ok(min) => self.out.extend_from_slice(&min),
            Err(err) => {
                log::debug!(target: "htmlmin.engine", "script kept as is: {err}");
                self.out.extend_from_slice(raw);
            }
        }
    }

    fn style_body(&mut self, raw: &[u8]) {
        let Ok(css) = std::str::from_utf8(raw) else {
            log::debug!(target: "htmlmin.engine", "style kept as is: not UTF-8");
            self.out.extend_from_slice(raw);
            return;
        };
        match self.style.minify_stylesheet(css) {
            Ok(min) if breaks_out_of(min.as_bytes(), raw, b"style") => {
                log::debug!(
                    target: "htmlmin.engine",
                    "style kept as is: minified body would end the element"
                );
                self.out.extend_from_slice(raw);
            }
            Ok(min) => self.out.extend_from_slice(min.as_bytes()),
            Err(err) => {
                log::debug!(target: "htmlmin.engine", "style kept as is: {err}");
                self.out.extend_from_slice(raw);
            }
        }
    }

    /// Minified `style` attribute value, or `None` to keep the source value.
    ///
    /// Values carrying character references are never rewritten.
    pub(super) fn minify_inline_style(&self, raw: &[u8]) -> Option<String> {
        if !self.options.minify_styles || raw.contains(&b'&') {
            return None;
        }
        let css = std::str::from_utf8(raw).ok()?;
        match self.style.minify_declarations(css) {
            Ok(min) => Some(min),
            Err(err) => {
                log::debug!(target: "htmlmin.engine", "style attribute kept as is: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collapse(s: &str) -> String {
        let mut out = Vec::new();
        collapse_whitespace(s.as_bytes(), &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn run_becomes_its_first_character() {
        assert_eq!(collapse("  Hello   world  "), " Hello world ");
        assert_eq!(collapse("\n   \t x"), "\nx");
        assert_eq!(collapse("a\t\n b"), "a\tb");
    }

    #[test]
    fn other_bytes_are_untouched() {
        assert_eq!(collapse("a\u{A0}\u{A0}b"), "a\u{A0}\u{A0}b");
        assert_eq!(collapse("x\x0C\x0Cy"), "x\x0C\x0Cy");
        assert_eq!(collapse(""), "");
    }

    #[test]
    fn run_continues_across_calls() {
        let mut out = Vec::new();
        let seen = collapse_run(b"a \n", false, &mut out);
        assert!(seen);
        assert!(!collapse_run(b"\t b", seen, &mut out));
        assert_eq!(out, b"a b");
    }

    #[test]
    fn end_tags_of_the_element_are_caught_in_any_case() {
        assert!(breaks_out_of(b"a</script/", b"a < /script/", b"script"));
        assert!(breaks_out_of(b"x</STYLE>", b"x", b"style"));
        assert!(!breaks_out_of(b"a</scrip", b"a", b"script"));
        assert!(!breaks_out_of(b"'</style>'", b"'<\\/style>'", b"script"));
    }

    #[test]
    fn only_new_comment_openers_count() {
        assert!(breaks_out_of(b"x=a<!--b", b"x = a < !--b", b"script"));
        assert!(!breaks_out_of(b"s='<!--'", b"s = '<!--'", b"script"));
    }

    #[test]
    fn collapsing_is_idempotent() {
        let once = collapse(" \r\n a  b\t\tc \n");
        assert_eq!(collapse(&once), once);
    }
}
