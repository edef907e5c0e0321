use super::Engine;

/// Openers of IE conditional comments and downlevel-revealed blocks.
const SIGNIFICANT_PREFIXES: [&[u8]; 4] = [b"<!--[if", b"<!--[endif]", b"<!--<![endif]", b"<!--<!"];

const EMPTY_COMMENT: &[u8] = b"<!-->";

/// Whether a comment changes rendering in some browser and must be kept.
pub(crate) fn is_significant_comment(raw: &[u8]) -> bool {
    SIGNIFICANT_PREFIXES
        .iter()
        .any(|prefix| raw.len() >= prefix.len() && raw[..prefix.len()].eq_ignore_ascii_case(prefix))
}

/// Whether text appended after `out` could join its tail into different
/// markup or a different character reference.
fn tail_can_fuse(out: &[u8]) -> bool {
    let name_len = out
        .iter()
        .rev()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'#')
        .count();
    match out[..out.len() - name_len].last() {
        Some(b'&') => true,
        Some(b'<') => name_len == 0,
        _ => false,
    }
}

impl Engine<'_> {
    pub(super) fn comment(&mut self, raw: &[u8]) {
        if is_significant_comment(raw) {
            self.out.extend_from_slice(raw);
            self.seen_space = false;
        } else if tail_can_fuse(&self.out) {
            // Dropping it would glue a literal `<` or a partial reference to
            // the following text.
            self.out.extend_from_slice(EMPTY_COMMENT);
            self.seen_space = false;
        }
    }
}
