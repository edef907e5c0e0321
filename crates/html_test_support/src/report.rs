use std::fmt::Write;

/// Lines of context printed on each side of the first differing line.
const CONTEXT: usize = 2;

/// Human-readable report of where `actual` first departs from `expected`.
///
/// Lines are compared after splitting on `\n`; control characters are shown
/// escaped so a stray tab or CR is visible. Returns an empty string when the
/// two are equal.
pub fn mismatch_report(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::new();
    }
    let expected_lines: Vec<&str> = expected.split('\n').collect();
    let actual_lines: Vec<&str> = actual.split('\n').collect();
    let rows = expected_lines.len().max(actual_lines.len());
    let line = (0..rows)
        .find(|&i| expected_lines.get(i) != actual_lines.get(i))
        .unwrap_or(rows.saturating_sub(1));
    let offset = expected
        .bytes()
        .zip(actual.bytes())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "first difference at byte {offset}, line {} ({} vs {} bytes)",
        line + 1,
        expected.len(),
        actual.len()
    );
    let end = (line + CONTEXT + 1).min(rows);
    for i in line.saturating_sub(CONTEXT)..end {
        let marker = if i == line { '>' } else { ' ' };
        let row = i + 1;
        let _ = writeln!(out, "{marker} {row:>4} expected: {}", shown(expected_lines.get(i)));
        let _ = writeln!(out, "{marker} {row:>4}   actual: {}", shown(actual_lines.get(i)));
    }
    out
}

fn shown(line: Option<&&str>) -> String {
    match line {
        Some(line) => format!("\"{}\"", line.escape_debug()),
        None => "<no line>".to_string(),
    }
}
