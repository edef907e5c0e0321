//! Whole-stylesheet minification on top of [`lightningcss`].

use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MinifyCssError {
    #[error("css parse: {0}")]
    Parser(String),
    #[error("css minify: {0}")]
    Minify(String),
    #[error("css print: {0}")]
    Printer(String),
    /// The declaration list could not be carried through the synthetic rule.
    #[error("declaration list adapter: {0}")]
    Adapter(&'static str),
}

/// Minify a complete stylesheet (the body of a `<style>` element).
///
/// Any parse error fails the whole call.
pub fn minify_stylesheet(input: &str) -> Result<String, MinifyCssError> {
    let mut sheet = StyleSheet::parse(input, ParserOptions::default())
        .map_err(|err| MinifyCssError::Parser(err.to_string()))?;
    sheet
        .minify(MinifyOptions::default())
        .map_err(|err| MinifyCssError::Minify(err.to_string()))?;
    let printed = sheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|err| MinifyCssError::Printer(err.to_string()))?;
    Ok(printed.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_element_body_shrinks() {
        let body = "\n  p.note {\n    margin : 0 ;\n    color: black;\n  }\n";
        let min = minify_stylesheet(body).unwrap();
        assert!(min.starts_with("p.note{"), "got {min:?}");
        assert!(!min.contains('\n'));
        assert!(!min.contains(" :"));
        assert!(min.len() < body.trim().len());
    }

    #[test]
    fn minified_body_is_stable() {
        let once = minify_stylesheet("a { color : red }  b { margin: 0px }").unwrap();
        assert_eq!(minify_stylesheet(&once).unwrap(), once);
    }

    #[test]
    fn parse_errors_are_reported() {
        let err = minify_stylesheet("a..b { color: red }").unwrap_err();
        assert!(matches!(err, MinifyCssError::Parser(_)), "got {err:?}");
    }

    #[test]
    fn blank_body_is_empty() {
        assert_eq!(minify_stylesheet("  \n ").unwrap(), "");
    }
}
