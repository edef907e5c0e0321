//! Declaration-list minification for inline `style="…"` values.
//!
//! lightningcss minifies whole stylesheets, while a `style` attribute holds
//! only a declaration list. The adapter wraps the list in a synthetic rule,
//! minifies that one-rule stylesheet, and unwraps the rule body again:
//!
//! `color: red; margin: 0px` → `*{color: red; margin: 0px}` → `*{color:red;margin:0}`
//! → `color:red;margin:0`

use crate::minify::{MinifyCssError, minify_stylesheet};

const SYNTHETIC_SELECTOR: &str = "*";

/// Minify a declaration list such as the value of a `style` attribute.
pub fn minify_declarations(input: &str) -> Result<String, MinifyCssError> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }
    // A brace would let the list escape the synthetic rule.
    if input.contains(['{', '}']) {
        return Err(MinifyCssError::Adapter("declaration list contains a brace"));
    }

    let wrapped = wrap(input);
    let minified = minify_stylesheet(&wrapped)?;
    unwrap(&minified)
}

// input: "color: red"
// output: "*{color: red}"
fn wrap(declarations: &str) -> String {
    let mut out = String::with_capacity(declarations.len() + SYNTHETIC_SELECTOR.len() + 2);
    out.push_str(SYNTHETIC_SELECTOR);
    out.push('{');
    out.push_str(declarations);
    out.push('}');
    out
}

// input: "*{color:red}"
// output: "color:red"
fn unwrap(minified: &str) -> Result<String, MinifyCssError> {
    // Every declaration was dropped, so the rule went with it.
    if minified.is_empty() {
        return Ok(String::new());
    }
    let body = minified
        .strip_prefix(SYNTHETIC_SELECTOR)
        .and_then(|rest| rest.strip_prefix('{'))
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or(MinifyCssError::Adapter("minified output is not the synthetic rule"))?;
    if body.contains(['{', '}']) {
        return Err(MinifyCssError::Adapter("minified output has more than one rule"));
    }
    Ok(body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minifies_single_declaration() {
        assert_eq!(minify_declarations("color: red").unwrap(), "color:red");
    }

    #[test]
    fn minifies_declaration_list() {
        let out = minify_declarations("  color: red;   margin: 0px ;").unwrap();
        assert!(out.contains("color:red"), "got {out}");
        assert!(!out.contains(' '), "got {out}");
        assert!(out.len() < "color: red; margin: 0px".len());
    }

    #[test]
    fn empty_list_stays_empty() {
        assert_eq!(minify_declarations("").unwrap(), "");
        assert_eq!(minify_declarations(" \t ").unwrap(), "");
    }

    #[test]
    fn rejects_lists_that_would_escape_the_rule() {
        assert!(matches!(
            minify_declarations("color:red} body {margin:0"),
            Err(MinifyCssError::Adapter(_))
        ));
    }

    #[test]
    fn unwrap_rejects_foreign_output() {
        assert!(unwrap("a{color:red}").is_err());
        assert!(unwrap("*{color:red}b{x:y}").is_err());
        assert_eq!(unwrap("*{color:red}").unwrap(), "color:red");
    }
}
