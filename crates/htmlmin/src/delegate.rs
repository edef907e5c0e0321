//! Sub-minifier seams.
//!
//! The engine hands script bodies, style bodies and `style` attribute values to
//! these traits. Failures never fail the document: the engine falls back to the
//! original bytes (see `Engine::text`).

use crate::error::DelegateError;

/// Minifies the body of a JavaScript `<script>` element.
pub trait ScriptMinifier {
    fn minify(&self, script: &[u8]) -> Result<Vec<u8>, DelegateError>;
}

impl<F> ScriptMinifier for F
where
    F: Fn(&[u8]) -> Result<Vec<u8>, DelegateError>,
{
    fn minify(&self, script: &[u8]) -> Result<Vec<u8>, DelegateError> {
        self(script)
    }
}

/// Minifies CSS, both full stylesheets and bare declaration lists.
pub trait StyleMinifier {
    /// Body of a `<style>` element.
    fn minify_stylesheet(&self, css: &str) -> Result<String, DelegateError>;

    /// Value of a `style` attribute: declarations without selector or braces.
    fn minify_declarations(&self, css: &str) -> Result<String, DelegateError>;
}

/// `minify-js` script minifier from the `js` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsMin;

impl ScriptMinifier for JsMin {
    fn minify(&self, script: &[u8]) -> Result<Vec<u8>, DelegateError> {
        Ok(js::minify(script)?)
    }
}

/// lightningcss-backed style minifier from the `css` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct LightningCss;

impl StyleMinifier for LightningCss {
    fn minify_stylesheet(&self, css: &str) -> Result<String, DelegateError> {
        Ok(css::minify_stylesheet(css)?)
    }

    fn minify_declarations(&self, css: &str) -> Result<String, DelegateError> {
        Ok(css::minify_declarations(css)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_script_minifiers() {
        let upper = |src: &[u8]| -> Result<Vec<u8>, DelegateError> { Ok(src.to_ascii_uppercase()) };
        assert_eq!(upper.minify(b"abc").unwrap(), b"ABC");
    }

    #[test]
    fn default_minifiers_wrap_their_crates() {
        let script = JsMin.minify(b"var answer = 1 ;").unwrap();
        assert!(script.starts_with(b"var answer=1"), "got {script:?}");
        assert!(JsMin.minify(b"var s = 'open").is_err());
        assert_eq!(
            LightningCss.minify_declarations("color: red").unwrap(),
            "color:red"
        );
        assert!(LightningCss.minify_stylesheet("a..b { color: red }").is_err());
    }
}
