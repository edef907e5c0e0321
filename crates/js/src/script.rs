use minify_js::{Session, TopLevelMode};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsMinError {
    #[error("script does not parse: {0}")]
    Syntax(String),
    /// `<!--` acts as a line comment inside classic scripts and the parser
    /// does not model it.
    #[error("script uses HTML-like comments")]
    HtmlLikeComment,
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Minify a classic script body.
pub fn minify(input: &[u8]) -> Result<Vec<u8>, JsMinError> {
    if memchr::memmem::find(input, b"<!--").is_some() {
        return Err(JsMinError::HtmlLikeComment);
    }
    let body = input.strip_prefix(UTF8_BOM).unwrap_or(input);
    let session = Session::new();
    let mut out = Vec::with_capacity(body.len());
    minify_js::minify(&session, TopLevelMode::Global, body, &mut out)
        .map_err(|err| JsMinError::Syntax(format!("{err:?}")))?;
    Ok(out)
}
