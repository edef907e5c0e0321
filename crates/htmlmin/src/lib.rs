//! Single-pass HTML minifier.
//!
//! `htmlmin` reads a document as a stream of lexical tokens (`html::Tokenizer`)
//! and writes back a smaller serialization that renders the same:
//! - runs of whitespace in ordinary text collapse to their first character;
//! - comments are dropped, except IE conditional comments;
//! - tags are re-serialized with single spaces, lowercase names and minimal
//!   attribute quoting;
//! - `<script>` and `<style>` bodies can be handed to pluggable sub-minifiers.
//!
//! Text inside `script`, `style`, `pre`, `code` and `textarea` is never
//! collapsed. Minifying already minified output returns it unchanged.
//!
//! ```
//! let out = htmlmin::minify(
//!     br#"<p  class="a" data-x="y">  Hello   <b>world</b>.  </p>"#,
//!     &htmlmin::Options::default(),
//! )
//! .unwrap();
//! assert_eq!(out, br#"<p class="a" data-x="y"> Hello <b>world</b>. </p>"#);
//! ```

mod delegate;
mod engine;
mod error;
mod options;

pub use delegate::{JsMin, LightningCss, ScriptMinifier, StyleMinifier};
pub use engine::collapse_whitespace;
pub use error::{DelegateError, MinifyError};
pub use options::Options;

use engine::Engine;

/// Minify `data` with the default sub-minifiers (`JsMin`, `LightningCss`).
///
/// Fails only when the tokenizer does, in which case no output is returned.
pub fn minify(data: &[u8], options: &Options) -> Result<Vec<u8>, MinifyError> {
    Engine::new(options, &JsMin, &LightningCss).run(data)
}

/// Reusable minifier: options plus the sub-minifiers to delegate to.
///
/// Each call runs a fresh engine, so one `Minifier` can be shared across
/// threads and documents.
pub struct Minifier {
    options: Options,
    script: Box<dyn ScriptMinifier + Send + Sync>,
    style: Box<dyn StyleMinifier + Send + Sync>,
}

impl Minifier {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            script: Box::new(JsMin),
            style: Box::new(LightningCss),
        }
    }

    pub fn with_script_minifier(
        mut self,
        script: impl ScriptMinifier + Send + Sync + 'static,
    ) -> Self {
        self.script = Box::new(script);
        self
    }

    pub fn with_style_minifier(
        mut self,
        style: impl StyleMinifier + Send + Sync + 'static,
    ) -> Self {
        self.style = Box::new(style);
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn minify(&self, data: &[u8]) -> Result<Vec<u8>, MinifyError> {
        Engine::new(&self.options, self.script.as_ref(), self.style.as_ref()).run(data)
    }

    /// `minify` for string input; the output is checked to be UTF-8.
    pub fn minify_str(&self, data: &str) -> Result<String, MinifyError> {
        Ok(String::from_utf8(self.minify(data.as_bytes())?)?)
    }
}

impl Default for Minifier {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl std::fmt::Debug for Minifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Minifier")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
