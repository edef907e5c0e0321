//! Inline script minification.
//!
//! Scripts are parsed and reprinted by [`minify_js`] in global mode, so
//! top-level names stay visible to other scripts on the page. A script that
//! does not parse is reported as an error; callers keep its source.

mod script;

pub use script::{JsMinError, minify};
