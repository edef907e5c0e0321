//! Per-call minifier configuration.

use serde::Deserialize;

/// Options for one minification call.
///
/// `Options::default()` turns every optional rewrite off: whitespace is
/// collapsed and comments are dropped, but script and style bodies are kept
/// verbatim and every attribute value stays double-quoted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Run JavaScript `<script>` bodies through the script minifier.
    pub minify_scripts: bool,
    /// Run `<style>` bodies and `style="…"` values through the style minifier.
    pub minify_styles: bool,
    /// Drop quotes around attribute values that do not need them and write
    /// empty-valued attributes as bare names.
    pub unquote_attrs: bool,
    /// Fail the call if a single token is longer than this many bytes.
    pub max_token_len: Option<usize>,
}

impl Options {
    /// Same as `Options::default()`; starting point for the builder setters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn minify_scripts(mut self, on: bool) -> Self {
        self.minify_scripts = on;
        self
    }

    pub fn minify_styles(mut self, on: bool) -> Self {
        self.minify_styles = on;
        self
    }

    pub fn unquote_attrs(mut self, on: bool) -> Self {
        self.unquote_attrs = on;
        self
    }

    pub fn max_token_len(mut self, limit: Option<usize>) -> Self {
        self.max_token_len = limit;
        self
    }

    /// Every rewrite enabled, no token limit.
    pub fn all() -> Self {
        Self {
            minify_scripts: true,
            minify_styles: true,
            unquote_attrs: true,
            max_token_len: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_off() {
        let options = Options::default();
        assert!(!options.minify_scripts);
        assert!(!options.minify_styles);
        assert!(!options.unquote_attrs);
        assert_eq!(options.max_token_len, None);
    }

    #[test]
    fn deserializes_partial_tables() {
        let options: Options = serde_json::from_str(r#"{"unquote_attrs": true}"#).unwrap();
        assert_eq!(
            options,
            Options {
                unquote_attrs: true,
                ..Options::default()
            }
        );
        let empty: Options = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Options::default());
    }

    #[test]
    fn builder_setters_match_all() {
        let built = Options::new()
            .minify_scripts(true)
            .minify_styles(true)
            .unquote_attrs(true);
        assert_eq!(built, Options::all());
        assert_eq!(
            Options::new().max_token_len(Some(64)).max_token_len,
            Some(64)
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(serde_json::from_str::<Options>(r#"{"minify_js": true}"#).is_err());
    }
}
