use std::string::FromUtf8Error;

use thiserror::Error;

/// Failure of a whole minification call. No partial output accompanies it.
#[derive(Debug, Error)]
pub enum MinifyError {
    /// The token source stopped on something other than end of input.
    #[error("tokenizer failed: {0}")]
    Tokenize(#[from] html::TokenizeError),
    /// `minify_str` produced bytes that are not UTF-8.
    #[error("minified output is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

/// Error type returned by pluggable sub-minifiers.
pub type DelegateError = Box<dyn std::error::Error + Send + Sync>;
