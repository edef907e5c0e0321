pub mod declarations;
pub mod minify;

// Re-exports so other crates can just use `css::...` nicely.
pub use declarations::minify_declarations;
pub use minify::{MinifyCssError, minify_stylesheet};
