pub const BLOCK_TEMPLATE: &str = "<div  class=\"box\">\n  <span>hello   world</span>\n  <!-- note -->\n  <img src=\"x.png\" alt=\"\">\n</div>\n";

pub const SCRIPT_BLOCK: &str = "<script>\n  // counter\n  var count = 0;\n  function bump() {\n    count = count + 1;\n  }\n</script>\n";

pub const STYLE_BLOCK: &str = "<style>\n  .box {\n    color: #ff0000;\n    margin: 0px 0px 0px 0px;\n  }\n</style>\n";

pub fn make_blocks(blocks: usize) -> String {
    let mut html = String::with_capacity(BLOCK_TEMPLATE.len() * blocks);
    for _ in 0..blocks {
        html.push_str(BLOCK_TEMPLATE);
    }
    html
}

/// Blocks interleaved with inline script and style bodies every `every` blocks.
pub fn make_mixed_document(blocks: usize, every: usize) -> String {
    let every = every.max(1);
    let mut html = String::from("<!doctype html>\n<html><head>\n");
    html.push_str(STYLE_BLOCK);
    html.push_str("</head><body>\n");
    for i in 0..blocks {
        html.push_str(BLOCK_TEMPLATE);
        if i % every == 0 {
            html.push_str(SCRIPT_BLOCK);
        }
    }
    html.push_str("</body></html>\n");
    html
}
