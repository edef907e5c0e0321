#![no_main]

use htmlmin::{Options, minify};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First byte picks the option set; the rest is the document.
    let Some((&flags, doc)) = data.split_first() else {
        return;
    };
    let options = Options::new()
        .minify_scripts(flags & 1 != 0)
        .minify_styles(flags & 2 != 0)
        .unquote_attrs(flags & 4 != 0);

    let once = minify(doc, &options).expect("no token limit configured");
    let twice = minify(&once, &options).expect("no token limit configured");
    assert_eq!(twice, once, "minify is not idempotent");
});
