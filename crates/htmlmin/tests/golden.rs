use std::path::Path;

use html_test_support::fixtures::{FixtureCase, fixture_manifests, load_fixture_cases};
use html_test_support::mismatch_report;
use htmlmin::{Minifier, Options};

fn run_case(case: &FixtureCase<Options>, path: &Path) {
    let minifier = Minifier::new(case.options.clone());
    let actual = minifier
        .minify_str(&case.input)
        .unwrap_or_else(|err| panic!("case '{}' in {path:?} failed: {err}", case.id));
    if actual != case.expected {
        panic!(
            "case '{}' in {path:?} mismatched\n{}",
            case.id,
            mismatch_report(&case.expected, &actual)
        );
    }
    let again = minifier
        .minify_str(&actual)
        .unwrap_or_else(|err| panic!("case '{}' in {path:?} failed on rerun: {err}", case.id));
    assert_eq!(again, actual, "case '{}' in {path:?} is not stable", case.id);
}

#[test]
fn golden_fixtures() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let mut total = 0;
    for path in fixture_manifests(&dir) {
        for case in load_fixture_cases::<Options>(&path) {
            run_case(&case, &path);
            total += 1;
        }
    }
    assert!(total > 0, "no golden cases ran");
}
