//! Golden fixtures: TOML manifests of `input` / `expected` pairs.
//!
//! ```toml
//! format = "htmlmin-fixtures-v1"
//!
//! [[cases]]
//! id = "collapse-text"
//! input = "<p>  a  </p>"
//! expected = "<p> a </p>"
//! options = { unquote_attrs = true }
//! ```
//!
//! `options` is deserialized into whatever type the caller asks for and
//! defaults when absent.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;

pub const FIXTURES_FORMAT_V1: &str = "htmlmin-fixtures-v1";

#[derive(Clone, Debug, Deserialize)]
#[serde(bound(deserialize = "O: Deserialize<'de> + Default"))]
pub struct FixtureCase<O> {
    pub id: String,
    pub input: String,
    pub expected: String,
    #[serde(default)]
    pub options: O,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "O: Deserialize<'de> + Default"))]
struct FixtureManifest<O> {
    format: String,
    cases: Vec<FixtureCase<O>>,
}

/// Load one manifest; panics with the file path on any malformed input.
pub fn load_fixture_cases<O>(path: &Path) -> Vec<FixtureCase<O>>
where
    O: DeserializeOwned + Default,
{
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read fixture manifest {path:?}: {err}"));
    let manifest: FixtureManifest<O> = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse fixture manifest {path:?}: {err}"));
    assert_eq!(
        manifest.format, FIXTURES_FORMAT_V1,
        "unsupported fixture format in {path:?}"
    );
    assert!(!manifest.cases.is_empty(), "fixture manifest {path:?} has no cases");

    let mut seen = BTreeSet::new();
    for case in &manifest.cases {
        assert!(!case.id.is_empty(), "fixture case without id in {path:?}");
        assert!(
            seen.insert(case.id.as_str()),
            "duplicate fixture id '{}' in {path:?}",
            case.id
        );
    }
    manifest.cases
}

/// Every `*.toml` manifest directly under `dir`, in file name order.
pub fn fixture_manifests(dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir)
        .unwrap_or_else(|err| panic!("failed to read fixture directory {dir:?}: {err}"));
    let mut paths: Vec<PathBuf> = entries
        .map(|entry| {
            entry
                .unwrap_or_else(|err| panic!("failed to list fixture directory {dir:?}: {err}"))
                .path()
        })
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    paths.sort();
    assert!(!paths.is_empty(), "no fixture manifests in {dir:?}");
    paths
}
