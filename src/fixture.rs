//! Mock resource fixtures: read YAML from disk, normalize, hand back JSON.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::normalize::{normalize_with, KeyPolicy};
use crate::{MocktailError, Result};

/// A single decoded mock resource: a string-keyed JSON object.
pub type MockResource = serde_json::Map<String, JsonValue>;

/// Read a fixture file's raw bytes.
///
/// Relative paths resolve against the process working directory at call time;
/// absolute paths are used as-is. One attempt, no caching.
pub fn read_fixture(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = resolve(path.as_ref())?;
    let bytes = fs::read(&path).map_err(|source| MocktailError::Read {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), len = bytes.len(), "read fixture");
    Ok(bytes)
}

fn resolve(path: &Path) -> Result<PathBuf> {
    let cwd = env::current_dir().map_err(MocktailError::WorkingDir)?;
    Ok(cwd.join(path))
}

/// Load one fixture and return its normalized content as a JSON string.
///
/// The fixture is parsed as YAML, normalized with [`KeyPolicy::Drop`] and
/// re-encoded as JSON. Empty files yield `"null"`.
pub fn mock_content_from_file(path: impl AsRef<Path>) -> Result<String> {
    mock_content_with(path, KeyPolicy::Drop)
}

/// Same as [`mock_content_from_file`] with an explicit key policy.
pub fn mock_content_with(path: impl AsRef<Path>, policy: KeyPolicy) -> Result<String> {
    let path = path.as_ref();
    let bytes = read_fixture(path)?;
    let doc: serde_yaml_ng::Value =
        serde_yaml_ng::from_slice(&bytes).map_err(|source| MocktailError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let normalized = normalize_with(&doc, policy)?;
    Ok(serde_json::to_string(&normalized)?)
}

/// Load one fixture into a [`MockResource`].
///
/// Fails if the fixture's top level is not a mapping.
pub fn load_mock(path: impl AsRef<Path>) -> Result<MockResource> {
    let content = mock_content_from_file(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load an ordered list of fixtures into mock resources, preserving order.
///
/// Fails fast: the first path that cannot be loaded aborts the batch and no
/// partial results are returned.
pub fn load_mocks(paths: &[impl AsRef<Path>]) -> Result<Vec<MockResource>> {
    load_mocks_with(paths, KeyPolicy::Drop)
}

/// Same as [`load_mocks`] with an explicit key policy.
pub fn load_mocks_with(
    paths: &[impl AsRef<Path>],
    policy: KeyPolicy,
) -> Result<Vec<MockResource>> {
    let mut resources = Vec::with_capacity(paths.len());
    for path in paths {
        let content = mock_content_with(path, policy)?;
        resources.push(serde_json::from_str(&content)?);
    }
    Ok(resources)
}
