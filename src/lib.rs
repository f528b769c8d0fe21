//! Test-support utilities for policy rule evaluation.
//!
//! Loads mock resource fixtures written in YAML, normalizes them into
//! strictly string-keyed JSON documents, and compares computed rule
//! evaluation responses against expected ones.

pub mod error;
pub mod fixture;
pub mod normalize;
pub mod response;

pub use error::{MocktailError, Result};
pub use fixture::{load_mock, load_mocks, load_mocks_with, mock_content_from_file, MockResource};
pub use normalize::{normalize, normalize_with, KeyPolicy};
pub use response::{responses_match, AlertObject, RuleResponse};
