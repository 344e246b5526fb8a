//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::fs::File;
use std::path::Path;

use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by domain-idna and the test suite.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To enable debug level logging:
///   RUST_LOG=DEBUG
///
/// Or to log only the labels rejected by the conversion:
///   RUST_LOG=domain_idna=DEBUG
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .try_init()
        .ok();
}

/// Loads one section of the test vectors in `test-data/idna-vectors.json`.
pub fn load_vectors(section: &str) -> Vec<Value> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test-data")
        .join("idna-vectors.json");
    let file = File::open(&path).unwrap();
    let mut vectors: Value = serde_json::from_reader(file).unwrap();
    match vectors[section].take() {
        Value::Array(vectors) => vectors,
        other => panic!("missing test vectors '{}': {:?}", section, other),
    }
}

/// Returns the string stored under `key`.
pub fn str_field<'a>(vector: &'a Value, key: &str) -> &'a str {
    vector[key].as_str().unwrap()
}
