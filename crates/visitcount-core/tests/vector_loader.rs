//! JSON test vector loader for invocation events.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::fs;

use serde::Deserialize;
use visitcount_core::protocol::InvocationEvent;

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    pub event: InvocationEvent,
    #[serde(default)]
    pub expect: Option<ExpectPath>,
    #[serde(default)]
    pub expect_error: Option<ExpectError>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectPath {
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct ExpectError {
    pub code: String,
    pub status: u16,
}

/// Load every `*.json` vector, sorted by file name.
pub fn load_all() -> Vec<(String, TestVector)> {
    let mut names: Vec<String> = fs::read_dir("tests/vectors")
        .expect("vectors dir")
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .filter(|n| n.ends_with(".json"))
        .collect();
    names.sort();

    names
        .into_iter()
        .map(|name| {
            let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
            let v: TestVector = serde_json::from_str(&s)
                .unwrap_or_else(|e| panic!("bad vector {name}: {e}"));
            (name, v)
        })
        .collect()
}
