use std::fs::File;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub fn vec_from_json<T>(file_path: &str) -> anyhow::Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let file = File::open(file_path).with_context(|| format!("accessing {}", file_path))?;

    serde_json::from_reader(file).with_context(|| format!("reading data from {}", file_path))
}

/// Read a top-level JSON object, keeping its member order.
pub fn map_from_json(file_path: &str) -> anyhow::Result<serde_json::Map<String, Value>> {
    let file = File::open(file_path).with_context(|| format!("accessing {}", file_path))?;

    serde_json::from_reader(file).with_context(|| format!("reading data from {}", file_path))
}
