//! Pipeline stage algorithms and store-mediated stage entry points
//!
//! The pure pieces live in [`partition`], [`frequency`], and [`aggregate`];
//! [`stages`] couples them to the object store and defines the three
//! independently invokable stages (split, map, reduce) along with their
//! request and response types.

pub mod aggregate;
pub mod frequency;
pub mod partition;
pub mod stages;

use std::collections::BTreeMap;

use crate::error::{PipelineError, PipelineResult};

/// Word -> occurrence count mapping.
///
/// A `BTreeMap` keeps the JSON encoding canonical (keys sorted), so
/// independently produced artifacts for the same content are byte-identical
/// and the reducer can decode partials written by any mapper invocation.
pub type WordCountTable = BTreeMap<String, u64>;

/// Key the final merged table is written under
pub const FINAL_RESULT_KEY: &str = "results/final_result.json";

/// Derive the store key for chunk `index`.
///
/// Decimal encoding, so indexes past 9 stay unambiguous.
pub fn chunk_key(index: usize) -> String {
    format!("chunks/chunk_{index}.txt")
}

/// Derive the partial-result key for a chunk key, e.g.
/// `chunks/chunk_4.txt` -> `results/chunk_4_result.json`.
pub fn partial_result_key(chunk_key: &str) -> String {
    let file_name = chunk_key.rsplit('/').next().unwrap_or(chunk_key);
    let chunk_id = file_name.strip_suffix(".txt").unwrap_or(file_name);
    format!("results/{chunk_id}_result.json")
}

/// Encode a table into its canonical artifact form
pub fn encode_table(table: &WordCountTable) -> PipelineResult<Vec<u8>> {
    serde_json::to_vec(table).map_err(|e| PipelineError::Internal(e.to_string()))
}

/// Decode the artifact stored under `key` into a table
pub fn decode_table(key: &str, bytes: &[u8]) -> PipelineResult<WordCountTable> {
    serde_json::from_slice(bytes).map_err(|e| PipelineError::decode(key, e))
}
