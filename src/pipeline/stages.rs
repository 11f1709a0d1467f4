//! Store-mediated stage invocations
//!
//! Stages never call one another. Each one reads and writes keyed artifacts
//! and reports the produced keys back to its caller, which decides when and
//! with which keys to trigger the next stage. That keeps every stage
//! independently retriable and schedulable: mapper invocations for distinct
//! chunks can run concurrently on different processes, and a re-run with the
//! same inputs overwrites its outputs with byte-identical content.
//!
//! Every stage fails fast on the first error and writes nothing further for
//! that invocation; the reducer in particular decodes all of its inputs
//! before writing anything, so no partial merge is ever persisted.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{PipelineError, PipelineResult};
use crate::storage::ObjectStore;

use super::{
    aggregate, decode_table, encode_table, frequency, partial_result_key, partition,
    FINAL_RESULT_KEY,
};

/// Parameters for the split stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitRequest {
    /// Store key of the source document
    pub document_key: String,
    /// Target number of chunks, at least 1
    pub chunk_count: usize,
}

/// Outcome of a split invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitResponse {
    /// Keys of the chunk artifacts, in index order
    pub chunk_keys: Vec<String>,
}

/// Parameters for the map stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapRequest {
    /// Store key of the chunk to count
    pub chunk_key: String,
}

/// Outcome of a map invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapResponse {
    /// Key the partial-result table was written under
    pub result_key: String,
    /// Number of distinct words in the partial table
    pub distinct_words: usize,
}

/// Parameters for the reduce stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReduceRequest {
    /// Keys of the partial-result artifacts to merge; order is irrelevant
    pub partial_result_keys: Vec<String>,
}

/// Outcome of a reduce invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReduceResponse {
    /// Key the merged table was written under
    pub final_result_key: String,
    /// Number of distinct words in the merged table
    pub distinct_words: usize,
}

/// Split a document into contiguous line chunks and write one artifact per
/// chunk.
pub async fn split(store: &dyn ObjectStore, request: &SplitRequest) -> PipelineResult<SplitResponse> {
    if request.document_key.is_empty() {
        return Err(PipelineError::invalid_input("missing document key"));
    }

    let content = store.read(&request.document_key).await?;
    let content = String::from_utf8_lossy(&content);

    let chunks = partition::partition(&content, request.chunk_count)?;

    let mut chunk_keys = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        debug!(key = %chunk.key, lines = chunk.content.split('\n').count(), "writing chunk");
        store.write(&chunk.key, chunk.content.as_bytes()).await?;
        chunk_keys.push(chunk.key.clone());
    }

    info!(
        document_key = %request.document_key,
        chunks = chunk_keys.len(),
        "split complete"
    );
    Ok(SplitResponse { chunk_keys })
}

/// Count word frequencies in one chunk and write the partial-result artifact.
pub async fn map(store: &dyn ObjectStore, request: &MapRequest) -> PipelineResult<MapResponse> {
    if request.chunk_key.is_empty() {
        return Err(PipelineError::invalid_input("missing chunk key"));
    }

    let content = store.read(&request.chunk_key).await?;
    let table = frequency::count_words(&String::from_utf8_lossy(&content));
    let distinct_words = table.len();

    let result_key = partial_result_key(&request.chunk_key);
    store.write(&result_key, &encode_table(&table)?).await?;

    info!(
        chunk_key = %request.chunk_key,
        result_key = %result_key,
        distinct_words,
        "map complete"
    );
    Ok(MapResponse {
        result_key,
        distinct_words,
    })
}

/// Merge the listed partial-result tables and write the final artifact.
pub async fn reduce(
    store: &dyn ObjectStore,
    request: &ReduceRequest,
) -> PipelineResult<ReduceResponse> {
    if request.partial_result_keys.is_empty() {
        return Err(PipelineError::invalid_input("empty partial-result key list"));
    }

    // Read and decode every input before writing anything, so a bad key or
    // corrupt artifact never leaves a partial final result behind.
    let mut tables = Vec::with_capacity(request.partial_result_keys.len());
    for key in &request.partial_result_keys {
        let bytes = store.read(key).await?;
        tables.push(decode_table(key, &bytes)?);
    }

    let merged = aggregate::merge(tables);
    let distinct_words = merged.len();
    store.write(FINAL_RESULT_KEY, &encode_table(&merged)?).await?;

    info!(
        partials = request.partial_result_keys.len(),
        distinct_words,
        "reduce complete"
    );
    Ok(ReduceResponse {
        final_result_key: FINAL_RESULT_KEY.to_string(),
        distinct_words,
    })
}
