//! Chunk Partitioner: balanced, contiguous, order-preserving line partitioning

use crate::error::{PipelineError, PipelineResult};

use super::chunk_key;

/// One contiguous line-range partition of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub key: String,
    pub content: String,
}

/// Split `content` into at most `n` balanced, contiguous chunks of lines.
///
/// Lines come from a literal split on `'\n'`, so a trailing newline
/// contributes a trailing empty line; it is carried through like any other
/// line, which keeps the concatenation of all chunks (joined by newline)
/// byte-identical to the input. Chunk size is `ceil(total_lines / n)`; when
/// the document has fewer lines than `n`, fewer chunks are emitted.
pub fn partition(content: &str, n: usize) -> PipelineResult<Vec<Chunk>> {
    if n < 1 {
        return Err(PipelineError::invalid_input(
            "chunk count must be at least 1",
        ));
    }

    let lines: Vec<&str> = content.split('\n').collect();
    // split always yields at least one element, so chunk_size >= 1
    let chunk_size = lines.len().div_ceil(n);

    Ok(lines
        .chunks(chunk_size)
        .enumerate()
        .map(|(index, window)| Chunk {
            index,
            key: chunk_key(index),
            content: window.join("\n"),
        })
        .collect())
}
