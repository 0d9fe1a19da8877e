//! Write-batch chunking helper.

use crate::constants::WRITE_BATCH_CHUNK_SIZE;

/// Split a list of write operations into chunks the store will accept.
///
/// Chunks hold at most `WRITE_BATCH_CHUNK_SIZE` items, one below the
/// store's hard limit, so a caller can append one extra operation (the
/// metrics document) to the final chunk.
pub fn chunk_ops<T>(ops: Vec<T>) -> Vec<Vec<T>> {
    chunk_ops_sized(ops, WRITE_BATCH_CHUNK_SIZE)
}

/// Chunk with an explicit size. Size zero is treated as one.
pub fn chunk_ops_sized<T>(ops: Vec<T>, chunk_size: usize) -> Vec<Vec<T>> {
    let chunk_size = chunk_size.max(1);
    let mut chunks = Vec::with_capacity(ops.len().div_ceil(chunk_size));
    let mut current = Vec::with_capacity(chunk_size.min(ops.len()));
    for op in ops {
        current.push(op);
        if current.len() == chunk_size {
            chunks.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_chunks() {
        let chunks = chunk_ops::<u32>(Vec::new());
        assert!(chunks.is_empty());
    }

    #[test]
    fn splits_at_chunk_boundary() {
        let chunks = chunk_ops_sized((0..1000).collect::<Vec<_>>(), 499);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 499);
        assert_eq!(chunks[1].len(), 499);
        assert_eq!(chunks[2].len(), 2);
    }

    #[test]
    fn exact_multiple_has_no_trailing_chunk() {
        let chunks = chunk_ops_sized((0..998).collect::<Vec<_>>(), 499);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].len(), 499);
    }
}
