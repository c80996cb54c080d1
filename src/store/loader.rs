//! Decouples "where chunk bytes come from" from [`super::ChunkStore`]'s
//! caching and coalescing policy, so tests can supply chunks in memory while
//! a real deployment reads them off disk.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::core::error::StoreError;
use crate::store::entry::Chunk;

/// Produces the chunk for a given index on demand.
pub trait ChunkLoader: Send + Sync {
    fn load(&self, index: u16) -> Result<Chunk, StoreError>;
}

/// Reads `chunk_NNN.json` files (zero-padded to three digits) from a
/// configured root directory.
#[derive(Debug, Clone)]
pub struct FsChunkLoader {
    root: PathBuf,
}

impl FsChunkLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, index: u16) -> PathBuf {
        self.root.join(format!("chunk_{index:03}.json"))
    }
}

impl ChunkLoader for FsChunkLoader {
    fn load(&self, index: u16) -> Result<Chunk, StoreError> {
        let path = self.path_for(index);
        let file = File::open(&path).map_err(|source| StoreError::ChunkUnavailable { index, source })?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|source| StoreError::ChunkMalformed { index, source })
    }
}

/// Serves chunks from an in-memory table, built up front. Used by tests and
/// by any caller that already has the full dataset resident (e.g. generated
/// in the same process rather than read from disk).
#[derive(Debug, Clone, Default)]
pub struct InMemoryChunkLoader {
    chunks: HashMap<u16, Chunk>,
}

impl InMemoryChunkLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chunk(mut self, index: u16, chunk: Chunk) -> Self {
        self.chunks.insert(index, chunk);
        self
    }
}

impl ChunkLoader for InMemoryChunkLoader {
    fn load(&self, index: u16) -> Result<Chunk, StoreError> {
        Ok(self.chunks.get(&index).cloned().unwrap_or_default())
    }
}
