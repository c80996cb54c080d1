//! The sharded shift store: 256 lazily loaded, content-addressed chunks
//! behind a process-wide, single-writer-per-key cache.

mod entry;
mod hash;
mod loader;

pub use entry::{Chunk, ShiftEntry, SolventStats};
pub(crate) use entry::round1000;
pub use hash::chunk_index_of;
pub use loader::{ChunkLoader, FsChunkLoader, InMemoryChunkLoader};

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, OnceLock};

use rayon::prelude::*;

use crate::core::error::StoreError;

const CHUNK_COUNT: u16 = 256;

/// A get-or-compute coalescing cache over the 256 chunks of the shift store.
///
/// Concurrent callers requesting the same not-yet-loaded chunk block on the
/// same [`OnceLock`] and all observe the one load's result; once installed, a
/// chunk's map is immutable. An optional capacity bound evicts the
/// least-recently-used chunk slot — eviction only changes residency, never
/// which chunk a key maps to.
pub struct ChunkStore {
    loader: Box<dyn ChunkLoader>,
    chunks: Mutex<HashMap<u16, Arc<OnceLock<Arc<Chunk>>>>>,
    capacity: Option<usize>,
    recency: Mutex<VecDeque<u16>>,
}

impl ChunkStore {
    /// An unbounded store: every chunk ever loaded stays resident.
    pub fn new(loader: impl ChunkLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            chunks: Mutex::new(HashMap::new()),
            capacity: None,
            recency: Mutex::new(VecDeque::new()),
        }
    }

    /// A store that evicts the least-recently-used chunk once more than
    /// `capacity` distinct chunks are resident at once.
    pub fn with_capacity(loader: impl ChunkLoader + 'static, capacity: usize) -> Self {
        Self {
            loader: Box::new(loader),
            chunks: Mutex::new(HashMap::new()),
            capacity: Some(capacity.max(1)),
            recency: Mutex::new(VecDeque::new()),
        }
    }

    /// Loads (or returns the already-cached) chunk for `index`.
    pub fn load_chunk(&self, index: u16) -> Result<Arc<Chunk>, StoreError> {
        let slot = {
            let mut chunks = self.chunks.lock().expect("chunk map mutex poisoned");
            chunks.entry(index).or_insert_with(|| Arc::new(OnceLock::new())).clone()
        };
        self.touch(index);

        if let Some(existing) = slot.get() {
            log::debug!("chunk {index:03} served from cache");
            return Ok(existing.clone());
        }

        log::debug!("loading chunk {index:03}");
        let loaded = Arc::new(self.loader.load(index)?);
        let _ = slot.set(loaded);
        Ok(slot.get().expect("just installed or raced with another installer").clone())
    }

    fn touch(&self, index: u16) {
        let Some(capacity) = self.capacity else { return };
        let mut recency = self.recency.lock().expect("recency mutex poisoned");
        recency.retain(|&i| i != index);
        recency.push_back(index);
        while recency.len() > capacity {
            if let Some(evicted) = recency.pop_front() {
                let mut chunks = self.chunks.lock().expect("chunk map mutex poisoned");
                if chunks.remove(&evicted).is_some() {
                    log::warn!("evicting chunk {evicted:03} to respect capacity {capacity}");
                }
            }
        }
    }

    /// Returns the entry for `key`, or `None` if absent from its chunk. An
    /// absent entry is not an error.
    pub fn query_exact(&self, key: &str) -> Result<Option<ShiftEntry>, StoreError> {
        let index = chunk_index_of(key);
        let chunk = self.load_chunk(index)?;
        Ok(chunk.get(key).cloned())
    }

    /// Preloads the distinct chunks backing `keys`, in parallel.
    pub fn preload(&self, keys: &[String]) -> Result<(), StoreError> {
        let mut indices: Vec<u16> = keys.iter().map(|k| chunk_index_of(k)).collect();
        indices.sort_unstable();
        indices.dedup();
        indices.par_iter().try_for_each(|&index| self.load_chunk(index).map(|_| ()))
    }

    /// Loads every chunk in the store, in parallel. Used before a full scan.
    pub fn load_all(&self) -> Result<(), StoreError> {
        log::info!("loading all {CHUNK_COUNT} chunks for a full-store scan");
        (0..CHUNK_COUNT).collect::<Vec<_>>().par_iter().try_for_each(|&index| self.load_chunk(index).map(|_| ()))
    }

    /// Iterates every `(chunk index, HOSE key, entry)` triple in the store.
    /// Loads any not-yet-resident chunk along the way.
    pub fn snapshot(&self) -> Result<Vec<(u16, String, ShiftEntry)>, StoreError> {
        self.load_all()?;
        let mut out = Vec::new();
        for index in 0..CHUNK_COUNT {
            let chunk = self.load_chunk(index)?;
            out.extend(chunk.iter().map(|(k, v)| (index, k.clone(), v.clone())));
        }
        Ok(out)
    }
}
