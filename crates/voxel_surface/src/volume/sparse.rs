//! SparseChunkedVolume - an unbounded scalar field backed by a sparse
//! mapping of chunk origins to dense chunks.

use std::collections::HashMap;

use glam::IVec3;

use super::{DenseChunk, ScalarVolume};
use crate::types::Density;

/// Sparse scalar volume over chunk-origin -> [`DenseChunk`].
///
/// Reads outside any allocated chunk return the default sample (0, outside
/// everything at the default isolevel). Writes allocate the covering chunk
/// on demand.
///
/// Chunk origins are computed with floor division (`div_euclid`), so
/// negative coordinates address the correct chunk: coordinate -1 with
/// chunk size 64 lives in the chunk at origin -64.
#[derive(Clone, Debug, Default)]
pub struct SparseChunkedVolume {
  chunk_size: i32,
  chunks: HashMap<IVec3, DenseChunk>,
}

impl SparseChunkedVolume {
  /// Chunk edge length used by [`SparseChunkedVolume::new`].
  pub const DEFAULT_CHUNK_SIZE: i32 = 64;

  /// Create an empty volume with the default chunk size.
  pub fn new() -> Self {
    Self::with_chunk_size(Self::DEFAULT_CHUNK_SIZE)
  }

  /// Create an empty volume with a custom chunk size, fixed for the
  /// volume's lifetime.
  pub fn with_chunk_size(chunk_size: i32) -> Self {
    assert!(chunk_size > 0, "chunk size must be positive");
    Self {
      chunk_size,
      chunks: HashMap::new(),
    }
  }

  /// Origin of the chunk containing `position`.
  #[inline]
  pub fn chunk_origin(&self, position: IVec3) -> IVec3 {
    position.div_euclid(IVec3::splat(self.chunk_size)) * self.chunk_size
  }

  #[inline]
  fn local(&self, position: IVec3) -> IVec3 {
    position.rem_euclid(IVec3::splat(self.chunk_size))
  }

  /// Number of allocated chunks.
  pub fn chunk_count(&self) -> usize {
    self.chunks.len()
  }

  /// Whether the chunk at `origin` has been allocated.
  pub fn contains_chunk(&self, origin: IVec3) -> bool {
    self.chunks.contains_key(&origin)
  }

  /// The allocated chunk at `origin`, if any.
  pub fn chunk_at(&self, origin: IVec3) -> Option<&DenseChunk> {
    self.chunks.get(&origin)
  }

  /// Origins of all allocated chunks (unordered).
  pub fn chunk_origins(&self) -> impl Iterator<Item = IVec3> + '_ {
    self.chunks.keys().copied()
  }

  /// All allocated chunks (unordered).
  pub fn chunks(&self) -> impl Iterator<Item = &DenseChunk> {
    self.chunks.values()
  }
}

impl ScalarVolume for SparseChunkedVolume {
  fn get(&self, position: IVec3) -> Density {
    let origin = self.chunk_origin(position);
    match self.chunks.get(&origin) {
      Some(chunk) => chunk.get(position - origin),
      None => 0,
    }
  }

  fn set(&mut self, position: IVec3, value: Density) {
    let origin = self.chunk_origin(position);
    let local = self.local(position);
    let chunk = self
      .chunks
      .entry(origin)
      .or_insert_with(|| DenseChunk::new(origin, self.chunk_size));
    chunk.set(local, value);
  }

  fn size(&self) -> i32 {
    self.chunk_size
  }
}

#[cfg(test)]
#[path = "sparse_test.rs"]
mod sparse_test;
