//! DenseChunk - fixed-size cubic block of scalar samples.

use glam::IVec3;

use crate::types::Density;

/// A cubic `size³` block of density samples, identified by its
/// chunk-aligned integer origin. The unit of storage and of mesh
/// generation.
///
/// Memory layout is `x + y*size + z*size²` (x fastest).
#[derive(Clone, Debug)]
pub struct DenseChunk {
  origin: IVec3,
  size: i32,
  data: Box<[Density]>,
}

impl DenseChunk {
  /// Create a zero-filled chunk at `origin`.
  pub fn new(origin: IVec3, size: i32) -> Self {
    assert!(size > 0, "chunk size must be positive");
    let volume = (size * size * size) as usize;
    Self {
      origin,
      size,
      data: vec![0; volume].into_boxed_slice(),
    }
  }

  /// Chunk-aligned origin in volume coordinates.
  pub fn origin(&self) -> IVec3 {
    self.origin
  }

  /// Edge length in samples.
  pub fn size(&self) -> i32 {
    self.size
  }

  #[inline]
  fn index(&self, local: IVec3) -> usize {
    debug_assert!(
      local.cmpge(IVec3::ZERO).all() && local.cmplt(IVec3::splat(self.size)).all(),
      "local coordinate {local} out of chunk bounds",
    );
    (local.x + local.y * self.size + local.z * self.size * self.size) as usize
  }

  /// Read the sample at a chunk-local coordinate.
  #[inline]
  pub fn get(&self, local: IVec3) -> Density {
    self.data[self.index(local)]
  }

  /// Write the sample at a chunk-local coordinate.
  #[inline]
  pub fn set(&mut self, local: IVec3, value: Density) {
    let index = self.index(local);
    self.data[index] = value;
  }
}

#[cfg(test)]
#[path = "chunk_test.rs"]
mod chunk_test;
