//! Sliding two-layer vertex index cache.
//!
//! A vertex created on a cell's own edge can be referenced by up to three
//! later cells: the +x, +y and +z neighbors of the edge. Keeping only the
//! current and previous Z slice therefore suffices, bounding cache memory
//! to O(chunk-face-area) instead of O(chunk-volume).
//!
//! Each cell record holds 4 vertex slots; slots 1/2/3 store the cell's own
//! x/y/z edge vertices (see [`EdgeReuse`](super::tables::EdgeReuse)), slot
//! 0 is reserved.

use glam::IVec3;

use super::tables::REUSE_SELF;

/// Slots per cached cell.
const SLOTS: usize = 4;

/// Two-layer (current/previous Z slice) lookup structure mapping
/// (cell, slot) to an emitted vertex index.
pub struct VertexDedupCache {
  size: i32,
  current: Vec<[i32; SLOTS]>,
  previous: Vec<[i32; SLOTS]>,
}

impl VertexDedupCache {
  /// Create a cache for chunks of `size` cells per axis.
  pub fn new(size: i32) -> Self {
    assert!(size > 0, "cache size must be positive");
    let cells = (size * size) as usize;
    Self {
      size,
      current: vec![[-1; SLOTS]; cells],
      previous: vec![[-1; SLOTS]; cells],
    }
  }

  /// Finish a Z slice: the current layer becomes the previous one and the
  /// layer that becomes current is cleared, discarding all entries from
  /// two slices back.
  pub fn advance_layer(&mut self) {
    std::mem::swap(&mut self.current, &mut self.previous);
    self.current.fill([-1; SLOTS]);
  }

  #[inline]
  fn cell_index(&self, x: i32, y: i32) -> usize {
    debug_assert!(
      x >= 0 && y >= 0 && x < self.size && y < self.size,
      "cache cell ({x}, {y}) out of range",
    );
    (y * self.size + x) as usize
  }

  /// Look up the vertex stored by the cell `direction` steps behind
  /// `cell`. The z direction bit selects the previous layer.
  pub fn reuse(&self, cell: IVec3, direction: u8, slot: u8) -> Option<u32> {
    debug_assert_ne!(direction, REUSE_SELF);
    let x = cell.x - (direction & 1) as i32;
    let y = cell.y - (direction >> 1 & 1) as i32;
    debug_assert!(cell.z - (direction >> 2 & 1) as i32 >= 0);

    let layer = if direction & 4 != 0 {
      &self.previous
    } else {
      &self.current
    };
    let index = layer[self.cell_index(x, y)][slot as usize];
    (index >= 0).then_some(index as u32)
  }

  /// Record a vertex created on one of `cell`'s own edges.
  pub fn store(&mut self, cell: IVec3, slot: u8, vertex_index: u32) {
    debug_assert_ne!(slot, 0, "slot 0 is reserved");
    let index = self.cell_index(cell.x, cell.y);
    self.current[index][slot as usize] = vertex_index as i32;
  }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;
