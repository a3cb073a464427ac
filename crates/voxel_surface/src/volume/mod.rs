//! Scalar field storage: the read/write capability and its chunked
//! backings.
//!
//! The extraction pipeline only ever talks to a [`ScalarVolume`]; callers
//! decide whether that is a single [`DenseChunk`] wrapped in a volume or a
//! [`SparseChunkedVolume`] spanning unbounded space.

pub mod chunk;
pub mod sparse;

pub use chunk::DenseChunk;
pub use sparse::SparseChunkedVolume;

use glam::IVec3;

use crate::types::Density;

/// Capability to read and write a signed scalar density at an integer 3D
/// coordinate.
///
/// Reads never fail: coordinates outside any allocated storage yield the
/// default sample (0). Writes allocate backing storage on demand.
pub trait ScalarVolume {
  /// Read the sample at `position`.
  fn get(&self, position: IVec3) -> Density;

  /// Write the sample at `position`.
  fn set(&mut self, position: IVec3, value: Density);

  /// Nominal cube edge length used by extraction loops.
  fn size(&self) -> i32;
}
