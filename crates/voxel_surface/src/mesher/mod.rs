//! Isosurface extraction from scalar density volumes.
//!
//! # Algorithm Overview
//!
//! Classic marching cubes over a chunk's cube grid:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 1: Classification                      │
//! │  For each cell: load 8 samples, build the 8-bit inside flag,    │
//! │  early-out when homogeneous (flag == 0x00 or 0xFF)              │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 2: Vertex resolution                   │
//! │  For each table triangle edge: reuse the shared vertex through  │
//! │  the dedup cache, or interpolate position + gradient normal at  │
//! │  the crossing (fixed-point alpha, canonical endpoint order)     │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 3: Emission                            │
//! │  Push resolved index triples into the chunk's IsosurfaceMesh    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cells iterate x-fastest with Z outermost; the dedup cache advances one
//! layer per completed Z slice, so a vertex stays reachable exactly as
//! long as a neighboring cell can still reference it.
//!
//! Corner samples are read through the [`ScalarVolume`], not a chunk in
//! isolation: normals at chunk borders see neighbor samples, which keeps
//! normals continuous across chunk seams.

pub mod cache;
pub mod cell;
pub mod tables;

pub use cache::VertexDedupCache;
pub use cell::CellTriangle;

use glam::IVec3;

use crate::types::{IsosurfaceMesh, MeshConfig};
use crate::volume::ScalarVolume;

/// Per-chunk isosurface extractor over a scalar volume.
pub struct SurfaceExtractor<'a, V: ScalarVolume> {
  volume: &'a V,
  config: MeshConfig,
}

impl<'a, V: ScalarVolume> SurfaceExtractor<'a, V> {
  /// Create an extractor with the default configuration.
  pub fn new(volume: &'a V) -> Self {
    Self::with_config(volume, MeshConfig::default())
  }

  /// Create an extractor with an explicit configuration.
  pub fn with_config(volume: &'a V, config: MeshConfig) -> Self {
    Self { volume, config }
  }

  pub fn config(&self) -> &MeshConfig {
    &self.config
  }

  /// Extract the isosurface of the chunk anchored at `chunk_origin`,
  /// iterating all `size³` cells of the volume's cube grid.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "mesher::generate"))]
  pub fn generate(&self, chunk_origin: IVec3) -> IsosurfaceMesh {
    assert!(self.config.level_of_distance >= 1, "level_of_distance >= 1");

    let size = self.volume.size();
    let mut mesh = IsosurfaceMesh::new();
    let mut cache = VertexDedupCache::new(size);

    for z in 0..size {
      for y in 0..size {
        for x in 0..size {
          cell::polygonize_cell(
            self.volume,
            &self.config,
            chunk_origin,
            IVec3::new(x, y, z),
            &mut cache,
            &mut mesh,
          );
        }
      }
      cache.advance_layer();
    }

    mesh
  }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
