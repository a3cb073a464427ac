//! ChunkSurfaceRegistry - per-chunk mesh records for a whole volume.
//!
//! Extraction has no data dependency between chunks: each worker reads the
//! shared volume and writes its own cache and mesh buffers, so chunks mesh
//! in parallel and land in a concurrency-safe map keyed by chunk position.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard};

use glam::{IVec3, Vec3};
use rayon::prelude::*;

use crate::mesher::SurfaceExtractor;
use crate::types::{IsosurfaceMesh, MeshConfig, MinMaxAABB};
use crate::volume::{ScalarVolume, SparseChunkedVolume};

/// The externally visible unit of generated geometry.
#[derive(Clone, Debug)]
pub struct SurfaceChunk {
  /// Chunk origin in volume coordinates.
  pub position: IVec3,
  /// Axis-aligned spatial extent of the chunk.
  pub bounds: MinMaxAABB,
  /// Sampling stride the mesh was extracted at.
  pub level_of_distance: i32,
  /// The extracted geometry.
  pub mesh: IsosurfaceMesh,
}

/// Extract one chunk of `volume` into its registry record.
///
/// Pure function of the volume snapshot and configuration; safe to call
/// from any worker thread.
pub fn generate_chunk(
  volume: &SparseChunkedVolume,
  config: &MeshConfig,
  origin: IVec3,
) -> SurfaceChunk {
  let mesh = SurfaceExtractor::with_config(volume, config.clone()).generate(origin);
  let extent = (volume.size() * config.level_of_distance) as f32;
  SurfaceChunk {
    position: origin,
    bounds: MinMaxAABB::new(
      origin.as_vec3().to_array(),
      (origin.as_vec3() + Vec3::splat(extent)).to_array(),
    ),
    level_of_distance: config.level_of_distance,
    mesh,
  }
}

/// Mesh-per-chunk map, safe for concurrent population from extraction
/// workers.
pub struct ChunkSurfaceRegistry {
  chunks: RwLock<HashMap<IVec3, SurfaceChunk>>,
}

impl ChunkSurfaceRegistry {
  pub fn new() -> Self {
    Self {
      chunks: RwLock::new(HashMap::new()),
    }
  }

  /// Number of stored chunk records.
  pub fn len(&self) -> usize {
    self.chunks.read().unwrap().len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Whether a record exists for the chunk at `position`.
  pub fn contains(&self, position: IVec3) -> bool {
    self.chunks.read().unwrap().contains_key(&position)
  }

  /// Positions of all stored records (unordered).
  pub fn positions(&self) -> Vec<IVec3> {
    self.chunks.read().unwrap().keys().copied().collect()
  }

  /// Insert a record, replacing any existing record for the same
  /// position.
  pub fn insert(&self, chunk: SurfaceChunk) {
    self.chunks.write().unwrap().insert(chunk.position, chunk);
  }

  /// Remove and return the record at `position`.
  pub fn remove(&self, position: IVec3) -> Option<SurfaceChunk> {
    self.chunks.write().unwrap().remove(&position)
  }

  /// Read access to the full record map, for the rendering collaborator.
  pub fn read(&self) -> RwLockReadGuard<'_, HashMap<IVec3, SurfaceChunk>> {
    self.chunks.read().unwrap()
  }

  /// Extract every allocated chunk of `volume` in parallel and upsert the
  /// resulting records. After the call returns the registry holds exactly
  /// one record per allocated chunk; completion order between workers is
  /// unspecified.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "registry::generate_all")
  )]
  pub fn generate_all(&self, volume: &SparseChunkedVolume, config: &MeshConfig) {
    let origins: Vec<IVec3> = volume.chunk_origins().collect();
    origins.into_par_iter().for_each(|origin| {
      self.insert(generate_chunk(volume, config, origin));
    });
  }
}

impl Default for ChunkSurfaceRegistry {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;
