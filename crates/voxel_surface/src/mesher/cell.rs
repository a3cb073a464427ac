//! Cell polygonization: classify one unit cube of 8 samples, interpolate
//! crossing vertices along its edges and emit triangles.

use glam::{IVec3, Vec3A};
use smallvec::SmallVec;

use super::cache::VertexDedupCache;
use super::tables::{CORNER_OFFSETS, EDGE_CORNERS, EDGE_REUSE, TRI_TABLE, REUSE_SELF};
use crate::types::{Density, IsosurfaceMesh, MeshConfig};
use crate::volume::ScalarVolume;

/// Fixed-point interpolation scale: alpha lives in [0, 256].
const ALPHA_ONE: i32 = 256;

/// One emitted polygon before vertex resolution: a cell coordinate plus
/// three local edge identifiers into the cube edge table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellTriangle {
  pub cell: IVec3,
  pub edges: [u8; 3],
}

/// The 8 sampled corners of one cell plus their gradient-estimated
/// normals, in volume coordinates.
struct CellSamples {
  offset: IVec3,
  stride: i32,
  densities: [Density; 8],
  normals: [Vec3A; 8],
}

/// Triangles for a corner flag, read off the triangulation table.
fn cell_triangles(flag: usize, cell: IVec3) -> SmallVec<[CellTriangle; 5]> {
  let row = &TRI_TABLE[flag];
  let mut triangles = SmallVec::new();
  let mut i = 0;
  while i + 2 < row.len() && row[i] >= 0 {
    triangles.push(CellTriangle {
      cell,
      edges: [row[i] as u8, row[i + 1] as u8, row[i + 2] as u8],
    });
    i += 3;
  }
  triangles
}

/// Polygonize the cell at `cell` (cube-grid coordinates) of the chunk
/// anchored at `chunk_origin`, appending vertices and triangles to `mesh`.
pub(super) fn polygonize_cell<V: ScalarVolume>(
  volume: &V,
  config: &MeshConfig,
  chunk_origin: IVec3,
  cell: IVec3,
  cache: &mut VertexDedupCache,
  mesh: &mut IsosurfaceMesh,
) {
  let stride = config.level_of_distance;
  let offset = chunk_origin + cell * stride;

  let mut densities = [0 as Density; 8];
  let mut flag = 0usize;
  for (i, corner) in CORNER_OFFSETS.iter().enumerate() {
    let sample = volume.get(offset + *corner * stride);
    densities[i] = sample;
    if f32::from(sample) < config.isolevel {
      flag |= 1 << i;
    }
  }

  // Uniformly inside or outside: nothing crosses this cell.
  if flag == 0 || flag == 0xFF {
    return;
  }

  // Negative-direction neighbors that exist within this chunk's cube
  // grid; vertex reuse is only legal from cells already visited.
  let direction_mask =
    (cell.x > 0) as u8 | ((cell.y > 0) as u8) << 1 | ((cell.z > 0) as u8) << 2;

  let mut normals = [Vec3A::ZERO; 8];
  for (i, corner) in CORNER_OFFSETS.iter().enumerate() {
    normals[i] = corner_normal(volume, offset + *corner * stride);
  }

  let samples = CellSamples {
    offset,
    stride,
    densities,
    normals,
  };

  let mut resolved = [-1i32; 12];
  for triangle in cell_triangles(flag, cell) {
    for edge in triangle.edges {
      let edge = edge as usize;
      if resolved[edge] < 0 {
        resolved[edge] =
          resolve_edge_vertex(&samples, edge, cell, direction_mask, config, cache, mesh) as i32;
      }
      mesh.indices.push(resolved[edge] as u32);
    }
  }
}

/// Gradient-estimated normal at a lattice point: central difference of the
/// neighboring samples along each axis, normalized. Points outward (from
/// negative/inside toward positive/outside).
#[inline]
fn corner_normal<V: ScalarVolume>(volume: &V, p: IVec3) -> Vec3A {
  let gradient = Vec3A::new(
    f32::from(volume.get(p + IVec3::X)) - f32::from(volume.get(p - IVec3::X)),
    f32::from(volume.get(p + IVec3::Y)) - f32::from(volume.get(p - IVec3::Y)),
    f32::from(volume.get(p + IVec3::Z)) - f32::from(volume.get(p - IVec3::Z)),
  ) * 0.5;
  gradient.normalize_or_zero()
}

/// Produce the mesh vertex index for `edge`, reusing a neighbor cell's
/// vertex through the cache when the edge is shared, otherwise
/// interpolating a new vertex/normal pair.
fn resolve_edge_vertex(
  samples: &CellSamples,
  edge: usize,
  cell: IVec3,
  direction_mask: u8,
  config: &MeshConfig,
  cache: &mut VertexDedupCache,
  mesh: &mut IsosurfaceMesh,
) -> u32 {
  let [v0, v1] = EDGE_CORNERS[edge];
  debug_assert!(v1 > v0, "edge corners out of canonical order");
  let reuse = &EDGE_REUSE[edge];

  if config.use_cache
    && reuse.direction != REUSE_SELF
    && reuse.direction & direction_mask == reuse.direction
  {
    if let Some(index) = cache.reuse(cell, reuse.direction, reuse.slot) {
      return index;
    }
  }

  let d0 = f32::from(samples.densities[v0 as usize]) - config.isolevel;
  let d1 = f32::from(samples.densities[v1 as usize]) - config.isolevel;
  // Fixed-point crossing parameter. The crossing guarantees the two
  // densities straddle the isolevel, so the denominator is never zero.
  // Both cells sharing the edge see the same canonical (d0, d1) pair, so
  // the result is bit-identical from either side.
  let alpha = (d1 * ALPHA_ONE as f32 / (d1 - d0)).round() as i32;
  let inverse = ALPHA_ONE - alpha;

  let p0 = (samples.offset + CORNER_OFFSETS[v0 as usize] * samples.stride).as_vec3a();
  let p1 = (samples.offset + CORNER_OFFSETS[v1 as usize] * samples.stride).as_vec3a();
  let position = (p0 * alpha as f32 + p1 * inverse as f32) * (1.0 / ALPHA_ONE as f32);

  let n0 = samples.normals[v0 as usize];
  let n1 = samples.normals[v1 as usize];
  let normal = (n0 * alpha as f32 + n1 * inverse as f32).normalize_or_zero();

  let index = mesh.push_vertex(position, normal);
  if config.use_cache && reuse.direction == REUSE_SELF {
    cache.store(cell, reuse.slot, index);
  }
  index
}

#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;
