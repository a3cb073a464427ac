use glam::IVec3;

use super::*;
use crate::volume::{ScalarVolume, SparseChunkedVolume};

#[test]
fn homogeneous_flags_have_no_triangles() {
  assert!(cell_triangles(0x00, IVec3::ZERO).is_empty());
  assert!(cell_triangles(0xFF, IVec3::ZERO).is_empty());
}

#[test]
fn triangles_carry_their_cell_coordinate() {
  let cell = IVec3::new(3, 4, 5);
  let triangles = cell_triangles(0x01, cell);

  assert_eq!(triangles.len(), 1);
  assert_eq!(triangles[0].cell, cell);
  let mut edges = triangles[0].edges;
  edges.sort();
  assert_eq!(edges, [0, 1, 2]);
}

#[test]
fn two_inside_corners_fan_two_triangles() {
  // Corners 0 and 1 share the bottom x edge.
  let triangles = cell_triangles(0x03, IVec3::ZERO);
  assert_eq!(triangles.len(), 2);
}

#[test]
fn corner_normal_follows_the_gradient() {
  let mut volume = SparseChunkedVolume::with_chunk_size(8);
  for x in -2..=4 {
    for y in -2..=4 {
      for z in -2..=4 {
        volume.set(IVec3::new(x, y, z), (x * 2) as i8);
      }
    }
  }

  let normal = corner_normal(&volume, IVec3::new(1, 1, 1));
  assert!((normal.x - 1.0).abs() < 1e-6);
  assert!(normal.y.abs() < 1e-6 && normal.z.abs() < 1e-6);
}

#[test]
fn boundary_cells_interpolate_against_default_samples() {
  // A lone solid sample: all six faces of its surrounding surface come
  // from crossings against unwritten (0, outside) neighbors.
  let mut volume = SparseChunkedVolume::with_chunk_size(2);
  volume.set(IVec3::ZERO, -2);

  let mut mesh = crate::types::IsosurfaceMesh::new();
  let mut cache = crate::mesher::VertexDedupCache::new(2);
  let config = crate::types::MeshConfig::default();

  polygonize_cell(&volume, &config, IVec3::ZERO, IVec3::ZERO, &mut cache, &mut mesh);

  assert_eq!(mesh.triangle_count(), 1);
  // d0 = -2, d1 = 0: the crossing sits on the outside corner.
  for position in &mesh.positions {
    let at_far_end = position.iter().filter(|&&c| c == 1.0).count();
    assert_eq!(at_far_end, 1, "unexpected vertex {position:?}");
  }
}
