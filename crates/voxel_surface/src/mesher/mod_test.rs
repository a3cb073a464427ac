use glam::IVec3;

use super::*;
use crate::types::MeshConfig;
use crate::volume::SparseChunkedVolume;

/// Half-space `density(x, y, z) = z - 5` written over a margin wide enough
/// that every cell (and its normal taps) sees real samples.
fn halfspace_volume(chunk_size: i32) -> SparseChunkedVolume {
  let mut volume = SparseChunkedVolume::with_chunk_size(chunk_size);
  for x in -2..=chunk_size + 2 {
    for y in -2..=chunk_size + 2 {
      for z in -2..=chunk_size + 2 {
        volume.set(IVec3::new(x, y, z), (z - 5) as i8);
      }
    }
  }
  volume
}

/// Sphere of `radius` centered in a `chunk_size` chunk.
fn sphere_volume(chunk_size: i32, radius: f32) -> SparseChunkedVolume {
  let mut volume = SparseChunkedVolume::with_chunk_size(chunk_size);
  let center = chunk_size as f32 / 2.0;
  for x in -2..=chunk_size + 2 {
    for y in -2..=chunk_size + 2 {
      for z in -2..=chunk_size + 2 {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        let dz = z as f32 - center;
        let distance = (dx * dx + dy * dy + dz * dz).sqrt() - radius;
        let sample = (distance * 3.0).clamp(-127.0, 127.0) as i8;
        volume.set(IVec3::new(x, y, z), sample);
      }
    }
  }
  volume
}

#[test]
fn empty_volume_produces_no_mesh() {
  let volume = SparseChunkedVolume::with_chunk_size(8);
  let mesh = SurfaceExtractor::new(&volume).generate(IVec3::ZERO);

  assert!(mesh.is_empty());
  assert_eq!(mesh.triangle_count(), 0);
}

#[test]
fn solid_volume_produces_no_mesh() {
  let mut volume = SparseChunkedVolume::with_chunk_size(8);
  for x in -1..=9 {
    for y in -1..=9 {
      for z in -1..=9 {
        volume.set(IVec3::new(x, y, z), -1);
      }
    }
  }
  let mesh = SurfaceExtractor::new(&volume).generate(IVec3::ZERO);

  assert!(mesh.is_empty());
}

#[test]
fn single_inside_corner_yields_one_triangle() {
  let mut volume = SparseChunkedVolume::with_chunk_size(2);
  volume.set(IVec3::ZERO, -1);
  for corner in 1..8 {
    volume.set(
      IVec3::new(corner & 1, corner >> 1 & 1, corner >> 2 & 1),
      1,
    );
  }

  let mesh = SurfaceExtractor::new(&volume).generate(IVec3::ZERO);

  assert_eq!(mesh.triangle_count(), 1);
  assert_eq!(mesh.positions.len(), 3);

  // All three vertices sit halfway along the edges adjacent to corner 0.
  for position in &mesh.positions {
    let on_edge = position.iter().filter(|&&c| c == 0.5).count();
    let at_corner = position.iter().filter(|&&c| c == 0.0).count();
    assert_eq!((on_edge, at_corner), (1, 2), "unexpected vertex {position:?}");
  }
}

#[test]
fn halfspace_vertices_lie_on_the_plane() {
  let volume = halfspace_volume(8);
  let mesh = SurfaceExtractor::new(&volume).generate(IVec3::ZERO);

  assert!(!mesh.is_empty());
  // 8x8 cells in the crossing slice, two triangles each.
  assert_eq!(mesh.triangle_count(), 128);

  for position in &mesh.positions {
    assert_eq!(position[2], 5.0, "vertex off the plane: {position:?}");
  }
  for normal in &mesh.normals {
    assert!(normal[2] > 0.999, "normal not +z: {normal:?}");
    assert!(normal[0].abs() < 1e-6 && normal[1].abs() < 1e-6);
  }
}

#[test]
fn indices_are_valid_triangles() {
  let volume = sphere_volume(16, 6.0);
  let mesh = SurfaceExtractor::new(&volume).generate(IVec3::ZERO);

  assert!(!mesh.is_empty());
  assert!(mesh.bounds.is_valid());
  assert_eq!(mesh.indices.len() % 3, 0);
  for &index in &mesh.indices {
    assert!((index as usize) < mesh.positions.len());
  }
}

#[test]
fn extraction_is_idempotent() {
  let volume = sphere_volume(16, 6.0);
  let extractor = SurfaceExtractor::new(&volume);

  let first = extractor.generate(IVec3::ZERO);
  let second = extractor.generate(IVec3::ZERO);

  assert_eq!(first, second);
}

#[test]
fn cache_reuses_vertices_without_changing_topology() {
  let volume = sphere_volume(16, 6.0);

  let cached = SurfaceExtractor::new(&volume).generate(IVec3::ZERO);
  let uncached = SurfaceExtractor::with_config(&volume, MeshConfig::new().with_cache(false))
    .generate(IVec3::ZERO);

  assert_eq!(cached.triangle_count(), uncached.triangle_count());
  assert!(cached.positions.len() < uncached.positions.len());

  // Triangles resolve to identical geometry in the same emission order.
  let gather = |mesh: &crate::types::IsosurfaceMesh| -> Vec<[[f32; 3]; 3]> {
    mesh
      .indices
      .chunks_exact(3)
      .map(|t| {
        [
          mesh.positions[t[0] as usize],
          mesh.positions[t[1] as usize],
          mesh.positions[t[2] as usize],
        ]
      })
      .collect()
  };
  assert_eq!(gather(&cached), gather(&uncached));
}

#[test]
fn interior_seam_vertices_share_an_index() {
  let volume = halfspace_volume(8);

  let cached = SurfaceExtractor::new(&volume).generate(IVec3::ZERO);
  let uncached = SurfaceExtractor::with_config(&volume, MeshConfig::new().with_cache(false))
    .generate(IVec3::ZERO);

  // The lattice point (3, 3, 5) is shared by four interior cells: with
  // the cache it is emitted once, without it each cell emits its own
  // copy.
  let copies = |mesh: &crate::types::IsosurfaceMesh| {
    mesh
      .positions
      .iter()
      .filter(|p| **p == [3.0, 3.0, 5.0])
      .count()
  };
  assert_eq!(copies(&cached), 1);
  assert_eq!(copies(&uncached), 4);
}

#[test]
fn level_of_distance_scales_sampling() {
  // Plane at z = 6 sampled at stride 2: the 8-cell cube grid spans 16
  // lattice units.
  let mut volume = SparseChunkedVolume::with_chunk_size(8);
  for x in -2..=18 {
    for y in -2..=18 {
      for z in -2..=18 {
        volume.set(IVec3::new(x, y, z), (z - 6) as i8);
      }
    }
  }

  let config = MeshConfig::new().with_level_of_distance(2);
  let mesh = SurfaceExtractor::with_config(&volume, config).generate(IVec3::ZERO);

  assert!(!mesh.is_empty());
  for position in &mesh.positions {
    assert_eq!(position[2], 6.0, "vertex off the plane: {position:?}");
  }
}
