//! Core data types for isosurface extraction.

use glam::Vec3A;

/// Scalar density sample.
/// Negative = inside/solid, positive = outside/air at the default isolevel.
pub type Density = i8;

/// Configuration for isosurface extraction.
#[derive(Clone, Debug)]
pub struct MeshConfig {
  /// Scalar threshold separating inside from outside.
  /// A sample is inside the solid when `density < isolevel`.
  pub isolevel: f32,

  /// Reuse vertices shared between neighboring cells through the dedup
  /// cache. Disabling never changes topology, only whether shared vertices
  /// are literally the same index.
  pub use_cache: bool,

  /// Sampling stride scale factor. 1 = full detail; larger values sample
  /// every Nth lattice point. Must be >= 1.
  pub level_of_distance: i32,
}

impl Default for MeshConfig {
  fn default() -> Self {
    Self {
      isolevel: 0.0,
      use_cache: true,
      level_of_distance: 1,
    }
  }
}

impl MeshConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_isolevel(mut self, isolevel: f32) -> Self {
    self.isolevel = isolevel;
    self
  }

  pub fn with_cache(mut self, use_cache: bool) -> Self {
    self.use_cache = use_cache;
    self
  }

  pub fn with_level_of_distance(mut self, level_of_distance: i32) -> Self {
    self.level_of_distance = level_of_distance;
    self
  }
}

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  /// Create AABB from min/max corners.
  pub fn new(min: [f32; 3], max: [f32; 3]) -> Self {
    Self { min, max }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// The result of one isosurface extraction: parallel vertex position and
/// normal sequences plus a triangle index list (stride 3).
///
/// Invariant: every index is `< positions.len()` and
/// `indices.len() % 3 == 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct IsosurfaceMesh {
  /// Vertex positions in volume coordinates.
  pub positions: Vec<[f32; 3]>,

  /// Per-vertex normals (parallel to `positions`).
  pub normals: Vec<[f32; 3]>,

  /// Triangle vertex indices, three per triangle.
  pub indices: Vec<u32>,

  /// Bounding box encompassing all vertices.
  pub bounds: MinMaxAABB,
}

impl IsosurfaceMesh {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.positions.clear();
    self.normals.clear();
    self.indices.clear();
    self.bounds = MinMaxAABB::empty();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.positions.is_empty()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// Append a vertex/normal pair, returning its index.
  #[inline]
  pub fn push_vertex(&mut self, position: Vec3A, normal: Vec3A) -> u32 {
    let index = self.positions.len() as u32;
    let position = position.to_array();
    self.positions.push(position);
    self.normals.push(normal.to_array());
    self.bounds.encapsulate(position);
    index
  }
}

impl Default for IsosurfaceMesh {
  fn default() -> Self {
    Self {
      positions: Vec::new(),
      normals: Vec::new(),
      indices: Vec::new(),
      bounds: MinMaxAABB::empty(),
    }
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
