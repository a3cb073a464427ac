//! Precomputed cell tables for marching-cubes polygonization.
//!
//! # Cube Topology
//!
//! ```text
//!       6──────7         Corners (binary ZYX):
//!      /│     /│           0=(0,0,0)  1=(1,0,0)  2=(0,1,0)  3=(1,1,0)
//!     4─┼────5 │           4=(0,0,1)  5=(1,0,1)  6=(0,1,1)  7=(1,1,1)
//!     │ 2────┼─3
//!     │/     │/          +Y
//!     0──────1            │  +Z
//!                         │ /
//!                         └───+X
//! ```
//!
//! # Edge Layout
//!
//! ```text
//! 12 edges total (4 per axis):
//!
//! X-axis edges (parallel to X):
//!   Edge 0:  [0,1] at Y=0, Z=0    Edge 8:  [4,5] at Y=0, Z=1
//!   Edge 5:  [2,3] at Y=1, Z=0    Edge 11: [6,7] at Y=1, Z=1
//!
//! Y-axis edges (parallel to Y):
//!   Edge 1:  [0,2] at X=0, Z=0    Edge 9:  [4,6] at X=0, Z=1
//!   Edge 3:  [1,3] at X=1, Z=0    Edge 10: [5,7] at X=1, Z=1
//!
//! Z-axis edges (parallel to Z):
//!   Edge 2:  [0,4] at X=0, Y=0    Edge 6:  [2,6] at X=0, Y=1
//!   Edge 4:  [1,5] at X=1, Y=0    Edge 7:  [3,7] at X=1, Y=1
//! ```
//!
//! The 8-bit corner flag has bit `v` set when corner `v` is inside the
//! solid. [`EDGE_TABLE`] maps a flag to the 12-bit set of crossed edges;
//! [`TRI_TABLE`] maps it to the triangle fan over those edges (the 15
//! topologically distinct cases and their rotations/reflections, 256
//! entries). Triangles wind counter-clockwise viewed from outside the
//! solid, so geometric face normals agree with the outward density
//! gradient.

use glam::IVec3;

/// Offsets of the 8 cube corners relative to a cell's origin.
/// Corner index bits are ZYX: bit 0 = +X, bit 1 = +Y, bit 2 = +Z.
pub const CORNER_OFFSETS: [IVec3; 8] = [
  IVec3::new(0, 0, 0),
  IVec3::new(1, 0, 0),
  IVec3::new(0, 1, 0),
  IVec3::new(1, 1, 0),
  IVec3::new(0, 0, 1),
  IVec3::new(1, 0, 1),
  IVec3::new(0, 1, 1),
  IVec3::new(1, 1, 1),
];

/// Edge endpoint corner indices, ordered so the second corner is the
/// geometrically greater endpoint along the edge's axis (with ZYX corner
/// numbering that is also strict index order, `v1 > v0`). Interpolation
/// relies on this order being canonical: two cells sharing an edge compute
/// the crossing from identical endpoints.
pub const EDGE_CORNERS: [[u8; 2]; 12] = [
  [0, 1], // Edge 0:  X axis at Y=0, Z=0
  [0, 2], // Edge 1:  Y axis at X=0, Z=0
  [0, 4], // Edge 2:  Z axis at X=0, Y=0
  [1, 3], // Edge 3:  Y axis at X=1, Z=0
  [1, 5], // Edge 4:  Z axis at X=1, Y=0
  [2, 3], // Edge 5:  X axis at Y=1, Z=0
  [2, 6], // Edge 6:  Z axis at X=0, Y=1
  [3, 7], // Edge 7:  Z axis at X=1, Y=1
  [4, 5], // Edge 8:  X axis at Y=0, Z=1
  [4, 6], // Edge 9:  Y axis at X=0, Z=1
  [5, 7], // Edge 10: Y axis at X=1, Z=1
  [6, 7], // Edge 11: X axis at Y=1, Z=1
];

/// Precomputed edge table.
/// Index: 8-bit corner flag (which corners are inside)
/// Value: 12-bit edge mask (which edges have crossings)
///
/// An edge has a crossing if exactly one of its endpoint corners is
/// inside.
pub const EDGE_TABLE: [u16; 256] = generate_edge_table();

const fn generate_edge_table() -> [u16; 256] {
  let mut table = [0u16; 256];
  let mut corner_flag = 0usize;

  while corner_flag < 256 {
    let mut edge_mask = 0u16;
    let mut edge = 0;

    while edge < 12 {
      let c0 = EDGE_CORNERS[edge][0] as usize;
      let c1 = EDGE_CORNERS[edge][1] as usize;

      let inside0 = (corner_flag >> c0) & 1;
      let inside1 = (corner_flag >> c1) & 1;

      if inside0 != inside1 {
        edge_mask |= 1 << edge;
      }

      edge += 1;
    }

    table[corner_flag] = edge_mask;
    corner_flag += 1;
  }

  table
}

/// Direction code marking an edge whose vertex is created (and cached) by
/// the current cell rather than reused from a neighbor.
pub const REUSE_SELF: u8 = 8;

/// Vertex-sharing metadata for one cube edge: which preceding cell owns
/// the edge's vertex and which cache slot holds it.
///
/// `direction` bits name the negative steps to the owning cell (bit 0 =
/// x-1, bit 1 = y-1, bit 2 = z-1), or [`REUSE_SELF`] when the current cell
/// owns the edge. `slot` is 1/2/3 for the owner's x/y/z self edge; slot 0
/// is reserved.
#[derive(Clone, Copy, Debug)]
pub struct EdgeReuse {
  pub direction: u8,
  pub slot: u8,
}

/// Per-edge reuse table, derived from [`EDGE_CORNERS`]: an edge is owned
/// by the unique cell for which it touches the maximal corner, every other
/// cell containing it reaches that owner by stepping -1 along the axes
/// where the edge sits at offset 0.
pub const EDGE_REUSE: [EdgeReuse; 12] = generate_edge_reuse();

const fn generate_edge_reuse() -> [EdgeReuse; 12] {
  let mut table = [EdgeReuse {
    direction: 0,
    slot: 0,
  }; 12];
  let mut edge = 0;

  while edge < 12 {
    let c0 = EDGE_CORNERS[edge][0];
    let c1 = EDGE_CORNERS[edge][1];
    let axis_bit = c0 ^ c1;

    let mut direction = 0u8;
    let mut axis = 0;
    while axis < 3 {
      let bit = 1u8 << axis;
      if bit != axis_bit && c0 & bit == 0 {
        direction |= bit;
      }
      axis += 1;
    }
    if direction == 0 {
      direction = REUSE_SELF;
    }

    table[edge] = EdgeReuse {
      direction,
      slot: axis_bit.trailing_zeros() as u8 + 1,
    };
    edge += 1;
  }

  table
}

/// Triangulation table: for each corner flag, up to 5 triangles as edge
/// index triples, -1 terminated.
pub const TRI_TABLE: [[i8; 16]; 256] = [
  [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [0, 1, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [0, 4, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [3, 1, 2, 4, 3, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [1, 5, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [0, 5, 6, 2, 0, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [3, 0, 4, 5, 6, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [3, 5, 6, 3, 6, 4, 4, 6, 2, -1, -1, -1, -1, -1, -1, -1],
  [3, 7, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [0, 1, 2, 3, 7, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [4, 7, 5, 0, 4, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [5, 1, 2, 5, 2, 7, 7, 2, 4, -1, -1, -1, -1, -1, -1, -1],
  [1, 3, 7, 6, 1, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [0, 3, 7, 0, 7, 2, 2, 7, 6, -1, -1, -1, -1, -1, -1, -1],
  [1, 0, 4, 1, 4, 6, 6, 4, 7, -1, -1, -1, -1, -1, -1, -1],
  [4, 7, 2, 7, 6, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [8, 2, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [8, 0, 1, 9, 8, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [0, 4, 3, 2, 9, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [8, 4, 3, 8, 3, 9, 9, 3, 1, -1, -1, -1, -1, -1, -1, -1],
  [2, 9, 8, 1, 5, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [6, 9, 8, 6, 8, 5, 5, 8, 0, -1, -1, -1, -1, -1, -1, -1],
  [4, 3, 0, 2, 9, 8, 5, 6, 1, -1, -1, -1, -1, -1, -1, -1],
  [8, 6, 9, 4, 6, 8, 4, 5, 6, 4, 3, 5, -1, -1, -1, -1],
  [3, 7, 5, 2, 9, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [1, 9, 8, 1, 8, 0, 3, 7, 5, -1, -1, -1, -1, -1, -1, -1],
  [4, 7, 5, 4, 5, 0, 2, 9, 8, -1, -1, -1, -1, -1, -1, -1],
  [5, 4, 7, 5, 9, 4, 5, 1, 9, 9, 8, 4, -1, -1, -1, -1],
  [1, 3, 7, 1, 7, 6, 9, 8, 2, -1, -1, -1, -1, -1, -1, -1],
  [3, 7, 6, 3, 6, 8, 3, 8, 0, 9, 8, 6, -1, -1, -1, -1],
  [8, 2, 9, 4, 6, 0, 4, 7, 6, 6, 1, 0, -1, -1, -1, -1],
  [8, 6, 9, 8, 4, 6, 4, 7, 6, -1, -1, -1, -1, -1, -1, -1],
  [4, 8, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [4, 8, 10, 0, 1, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [0, 8, 10, 3, 0, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [2, 8, 10, 2, 10, 1, 1, 10, 3, -1, -1, -1, -1, -1, -1, -1],
  [4, 8, 10, 5, 6, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [0, 5, 6, 0, 6, 2, 8, 10, 4, -1, -1, -1, -1, -1, -1, -1],
  [0, 8, 10, 0, 10, 3, 5, 6, 1, -1, -1, -1, -1, -1, -1, -1],
  [5, 10, 3, 5, 2, 10, 5, 6, 2, 8, 10, 2, -1, -1, -1, -1],
  [3, 7, 5, 4, 8, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [1, 2, 0, 3, 7, 5, 8, 10, 4, -1, -1, -1, -1, -1, -1, -1],
  [10, 7, 5, 10, 5, 8, 8, 5, 0, -1, -1, -1, -1, -1, -1, -1],
  [5, 10, 7, 1, 10, 5, 1, 8, 10, 1, 2, 8, -1, -1, -1, -1],
  [7, 6, 1, 7, 1, 3, 4, 8, 10, -1, -1, -1, -1, -1, -1, -1],
  [8, 10, 4, 0, 3, 2, 2, 3, 7, 2, 7, 6, -1, -1, -1, -1],
  [10, 0, 8, 10, 6, 0, 10, 7, 6, 6, 1, 0, -1, -1, -1, -1],
  [10, 2, 8, 10, 7, 2, 7, 6, 2, -1, -1, -1, -1, -1, -1, -1],
  [4, 2, 9, 10, 4, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [4, 0, 1, 4, 1, 10, 10, 1, 9, -1, -1, -1, -1, -1, -1, -1],
  [0, 2, 9, 0, 9, 3, 3, 9, 10, -1, -1, -1, -1, -1, -1, -1],
  [3, 1, 10, 1, 9, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [9, 10, 4, 9, 4, 2, 1, 5, 6, -1, -1, -1, -1, -1, -1, -1],
  [4, 9, 10, 4, 5, 9, 4, 0, 5, 5, 6, 9, -1, -1, -1, -1],
  [5, 6, 1, 0, 2, 3, 3, 2, 9, 3, 9, 10, -1, -1, -1, -1],
  [6, 3, 5, 6, 9, 3, 9, 10, 3, -1, -1, -1, -1, -1, -1, -1],
  [4, 2, 9, 4, 9, 10, 7, 5, 3, -1, -1, -1, -1, -1, -1, -1],
  [7, 5, 3, 4, 0, 10, 10, 0, 1, 10, 1, 9, -1, -1, -1, -1],
  [2, 5, 0, 2, 10, 5, 2, 9, 10, 7, 5, 10, -1, -1, -1, -1],
  [5, 10, 7, 5, 1, 10, 1, 9, 10, -1, -1, -1, -1, -1, -1, -1],
  [4, 2, 10, 2, 9, 10, 7, 1, 3, 7, 6, 1, -1, -1, -1, -1],
  [10, 0, 9, 10, 4, 0, 9, 0, 6, 3, 7, 0, 6, 0, 7, -1],
  [6, 0, 7, 6, 1, 0, 7, 0, 10, 2, 9, 0, 10, 0, 9, -1],
  [6, 10, 7, 9, 10, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [9, 6, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [1, 2, 0, 6, 11, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [0, 4, 3, 6, 11, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [2, 4, 3, 2, 3, 1, 6, 11, 9, -1, -1, -1, -1, -1, -1, -1],
  [9, 1, 5, 11, 9, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [9, 2, 0, 9, 0, 11, 11, 0, 5, -1, -1, -1, -1, -1, -1, -1],
  [5, 11, 9, 5, 9, 1, 0, 4, 3, -1, -1, -1, -1, -1, -1, -1],
  [3, 5, 11, 3, 11, 2, 3, 2, 4, 2, 11, 9, -1, -1, -1, -1],
  [7, 5, 3, 11, 9, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [3, 7, 5, 1, 2, 0, 11, 9, 6, -1, -1, -1, -1, -1, -1, -1],
  [5, 0, 4, 5, 4, 7, 11, 9, 6, -1, -1, -1, -1, -1, -1, -1],
  [11, 9, 6, 5, 1, 7, 7, 1, 2, 7, 2, 4, -1, -1, -1, -1],
  [7, 11, 9, 7, 9, 3, 3, 9, 1, -1, -1, -1, -1, -1, -1, -1],
  [7, 11, 9, 3, 7, 9, 3, 9, 2, 3, 2, 0, -1, -1, -1, -1],
  [0, 9, 1, 0, 7, 9, 0, 4, 7, 11, 9, 7, -1, -1, -1, -1],
  [9, 7, 11, 9, 2, 7, 2, 4, 7, -1, -1, -1, -1, -1, -1, -1],
  [11, 8, 2, 6, 11, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [1, 6, 11, 1, 11, 0, 0, 11, 8, -1, -1, -1, -1, -1, -1, -1],
  [2, 6, 11, 2, 11, 8, 4, 3, 0, -1, -1, -1, -1, -1, -1, -1],
  [4, 11, 8, 4, 1, 11, 4, 3, 1, 6, 11, 1, -1, -1, -1, -1],
  [2, 1, 5, 2, 5, 8, 8, 5, 11, -1, -1, -1, -1, -1, -1, -1],
  [0, 5, 8, 8, 5, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [3, 0, 4, 5, 8, 1, 5, 11, 8, 8, 2, 1, -1, -1, -1, -1],
  [3, 8, 4, 3, 5, 8, 5, 11, 8, -1, -1, -1, -1, -1, -1, -1],
  [11, 8, 2, 11, 2, 6, 5, 3, 7, -1, -1, -1, -1, -1, -1, -1],
  [3, 7, 5, 1, 6, 0, 0, 6, 11, 0, 11, 8, -1, -1, -1, -1],
  [8, 2, 6, 8, 6, 11, 0, 4, 5, 5, 4, 7, -1, -1, -1, -1],
  [7, 1, 4, 7, 5, 1, 4, 1, 8, 6, 11, 1, 8, 1, 11, -1],
  [2, 1, 3, 2, 3, 11, 2, 11, 8, 11, 3, 7, -1, -1, -1, -1],
  [7, 0, 3, 7, 11, 0, 11, 8, 0, -1, -1, -1, -1, -1, -1, -1],
  [8, 1, 11, 8, 2, 1, 11, 1, 7, 0, 4, 1, 7, 1, 4, -1],
  [7, 8, 4, 11, 8, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [8, 10, 4, 9, 6, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [0, 1, 2, 8, 10, 4, 6, 11, 9, -1, -1, -1, -1, -1, -1, -1],
  [10, 3, 0, 10, 0, 8, 9, 6, 11, -1, -1, -1, -1, -1, -1, -1],
  [6, 11, 9, 2, 8, 1, 1, 8, 10, 1, 10, 3, -1, -1, -1, -1],
  [9, 1, 5, 9, 5, 11, 10, 4, 8, -1, -1, -1, -1, -1, -1, -1],
  [4, 8, 10, 0, 11, 2, 0, 5, 11, 11, 9, 2, -1, -1, -1, -1],
  [1, 5, 11, 1, 11, 9, 3, 0, 10, 10, 0, 8, -1, -1, -1, -1],
  [11, 2, 5, 11, 9, 2, 5, 2, 3, 8, 10, 2, 3, 2, 10, -1],
  [4, 8, 10, 7, 5, 3, 9, 6, 11, -1, -1, -1, -1, -1, -1, -1],
  [11, 9, 6, 3, 7, 5, 0, 1, 2, 8, 10, 4, -1, -1, -1, -1],
  [9, 6, 11, 10, 7, 8, 8, 7, 5, 8, 5, 0, -1, -1, -1, -1],
  [1, 2, 8, 1, 8, 10, 1, 10, 5, 7, 5, 10, 6, 11, 9, -1],
  [4, 8, 10, 7, 11, 3, 3, 11, 9, 3, 9, 1, -1, -1, -1, -1],
  [3, 7, 11, 3, 11, 9, 3, 9, 0, 2, 0, 9, 4, 8, 10, -1],
  [8, 7, 0, 8, 10, 7, 0, 7, 1, 11, 9, 7, 1, 7, 9, -1],
  [9, 7, 11, 9, 2, 7, 10, 7, 8, 8, 7, 2, -1, -1, -1, -1],
  [11, 10, 4, 11, 4, 6, 6, 4, 2, -1, -1, -1, -1, -1, -1, -1],
  [1, 6, 11, 0, 1, 11, 0, 11, 10, 0, 10, 4, -1, -1, -1, -1],
  [0, 2, 6, 0, 6, 10, 0, 10, 3, 10, 6, 11, -1, -1, -1, -1],
  [11, 1, 6, 11, 10, 1, 10, 3, 1, -1, -1, -1, -1, -1, -1, -1],
  [10, 4, 2, 10, 2, 5, 10, 5, 11, 1, 5, 2, -1, -1, -1, -1],
  [4, 11, 10, 4, 0, 11, 0, 5, 11, -1, -1, -1, -1, -1, -1, -1],
  [3, 2, 10, 3, 0, 2, 10, 2, 11, 1, 5, 2, 11, 2, 5, -1],
  [3, 11, 10, 5, 11, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [3, 7, 5, 4, 6, 10, 4, 2, 6, 6, 11, 10, -1, -1, -1, -1],
  [0, 1, 6, 0, 6, 11, 0, 11, 4, 10, 4, 11, 3, 7, 5, -1],
  [6, 10, 2, 6, 11, 10, 2, 10, 0, 7, 5, 10, 0, 10, 5, -1],
  [11, 1, 6, 11, 10, 1, 5, 1, 7, 7, 1, 10, -1, -1, -1, -1],
  [3, 11, 1, 3, 7, 11, 1, 11, 2, 10, 4, 11, 2, 11, 4, -1],
  [7, 0, 3, 7, 11, 0, 4, 0, 10, 10, 0, 11, -1, -1, -1, -1],
  [0, 2, 1, 10, 7, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [7, 11, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [7, 10, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [0, 1, 2, 10, 11, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [4, 3, 0, 10, 11, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [3, 1, 2, 3, 2, 4, 10, 11, 7, -1, -1, -1, -1, -1, -1, -1],
  [5, 6, 1, 7, 10, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [6, 2, 0, 6, 0, 5, 7, 10, 11, -1, -1, -1, -1, -1, -1, -1],
  [0, 4, 3, 5, 6, 1, 10, 11, 7, -1, -1, -1, -1, -1, -1, -1],
  [10, 11, 7, 3, 5, 4, 4, 5, 6, 4, 6, 2, -1, -1, -1, -1],
  [3, 10, 11, 5, 3, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [3, 10, 11, 3, 11, 5, 1, 2, 0, -1, -1, -1, -1, -1, -1, -1],
  [4, 10, 11, 4, 11, 0, 0, 11, 5, -1, -1, -1, -1, -1, -1, -1],
  [10, 2, 4, 10, 5, 2, 10, 11, 5, 1, 2, 5, -1, -1, -1, -1],
  [11, 6, 1, 11, 1, 10, 10, 1, 3, -1, -1, -1, -1, -1, -1, -1],
  [0, 6, 2, 0, 10, 6, 0, 3, 10, 10, 11, 6, -1, -1, -1, -1],
  [1, 11, 6, 0, 11, 1, 0, 10, 11, 0, 4, 10, -1, -1, -1, -1],
  [11, 4, 10, 11, 6, 4, 6, 2, 4, -1, -1, -1, -1, -1, -1, -1],
  [10, 11, 7, 8, 2, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [8, 0, 1, 8, 1, 9, 11, 7, 10, -1, -1, -1, -1, -1, -1, -1],
  [3, 0, 4, 10, 11, 7, 2, 9, 8, -1, -1, -1, -1, -1, -1, -1],
  [7, 10, 11, 3, 9, 4, 3, 1, 9, 9, 8, 4, -1, -1, -1, -1],
  [1, 5, 6, 9, 8, 2, 7, 10, 11, -1, -1, -1, -1, -1, -1, -1],
  [10, 11, 7, 8, 5, 9, 8, 0, 5, 5, 6, 9, -1, -1, -1, -1],
  [0, 4, 3, 8, 2, 9, 5, 6, 1, 10, 11, 7, -1, -1, -1, -1],
  [4, 3, 5, 4, 5, 6, 4, 6, 8, 9, 8, 6, 10, 11, 7, -1],
  [11, 5, 3, 11, 3, 10, 8, 2, 9, -1, -1, -1, -1, -1, -1, -1],
  [3, 10, 5, 10, 11, 5, 1, 8, 0, 1, 9, 8, -1, -1, -1, -1],
  [2, 9, 8, 4, 10, 0, 0, 10, 11, 0, 11, 5, -1, -1, -1, -1],
  [9, 4, 1, 9, 8, 4, 1, 4, 5, 10, 11, 4, 5, 4, 11, -1],
  [2, 9, 8, 1, 10, 6, 1, 3, 10, 10, 11, 6, -1, -1, -1, -1],
  [10, 6, 3, 10, 11, 6, 3, 6, 0, 9, 8, 6, 0, 6, 8, -1],
  [0, 4, 10, 0, 10, 11, 0, 11, 1, 6, 1, 11, 2, 9, 8, -1],
  [11, 4, 10, 11, 6, 4, 8, 4, 9, 9, 4, 6, -1, -1, -1, -1],
  [7, 4, 8, 11, 7, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [8, 11, 7, 8, 7, 4, 0, 1, 2, -1, -1, -1, -1, -1, -1, -1],
  [7, 3, 0, 7, 0, 11, 11, 0, 8, -1, -1, -1, -1, -1, -1, -1],
  [2, 3, 1, 2, 11, 3, 2, 8, 11, 11, 7, 3, -1, -1, -1, -1],
  [7, 4, 8, 7, 8, 11, 6, 1, 5, -1, -1, -1, -1, -1, -1, -1],
  [0, 5, 2, 5, 6, 2, 8, 7, 4, 8, 11, 7, -1, -1, -1, -1],
  [1, 5, 6, 0, 11, 3, 0, 8, 11, 11, 7, 3, -1, -1, -1, -1],
  [11, 3, 8, 11, 7, 3, 8, 3, 2, 5, 6, 3, 2, 3, 6, -1],
  [3, 4, 8, 3, 8, 5, 5, 8, 11, -1, -1, -1, -1, -1, -1, -1],
  [1, 2, 0, 3, 4, 5, 5, 4, 8, 5, 8, 11, -1, -1, -1, -1],
  [0, 8, 5, 8, 11, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [2, 5, 1, 2, 8, 5, 8, 11, 5, -1, -1, -1, -1, -1, -1, -1],
  [4, 8, 11, 4, 11, 1, 4, 1, 3, 6, 1, 11, -1, -1, -1, -1],
  [2, 3, 6, 2, 0, 3, 6, 3, 11, 4, 8, 3, 11, 3, 8, -1],
  [1, 11, 6, 1, 0, 11, 0, 8, 11, -1, -1, -1, -1, -1, -1, -1],
  [11, 2, 8, 6, 2, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [9, 11, 7, 9, 7, 2, 2, 7, 4, -1, -1, -1, -1, -1, -1, -1],
  [0, 1, 9, 0, 9, 7, 0, 7, 4, 11, 7, 9, -1, -1, -1, -1],
  [7, 9, 11, 3, 9, 7, 3, 2, 9, 3, 0, 2, -1, -1, -1, -1],
  [7, 9, 11, 7, 3, 9, 3, 1, 9, -1, -1, -1, -1, -1, -1, -1],
  [5, 6, 1, 7, 2, 11, 7, 4, 2, 2, 9, 11, -1, -1, -1, -1],
  [5, 9, 0, 5, 6, 9, 0, 9, 4, 11, 7, 9, 4, 9, 7, -1],
  [3, 0, 2, 3, 2, 9, 3, 9, 7, 11, 7, 9, 5, 6, 1, -1],
  [6, 3, 5, 6, 9, 3, 7, 3, 11, 11, 3, 9, -1, -1, -1, -1],
  [3, 11, 5, 3, 2, 11, 3, 4, 2, 2, 9, 11, -1, -1, -1, -1],
  [5, 4, 11, 5, 3, 4, 11, 4, 9, 0, 1, 4, 9, 4, 1, -1],
  [9, 0, 2, 9, 11, 0, 11, 5, 0, -1, -1, -1, -1, -1, -1, -1],
  [9, 5, 1, 11, 5, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [2, 11, 4, 2, 9, 11, 4, 11, 3, 6, 1, 11, 3, 11, 1, -1],
  [0, 3, 4, 6, 9, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [9, 0, 2, 9, 11, 0, 1, 0, 6, 6, 0, 11, -1, -1, -1, -1],
  [9, 11, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [6, 7, 10, 9, 6, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [6, 7, 10, 6, 10, 9, 2, 0, 1, -1, -1, -1, -1, -1, -1, -1],
  [10, 9, 6, 10, 6, 7, 3, 0, 4, -1, -1, -1, -1, -1, -1, -1],
  [7, 10, 9, 7, 9, 6, 4, 3, 2, 2, 3, 1, -1, -1, -1, -1],
  [5, 7, 10, 5, 10, 1, 1, 10, 9, -1, -1, -1, -1, -1, -1, -1],
  [2, 0, 5, 2, 5, 10, 2, 10, 9, 7, 10, 5, -1, -1, -1, -1],
  [4, 3, 0, 10, 1, 7, 10, 9, 1, 1, 5, 7, -1, -1, -1, -1],
  [4, 5, 2, 4, 3, 5, 2, 5, 9, 7, 10, 5, 9, 5, 10, -1],
  [6, 5, 3, 6, 3, 9, 9, 3, 10, -1, -1, -1, -1, -1, -1, -1],
  [0, 1, 2, 3, 9, 5, 3, 10, 9, 9, 6, 5, -1, -1, -1, -1],
  [4, 10, 9, 4, 9, 5, 4, 5, 0, 5, 9, 6, -1, -1, -1, -1],
  [9, 5, 10, 9, 6, 5, 10, 5, 4, 1, 2, 5, 4, 5, 2, -1],
  [3, 10, 1, 1, 10, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [0, 9, 2, 0, 3, 9, 3, 10, 9, -1, -1, -1, -1, -1, -1, -1],
  [4, 1, 0, 4, 10, 1, 10, 9, 1, -1, -1, -1, -1, -1, -1, -1],
  [4, 9, 2, 10, 9, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [10, 8, 2, 10, 2, 7, 7, 2, 6, -1, -1, -1, -1, -1, -1, -1],
  [10, 8, 0, 10, 0, 6, 10, 6, 7, 6, 0, 1, -1, -1, -1, -1],
  [0, 4, 3, 2, 7, 8, 2, 6, 7, 7, 10, 8, -1, -1, -1, -1],
  [7, 8, 6, 7, 10, 8, 6, 8, 1, 4, 3, 8, 1, 8, 3, -1],
  [5, 7, 10, 1, 5, 10, 1, 10, 8, 1, 8, 2, -1, -1, -1, -1],
  [10, 5, 7, 10, 8, 5, 8, 0, 5, -1, -1, -1, -1, -1, -1, -1],
  [1, 5, 7, 1, 7, 10, 1, 10, 2, 8, 2, 10, 0, 4, 3, -1],
  [10, 5, 7, 10, 8, 5, 3, 5, 4, 4, 5, 8, -1, -1, -1, -1],
  [5, 3, 10, 5, 10, 2, 5, 2, 6, 8, 2, 10, -1, -1, -1, -1],
  [0, 6, 8, 0, 1, 6, 8, 6, 10, 5, 3, 6, 10, 6, 3, -1],
  [0, 10, 5, 0, 4, 10, 5, 10, 6, 8, 2, 10, 6, 10, 2, -1],
  [4, 10, 8, 5, 1, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [2, 10, 8, 2, 1, 10, 1, 3, 10, -1, -1, -1, -1, -1, -1, -1],
  [0, 10, 8, 3, 10, 0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [2, 10, 8, 2, 1, 10, 4, 10, 0, 0, 10, 1, -1, -1, -1, -1],
  [4, 10, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [8, 9, 6, 8, 6, 4, 4, 6, 7, -1, -1, -1, -1, -1, -1, -1],
  [0, 1, 2, 8, 9, 4, 4, 9, 6, 4, 6, 7, -1, -1, -1, -1],
  [3, 6, 7, 3, 8, 6, 3, 0, 8, 9, 6, 8, -1, -1, -1, -1],
  [1, 8, 3, 1, 2, 8, 3, 8, 7, 9, 6, 8, 7, 8, 6, -1],
  [5, 7, 4, 5, 4, 9, 5, 9, 1, 9, 4, 8, -1, -1, -1, -1],
  [4, 9, 7, 4, 8, 9, 7, 9, 5, 2, 0, 9, 5, 9, 0, -1],
  [1, 7, 9, 1, 5, 7, 9, 7, 8, 3, 0, 7, 8, 7, 0, -1],
  [3, 5, 7, 2, 8, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [8, 9, 6, 4, 8, 6, 4, 6, 5, 4, 5, 3, -1, -1, -1, -1],
  [4, 8, 9, 4, 9, 6, 4, 6, 3, 5, 3, 6, 0, 1, 2, -1],
  [6, 8, 9, 6, 5, 8, 5, 0, 8, -1, -1, -1, -1, -1, -1, -1],
  [6, 8, 9, 6, 5, 8, 2, 8, 1, 1, 8, 5, -1, -1, -1, -1],
  [8, 3, 4, 8, 9, 3, 9, 1, 3, -1, -1, -1, -1, -1, -1, -1],
  [8, 3, 4, 8, 9, 3, 0, 3, 2, 2, 3, 9, -1, -1, -1, -1],
  [8, 1, 0, 9, 1, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [8, 9, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [4, 2, 7, 7, 2, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [1, 4, 0, 1, 6, 4, 6, 7, 4, -1, -1, -1, -1, -1, -1, -1],
  [0, 7, 3, 0, 2, 7, 2, 6, 7, -1, -1, -1, -1, -1, -1, -1],
  [1, 7, 3, 6, 7, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [5, 2, 1, 5, 7, 2, 7, 4, 2, -1, -1, -1, -1, -1, -1, -1],
  [4, 5, 7, 0, 5, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [5, 2, 1, 5, 7, 2, 0, 2, 3, 3, 2, 7, -1, -1, -1, -1],
  [3, 5, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [3, 6, 5, 3, 4, 6, 4, 2, 6, -1, -1, -1, -1, -1, -1, -1],
  [1, 4, 0, 1, 6, 4, 3, 4, 5, 5, 4, 6, -1, -1, -1, -1],
  [0, 6, 5, 2, 6, 0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [1, 6, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [3, 2, 1, 4, 2, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [0, 3, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [0, 2, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
  [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
];

#[cfg(test)]
#[path = "tables_test.rs"]
mod tables_test;
