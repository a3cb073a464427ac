//! OctreeNode - path-compressed sparse octree node, generic over payload.
//!
//! A node owns the coordinate-bit span `[start_depth, depth)`: all of its
//! descendants share the top `depth` bits of its representative point on
//! every axis. Children are selected by the octant bits at `depth` and own
//! their subtrees; splits are performed by the parent recursion on the
//! child slot, so no upward pointer is needed.

use glam::IVec3;

use crate::bits;

/// One node of a [`SparseOctree`](super::SparseOctree).
///
/// Depth runs 0..=32: depth 0 covers all of space, depth 32 addresses a
/// single lattice coordinate.
pub struct OctreeNode<T> {
  /// Representative coordinate; the prefix `[0, depth)` is canonical for
  /// the whole subtree.
  point: IVec3,
  /// Depth at which this node's bit span begins (its parent's depth).
  start_depth: u32,
  /// Depth of this node.
  depth: u32,
  value: Option<T>,
  children: [Option<Box<OctreeNode<T>>>; 8],
}

impl<T> OctreeNode<T> {
  fn leaf(point: IVec3, start_depth: u32, depth: u32, value: T) -> Self {
    Self {
      point,
      start_depth,
      depth,
      value: Some(value),
      children: std::array::from_fn(|_| None),
    }
  }

  /// Depth of this node (0 = root span start, 32 = single coordinate).
  pub fn depth(&self) -> u32 {
    self.depth
  }

  /// Level of distance: shallower depth = coarser detail.
  pub fn level_of_distance(&self) -> u32 {
    32 - self.depth
  }

  /// Edge length of the cubic region this node represents.
  pub fn size(&self) -> i64 {
    1i64 << self.level_of_distance()
  }

  /// Canonical position of this node's region: the representative point
  /// masked to the bits owned by the path down to `depth`.
  pub fn position(&self) -> IVec3 {
    if self.depth == 0 {
      return IVec3::ZERO;
    }
    let mask = bits::mask_range(0, self.depth - 1) as i32;
    IVec3::new(self.point.x & mask, self.point.y & mask, self.point.z & mask)
  }

  /// Payload stored at this node, if it was ever set at this depth.
  pub fn value(&self) -> Option<&T> {
    self.value.as_ref()
  }

  /// Whether any child slot is occupied.
  pub fn has_children(&self) -> bool {
    self.children.iter().any(|child| child.is_some())
  }

  /// The child in `octant`, if present.
  pub fn child(&self, octant: usize) -> Option<&OctreeNode<T>> {
    self.children[octant].as_deref()
  }

  /// Apply `op` to each present child; absent children are skipped.
  pub fn for_each_child<F: FnMut(&OctreeNode<T>)>(&self, mut op: F) {
    for child in self.children.iter().flatten() {
      op(child);
    }
  }

  /// Shared prefix length between this node's point and `coordinate` over
  /// at most `max_length` bits of the node's span.
  fn shared_prefix(&self, coordinate: IVec3, max_length: u32) -> u32 {
    let x = bits::equal_prefix_length(self.point.x, coordinate.x, self.start_depth, max_length);
    let y = bits::equal_prefix_length(self.point.y, coordinate.y, self.start_depth, max_length);
    let z = bits::equal_prefix_length(self.point.z, coordinate.z, self.start_depth, max_length);
    x.min(y).min(z)
  }

  /// Locate the value stored for `coordinate` at exactly `min_depth`.
  ///
  /// Absence is a normal outcome in a sparse tree: a path miss, a node
  /// whose span jumps past `min_depth`, or an intermediate node that never
  /// held a value all report `None`.
  pub(super) fn get(&self, coordinate: IVec3, min_depth: u32) -> Option<&T> {
    if self.depth > min_depth {
      // Path compression skipped over the requested depth; no node exists
      // there.
      return None;
    }
    let span = self.depth - self.start_depth;
    if self.shared_prefix(coordinate, span) < span {
      return None;
    }
    if self.depth == min_depth {
      return self.value.as_ref();
    }
    let octant = bits::octant_index(coordinate, self.depth);
    self.children[octant].as_deref()?.get(coordinate, min_depth)
  }

  /// Insert `value` for `coordinate` at `min_depth` into the subtree
  /// rooted at `slot`, splitting a node whose span diverges from the
  /// coordinate's path.
  pub(super) fn set_in(
    slot: &mut Option<Box<OctreeNode<T>>>,
    start_depth: u32,
    coordinate: IVec3,
    value: T,
    min_depth: u32,
  ) {
    let Some(node) = slot else {
      *slot = Some(Box::new(Self::leaf(coordinate, start_depth, min_depth, value)));
      return;
    };
    debug_assert_eq!(node.start_depth, start_depth);
    debug_assert!(min_depth >= start_depth);

    let span = node.depth - start_depth;
    let cap = span.min(min_depth - start_depth);
    let shared = node.shared_prefix(coordinate, cap);

    if shared == span {
      // The coordinate lies inside this node's subtree.
      if node.depth == min_depth {
        node.value = Some(value);
      } else {
        let octant = bits::octant_index(coordinate, node.depth);
        Self::set_in(&mut node.children[octant], node.depth, coordinate, value, min_depth);
      }
      return;
    }

    // The path diverges (or the target depth lands) inside this node's
    // span: insert an intermediate node at the divergence depth, with the
    // original subtree demoted to a child.
    let split_depth = start_depth + shared;
    let mut old = slot.take().expect("slot occupied");
    old.start_depth = split_depth;

    let mut mid = OctreeNode {
      point: coordinate,
      start_depth,
      depth: split_depth,
      value: None,
      children: std::array::from_fn(|_| None),
    };
    let old_octant = bits::octant_index(old.point, split_depth);
    mid.children[old_octant] = Some(old);

    if split_depth == min_depth {
      mid.value = Some(value);
    } else {
      let new_octant = bits::octant_index(coordinate, split_depth);
      debug_assert_ne!(new_octant, old_octant, "split without divergence");
      mid.children[new_octant] =
        Some(Box::new(Self::leaf(coordinate, split_depth, min_depth, value)));
    }
    *slot = Some(Box::new(mid));
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
