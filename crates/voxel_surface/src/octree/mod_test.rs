use glam::IVec3;

use super::*;

#[test]
fn set_then_get_round_trips() {
  let mut tree = SparseOctree::new();
  assert!(tree.is_empty());

  let coord = IVec3::new(12, 34, 56);
  tree.set(coord, "chunk", 26);

  assert_eq!(tree.get(coord, 26), Some(&"chunk"));
  assert!(!tree.is_empty());
}

#[test]
fn unpopulated_depth_is_absent() {
  let mut tree = SparseOctree::new();
  let coord = IVec3::new(12, 34, 56);
  tree.set(coord, 1u32, 32);

  assert_eq!(tree.get(coord, 16), None);
  assert_eq!(tree.get(coord, 31), None);
  assert_eq!(tree.get(IVec3::new(13, 34, 56), 32), None);
}

#[test]
fn overwrite_at_same_path_and_depth() {
  let mut tree = SparseOctree::new();
  let coord = IVec3::new(7, 7, 7);
  tree.set(coord, 1u32, 30);
  tree.set(coord, 2u32, 30);

  assert_eq!(tree.get(coord, 30), Some(&2));
}

#[test]
fn diverging_coordinates_split_the_tree() {
  let mut tree = SparseOctree::new();
  // 4 = ...100 and 5 = ...101 diverge only at the last bit (depth 31).
  let a = IVec3::new(4, 0, 0);
  let b = IVec3::new(5, 0, 0);
  tree.set(a, "a", 32);
  tree.set(b, "b", 32);

  assert_eq!(tree.get(a, 32), Some(&"a"));
  assert_eq!(tree.get(b, 32), Some(&"b"));

  // The split created an intermediate node at the divergence depth with
  // both leaves as children.
  let root = tree.root().unwrap();
  assert_eq!(root.depth(), 31);
  assert_eq!(root.value(), None);
  let mut count = 0;
  root.for_each_child(|child| {
    assert_eq!(child.depth(), 32);
    count += 1;
  });
  assert_eq!(count, 2);
}

#[test]
fn set_inside_existing_span_splits_at_target_depth() {
  let mut tree = SparseOctree::new();
  let coord = IVec3::new(100, 200, 300);
  tree.set(coord, "fine", 32);
  tree.set(coord, "coarse", 16);

  assert_eq!(tree.get(coord, 32), Some(&"fine"));
  assert_eq!(tree.get(coord, 16), Some(&"coarse"));
  assert_eq!(tree.get(coord, 24), None);
}

#[test]
fn node_geometry_accessors() {
  let mut tree = SparseOctree::new();
  tree.set(IVec3::new(4, 0, 0), (), 32);
  tree.set(IVec3::new(5, 0, 0), (), 32);

  let root = tree.root().unwrap();
  assert_eq!(root.level_of_distance(), 1);
  assert_eq!(root.size(), 2);
  // 4 and 5 share the prefix 4 at depth 31.
  assert_eq!(root.position(), IVec3::new(4, 0, 0));

  let leaf = root.child(crate::bits::octant_index(IVec3::new(5, 0, 0), 31)).unwrap();
  assert_eq!(leaf.level_of_distance(), 0);
  assert_eq!(leaf.size(), 1);
  assert_eq!(leaf.position(), IVec3::new(5, 0, 0));
}

#[test]
fn negative_coordinates_index_through_sign_bits() {
  let mut tree = SparseOctree::new();
  let neg = IVec3::new(-1, -1, -1);
  let pos = IVec3::new(1, 1, 1);
  tree.set(neg, "neg", 32);
  tree.set(pos, "pos", 32);

  assert_eq!(tree.get(neg, 32), Some(&"neg"));
  assert_eq!(tree.get(pos, 32), Some(&"pos"));

  // Sign difference diverges at the very first bit.
  assert_eq!(tree.root().unwrap().depth(), 0);
}

#[test]
fn deep_and_shallow_entries_coexist() {
  let mut tree = SparseOctree::new();
  // A 64-aligned chunk addressed at its natural depth (32 - log2(64)).
  let chunk_depth = 32 - 6;
  tree.set(IVec3::new(64, 0, 0), "chunk-a", chunk_depth);
  tree.set(IVec3::new(128, 64, 0), "chunk-b", chunk_depth);
  tree.set(IVec3::new(64, 0, 0), "sample", 32);

  assert_eq!(tree.get(IVec3::new(64, 0, 0), chunk_depth), Some(&"chunk-a"));
  assert_eq!(tree.get(IVec3::new(128, 64, 0), chunk_depth), Some(&"chunk-b"));
  assert_eq!(tree.get(IVec3::new(64, 0, 0), 32), Some(&"sample"));
  // Coordinates inside chunk-a but off its representative path at the
  // chunk depth resolve to the same node.
  assert_eq!(tree.get(IVec3::new(65, 1, 1), chunk_depth), Some(&"chunk-a"));
}
