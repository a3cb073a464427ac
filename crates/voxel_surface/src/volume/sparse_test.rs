use glam::IVec3;

use super::*;

#[test]
fn write_then_read_round_trips() {
  let mut volume = SparseChunkedVolume::new();
  volume.set(IVec3::new(1, 2, 3), -4);
  volume.set(IVec3::new(63, 63, 63), 9);
  volume.set(IVec3::new(64, 0, 0), 5);

  assert_eq!(volume.get(IVec3::new(1, 2, 3)), -4);
  assert_eq!(volume.get(IVec3::new(63, 63, 63)), 9);
  assert_eq!(volume.get(IVec3::new(64, 0, 0)), 5);
}

#[test]
fn unwritten_coordinates_read_default() {
  let volume = SparseChunkedVolume::new();
  assert_eq!(volume.get(IVec3::ZERO), 0);
  assert_eq!(volume.get(IVec3::new(1000, -1000, 12345)), 0);
  assert_eq!(volume.chunk_count(), 0);
}

#[test]
fn write_allocates_covering_chunk() {
  let mut volume = SparseChunkedVolume::with_chunk_size(16);
  assert_eq!(volume.size(), 16);

  volume.set(IVec3::new(3, 3, 3), 1);
  assert_eq!(volume.chunk_count(), 1);
  assert!(volume.contains_chunk(IVec3::ZERO));

  // Same chunk: no new allocation.
  volume.set(IVec3::new(15, 0, 0), 2);
  assert_eq!(volume.chunk_count(), 1);

  // Next chunk over.
  volume.set(IVec3::new(16, 0, 0), 3);
  assert_eq!(volume.chunk_count(), 2);
  assert!(volume.contains_chunk(IVec3::new(16, 0, 0)));
}

#[test]
fn negative_coordinates_use_floor_division() {
  let mut volume = SparseChunkedVolume::with_chunk_size(64);
  assert_eq!(volume.chunk_origin(IVec3::new(-1, -64, -65)), IVec3::new(-64, -64, -128));

  volume.set(IVec3::new(-1, -5, -64), 7);
  assert_eq!(volume.get(IVec3::new(-1, -5, -64)), 7);
  assert!(volume.contains_chunk(IVec3::new(-64, -64, -64)));
}

#[test]
fn chunk_enumeration_matches_allocations() {
  let mut volume = SparseChunkedVolume::with_chunk_size(8);
  volume.set(IVec3::ZERO, 1);
  volume.set(IVec3::new(8, 0, 0), 1);
  volume.set(IVec3::new(0, 8, 0), 1);

  let mut origins: Vec<IVec3> = volume.chunk_origins().collect();
  origins.sort_by_key(|o| (o.x, o.y, o.z));
  assert_eq!(
    origins,
    vec![IVec3::ZERO, IVec3::new(0, 8, 0), IVec3::new(8, 0, 0)]
  );
  assert_eq!(volume.chunks().count(), 3);
  assert_eq!(volume.chunk_at(IVec3::ZERO).unwrap().origin(), IVec3::ZERO);
}
