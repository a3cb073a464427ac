use glam::IVec3;

use super::*;

#[test]
fn bit_at_counts_from_msb() {
  assert_eq!(bit_at(i32::MIN, 0), 1);
  assert_eq!(bit_at(i32::MIN, 31), 0);
  assert_eq!(bit_at(1, 31), 1);
  assert_eq!(bit_at(1, 30), 0);
  assert_eq!(bit_at(-1, 0), 1);
  assert_eq!(bit_at(-1, 31), 1);
}

#[test]
fn equal_prefix_counts_leading_agreement() {
  // Identical values agree for the whole requested length.
  assert_eq!(equal_prefix_length(42, 42, 0, 32), 32);
  assert_eq!(equal_prefix_length(42, 42, 7, 10), 10);

  // 4 = ...100 and 5 = ...101 diverge only at bit 31.
  assert_eq!(equal_prefix_length(4, 5, 0, 32), 31);
  assert_eq!(equal_prefix_length(4, 5, 0, 16), 16);

  // A sign difference diverges immediately.
  assert_eq!(equal_prefix_length(-1, 0, 0, 32), 0);

  // Starting past the divergence point sees agreement again.
  assert_eq!(equal_prefix_length(0b1000, 0b0000, 29, 3), 3);

  assert_eq!(equal_prefix_length(1, 2, 0, 0), 0);
}

#[test]
fn octant_combines_axis_bits() {
  // Bit 31 is the least significant bit of each axis.
  assert_eq!(octant_index(IVec3::new(1, 0, 0), 31), 0b001);
  assert_eq!(octant_index(IVec3::new(0, 1, 0), 31), 0b010);
  assert_eq!(octant_index(IVec3::new(0, 0, 1), 31), 0b100);
  assert_eq!(octant_index(IVec3::new(1, 1, 1), 31), 0b111);
  assert_eq!(octant_index(IVec3::new(1, 1, 1), 30), 0b000);

  // Negative coordinates select through their sign bits.
  assert_eq!(octant_index(IVec3::new(-1, 0, -1), 0), 0b101);
}

#[test]
fn mask_range_covers_inclusive_bits() {
  assert_eq!(mask_range(0, 0), 0x8000_0000);
  assert_eq!(mask_range(0, 31), u32::MAX);
  assert_eq!(mask_range(0, 2), 0xE000_0000);
  assert_eq!(mask_range(4, 7), 0x0F00_0000);
  assert_eq!(mask_range(31, 31), 1);
  assert_eq!(mask_range(3, 2), 0);
}
