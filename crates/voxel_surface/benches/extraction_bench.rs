//! Benchmark chunk extraction on a sphere density field.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::IVec3;
use voxel_surface::{MeshConfig, ScalarVolume, SparseChunkedVolume, SurfaceExtractor};

/// Sphere of `radius` centered in a 64³ chunk, with an apron for normals.
fn sphere_volume(radius: f32) -> SparseChunkedVolume {
  let mut volume = SparseChunkedVolume::new();
  let size = SparseChunkedVolume::DEFAULT_CHUNK_SIZE;
  let center = size as f32 / 2.0;

  for x in -2..=size + 2 {
    for y in -2..=size + 2 {
      for z in -2..=size + 2 {
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

fn bench_extraction(c: &mut Criterion) {
  let volume = sphere_volume(24.0);

  c.bench_function("extract 64³ sphere chunk (cached)", |b| {
    let extractor = SurfaceExtractor::new(&volume);
    b.iter(|| black_box(extractor.generate(IVec3::ZERO)));
  });

  c.bench_function("extract 64³ sphere chunk (uncached)", |b| {
    let extractor =
      SurfaceExtractor::with_config(&volume, MeshConfig::new().with_cache(false));
    b.iter(|| black_box(extractor.generate(IVec3::ZERO)));
  });
}

criterion_group!(benches, bench_extraction);
criterion_main!(benches);
