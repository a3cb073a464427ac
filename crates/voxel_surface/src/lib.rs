//! voxel_surface - chunked isosurface extraction for scalar density fields
//!
//! This crate turns a discretely sampled 3D density field into triangle
//! meshes, one per chunk, using cell-by-cell marching-cubes
//! polygonization with cross-cell vertex sharing.
//!
//! # Components
//!
//! - [`volume`]: the [`ScalarVolume`] capability plus its dense chunk and
//!   sparse chunked backings
//! - [`octree`]: generic sparse octree for addressing chunks and LOD
//!   nodes by coordinate and depth
//! - [`mesher`]: the cell polygonizer, its precomputed tables, the
//!   sliding vertex dedup cache, and the per-chunk [`SurfaceExtractor`]
//! - [`registry`]: the concurrency-safe mesh-per-chunk map
//! - [`queue`]: staged and background extraction driving
//!
//! # Example
//!
//! ```
//! use glam::IVec3;
//! use voxel_surface::{ChunkSurfaceRegistry, MeshConfig, ScalarVolume, SparseChunkedVolume};
//!
//! // Carve a small solid region into a sparse volume.
//! let mut volume = SparseChunkedVolume::with_chunk_size(8);
//! for x in 0..4 {
//!   for y in 0..4 {
//!     for z in 0..4 {
//!       volume.set(IVec3::new(x, y, z), -1);
//!     }
//!   }
//! }
//!
//! // Mesh every allocated chunk.
//! let registry = ChunkSurfaceRegistry::new();
//! registry.generate_all(&volume, &MeshConfig::default());
//!
//! let chunks = registry.read();
//! let mesh = &chunks[&IVec3::ZERO].mesh;
//! assert!(!mesh.is_empty());
//! assert_eq!(mesh.indices.len() % 3, 0);
//! ```

pub mod bits;
pub mod types;

// Scalar field storage
pub mod volume;
pub use volume::{DenseChunk, ScalarVolume, SparseChunkedVolume};

// Sparse octree spatial index for LOD addressing
pub mod octree;
pub use octree::{OctreeNode, SparseOctree};

// Cell polygonization and per-chunk extraction
pub mod mesher;
pub use mesher::SurfaceExtractor;

// Chunk orchestration
pub mod registry;
pub use registry::{generate_chunk, ChunkSurfaceRegistry, SurfaceChunk};

// Extraction staging
pub mod queue;
pub use queue::{BackgroundExtractor, ExtractionCompletion, ExtractionRequest, ExtractionStage};

// Re-export commonly used items
pub use types::{Density, IsosurfaceMesh, MeshConfig, MinMaxAABB};
