//! Staged and background chunk extraction.
//!
//! Two driving modes over the same pure [`generate_chunk`] worker:
//!
//! - [`ExtractionStage`] follows the Enqueue → Tick → Completions pattern:
//!   the caller decides when a batch runs, and the batch is processed in
//!   parallel via rayon.
//! - [`BackgroundExtractor`] is fire-and-forget: each submission runs on
//!   rayon's pool immediately and completions stream back over a channel,
//!   drained without blocking.

use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};
use glam::IVec3;
use rayon::prelude::*;
use web_time::Instant;

use crate::registry::{generate_chunk, SurfaceChunk};
use crate::types::MeshConfig;
use crate::volume::SparseChunkedVolume;

/// Request to extract one chunk of a shared volume snapshot.
///
/// The volume must not be mutated while requests against it are in
/// flight; terrain edits are serialized with extraction by the caller.
#[derive(Clone)]
pub struct ExtractionRequest {
  /// Unique identifier for this request.
  pub id: u64,
  /// Origin of the chunk to extract.
  pub origin: IVec3,
  /// Shared volume snapshot.
  pub volume: Arc<SparseChunkedVolume>,
  /// Extraction configuration.
  pub config: MeshConfig,
}

/// Completed chunk extraction.
pub struct ExtractionCompletion {
  /// Request ID this completion corresponds to.
  pub id: u64,
  /// The extracted chunk record.
  pub chunk: SurfaceChunk,
  /// Raw extraction time in microseconds.
  pub extract_time_us: u64,
}

fn run_request(request: ExtractionRequest) -> ExtractionCompletion {
  let start = Instant::now();
  let chunk = generate_chunk(&request.volume, &request.config, request.origin);
  ExtractionCompletion {
    id: request.id,
    chunk,
    extract_time_us: start.elapsed().as_micros() as u64,
  }
}

/// Batch extraction stage: Enqueue → Tick → Completions.
pub struct ExtractionStage {
  /// Pending requests waiting to be processed.
  pending: Vec<ExtractionRequest>,
  /// Completed results ready to be collected.
  completed: Vec<ExtractionCompletion>,
  /// Next request ID.
  next_id: u64,
}

impl Default for ExtractionStage {
  fn default() -> Self {
    Self::new()
  }
}

impl ExtractionStage {
  pub fn new() -> Self {
    Self {
      pending: Vec::new(),
      completed: Vec::new(),
      next_id: 0,
    }
  }

  /// Enqueue a chunk extraction, returning the assigned ID.
  pub fn enqueue(
    &mut self,
    origin: IVec3,
    volume: Arc<SparseChunkedVolume>,
    config: MeshConfig,
  ) -> u64 {
    let id = self.next_id;
    self.next_id += 1;

    self.pending.push(ExtractionRequest {
      id,
      origin,
      volume,
      config,
    });

    id
  }

  /// Process pending requests in parallel and move completions to output.
  /// Returns the number of requests processed this tick.
  pub fn tick(&mut self) -> usize {
    if self.pending.is_empty() {
      return 0;
    }

    let requests = std::mem::take(&mut self.pending);
    let count = requests.len();

    let completions: Vec<ExtractionCompletion> =
      requests.into_par_iter().map(run_request).collect();

    self.completed.extend(completions);
    count
  }

  /// Take all completed extractions.
  pub fn drain_completions(&mut self) -> Vec<ExtractionCompletion> {
    std::mem::take(&mut self.completed)
  }

  /// Number of pending requests.
  pub fn pending_count(&self) -> usize {
    self.pending.len()
  }

  /// Number of completed results waiting to be drained.
  pub fn completed_count(&self) -> usize {
    self.completed.len()
  }

  /// True when no work remains.
  pub fn is_idle(&self) -> bool {
    self.pending.is_empty() && self.completed.is_empty()
  }
}

/// Fire-and-forget extraction on rayon's thread pool with a completion
/// channel.
pub struct BackgroundExtractor {
  sender: Sender<ExtractionCompletion>,
  receiver: Receiver<ExtractionCompletion>,
  next_id: u64,
}

impl Default for BackgroundExtractor {
  fn default() -> Self {
    Self::new()
  }
}

impl BackgroundExtractor {
  pub fn new() -> Self {
    let (sender, receiver) = unbounded();
    Self {
      sender,
      receiver,
      next_id: 0,
    }
  }

  /// Submit a chunk extraction, returning the assigned ID. The work starts
  /// immediately on rayon's pool.
  pub fn submit(
    &mut self,
    origin: IVec3,
    volume: Arc<SparseChunkedVolume>,
    config: MeshConfig,
  ) -> u64 {
    let id = self.next_id;
    self.next_id += 1;

    let sender = self.sender.clone();
    rayon::spawn(move || {
      let completion = run_request(ExtractionRequest {
        id,
        origin,
        volume,
        config,
      });
      // The receiver half lives as long as this extractor; a send failure
      // just means the caller dropped it and the result is discarded.
      let _ = sender.send(completion);
    });

    id
  }

  /// Collect all completions that have arrived so far, without blocking.
  pub fn drain_completions(&self) -> Vec<ExtractionCompletion> {
    self.receiver.try_iter().collect()
  }
}

#[cfg(test)]
#[path = "queue_test.rs"]
mod queue_test;
