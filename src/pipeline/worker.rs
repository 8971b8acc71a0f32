//! Tile worker loop.

use sepia_tone::ColorTransform;
use tracing::{debug, trace};

use super::compositor::Compositor;
use super::job::Job;
use super::queue::WorkQueue;
use crate::error::ConvertError;

/// What one worker did during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkerReport {
    pub worker: usize,
    pub jobs: usize,
    pub pixels: u64,
}

/// Drains jobs from a shared queue into a shared compositor.
///
/// The transform runs with no lock held; the queue lock is taken only to pop
/// and the compositor lock only to paste.
pub struct Worker<'a, T: ColorTransform> {
    id: usize,
    queue: &'a WorkQueue<Job>,
    compositor: &'a Compositor,
    transform: &'a T,
}

impl<'a, T: ColorTransform> Worker<'a, T> {
    pub fn new(
        id: usize,
        queue: &'a WorkQueue<Job>,
        compositor: &'a Compositor,
        transform: &'a T,
    ) -> Self {
        Self {
            id,
            queue,
            compositor,
            transform,
        }
    }

    /// Process jobs until the queue is observed empty.
    pub fn run(self) -> Result<WorkerReport, ConvertError> {
        let mut report = WorkerReport {
            worker: self.id,
            ..Default::default()
        };

        while let Some(Job { tile, mut pixels }) = self.queue.pop() {
            self.transform.apply_batch(pixels.pixels_mut());
            self.compositor.paste(&pixels, tile.left, tile.top)?;

            report.jobs += 1;
            report.pixels += tile.area();
            trace!(
                worker = self.id,
                left = tile.left,
                top = tile.top,
                width = tile.width,
                height = tile.height,
                "Tile composited"
            );
        }

        debug!(
            worker = self.id,
            jobs = report.jobs,
            pixels = report.pixels,
            "Worker finished"
        );
        Ok(report)
    }
}
