//! Tile-parallel conversion pipeline.
//!
//! [`Pipeline::run`] cuts the source into tiles, seeds a [`WorkQueue`] with
//! one [`Job`] per tile, and lets `threads` scoped [`Worker`]s drain it into a
//! shared [`Compositor`]. Joining the workers is the only barrier; once every
//! worker has returned the compositor holds the finished image.

mod compositor;
mod job;
mod queue;
mod worker;

pub use compositor::Compositor;
pub use job::Job;
pub use queue::WorkQueue;
pub use worker::{Worker, WorkerReport};

use std::path::Path;
use std::thread::{self, ScopedJoinHandle};
use std::time::{Duration, Instant};

use sepia_tone::{chunkify, uncovered_pixels, ColorTransform, EdgePolicy, Rgb, RgbBuffer, Sepia};
use tracing::{error, info, warn};

use crate::error::ConvertError;

/// Validated-at-run-time settings for one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Number of worker threads, at least 1
    pub threads: usize,
    /// Additional tile divisions per axis
    pub subdivs: u32,
    /// Initial color of the output buffer
    pub background: Rgb,
    /// Remainder strip handling
    pub edges: EdgePolicy,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            threads: 4,
            subdivs: 3,
            background: Rgb::BLACK,
            edges: EdgePolicy::Leave,
        }
    }
}

/// Bookkeeping from a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub tiles: usize,
    /// Pixels no tile covered (kept as background)
    pub uncovered_pixels: u64,
    pub workers: Vec<WorkerReport>,
    pub elapsed: Duration,
}

impl RunStats {
    pub fn jobs_processed(&self) -> usize {
        self.workers.iter().map(|w| w.jobs).sum()
    }
}

/// The finished image plus run statistics.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub image: RgbBuffer,
    pub stats: RunStats,
}

/// Converts images by fanning tiles out to a pool of worker threads.
pub struct Pipeline<T: ColorTransform = Sepia> {
    options: PipelineOptions,
    transform: T,
}

impl Pipeline<Sepia> {
    /// Sepia pipeline with the given options.
    pub fn new(options: PipelineOptions) -> Self {
        Self::with_transform(options, Sepia)
    }
}

impl<T: ColorTransform> Pipeline<T> {
    pub fn with_transform(options: PipelineOptions, transform: T) -> Self {
        Self { options, transform }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Convert an in-memory image.
    ///
    /// Configuration problems (zero threads, a grid finer than the image) are
    /// reported as [`ConvertError::InvalidConfiguration`] before any worker
    /// is spawned. A worker that fails or panics fails the whole run.
    pub fn run(&self, source: &RgbBuffer) -> Result<Conversion, ConvertError> {
        let opts = &self.options;
        let (width, height) = source.dimensions();

        if opts.threads == 0 {
            return Err(ConvertError::InvalidConfiguration(
                "thread count must be at least 1".to_string(),
            ));
        }

        let tiles = chunkify(width, height, opts.subdivs, opts.edges)
            .map_err(|e| ConvertError::InvalidConfiguration(e.to_string()))?;

        let uncovered = match opts.edges {
            EdgePolicy::Leave => uncovered_pixels(width, height, opts.subdivs),
            EdgePolicy::Extend => 0,
        };
        if uncovered > 0 {
            warn!(
                width,
                height,
                subdivs = opts.subdivs,
                uncovered,
                "Image is not divisible by the tile grid, remainder keeps the background color"
            );
        }

        let queue = WorkQueue::with_capacity(tiles.len());
        for tile in &tiles {
            queue.push(Job::from_source(source, *tile)?);
        }
        let compositor = Compositor::new(width, height, opts.background);

        info!(
            width,
            height,
            tiles = tiles.len(),
            threads = opts.threads,
            "Starting workers"
        );
        let started = Instant::now();
        let workers = self.dispatch(&queue, &compositor)?;
        let elapsed = started.elapsed();

        Ok(Conversion {
            image: compositor.into_inner(),
            stats: RunStats {
                tiles: tiles.len(),
                uncovered_pixels: uncovered,
                workers,
                elapsed,
            },
        })
    }

    /// Load `input`, convert it and write the result to `output`.
    ///
    /// The output format is checked before the input is read. Nothing is
    /// written if any step fails.
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<RunStats, ConvertError> {
        crate::io::output_format(output)?;

        let source = crate::io::load_image(input)?;
        info!(
            path = %input.display(),
            width = source.width(),
            height = source.height(),
            "Loaded image"
        );

        let Conversion { image, stats } = self.run(&source)?;

        crate::io::save_image(&image, output)?;
        info!(
            path = %output.display(),
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "Saved image"
        );
        Ok(stats)
    }

    /// Spawn the workers and wait for all of them.
    fn dispatch(
        &self,
        queue: &WorkQueue<Job>,
        compositor: &Compositor,
    ) -> Result<Vec<WorkerReport>, ConvertError> {
        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(self.options.threads);

            for id in 0..self.options.threads {
                let worker = Worker::new(id, queue, compositor, &self.transform);
                let spawned = thread::Builder::new()
                    .name(format!("sepia-worker-{id}"))
                    .spawn_scoped(scope, move || worker.run());

                match spawned {
                    Ok(handle) => handles.push(handle),
                    Err(e) => {
                        // Workers already running still drain the queue; wait for them
                        let _ = join_workers(handles);
                        return Err(ConvertError::Spawn(e));
                    }
                }
            }

            join_workers(handles)
        })
    }
}

/// Join every handle, then report the first failure if any.
fn join_workers(
    handles: Vec<ScopedJoinHandle<'_, Result<WorkerReport, ConvertError>>>,
) -> Result<Vec<WorkerReport>, ConvertError> {
    let mut reports = Vec::with_capacity(handles.len());
    let mut failure = None;

    for (id, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(Ok(report)) => reports.push(report),
            Ok(Err(e)) => {
                error!(worker = id, error = %e, "Worker failed");
                failure.get_or_insert(e);
            }
            Err(_) => {
                error!(worker = id, "Worker panicked");
                failure.get_or_insert(ConvertError::WorkerFailed { worker: id });
            }
        }
    }

    match failure {
        Some(e) => Err(e),
        None => Ok(reports),
    }
}
