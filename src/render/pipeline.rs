use rayon::prelude::*;

use crate::{
    composition::model::Composition,
    eval::evaluator::{EvaluatedFrame, Evaluator},
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{PromoError, PromoResult},
    },
    render::sink::{FrameSink, SinkConfig},
};

#[derive(Clone, Debug)]
/// Threading and chunking controls for multi-frame rendering.
pub struct RenderThreading {
    /// Enable parallel rendering when `true`.
    pub parallel: bool,
    /// Chunk size in frames for batched scheduling.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Aggregated rendering counters.
pub struct RenderStats {
    /// Total requested frames.
    pub frames_total: u64,
    /// Frames evaluated and delivered.
    pub frames_rendered: u64,
    /// Chunks scheduled.
    pub chunks: u64,
}

/// Evaluate a single frame.
///
/// This is the primary one-shot API for producing a scene tree from a [`Composition`].
pub fn render_frame(comp: &Composition, frame: FrameIndex) -> PromoResult<EvaluatedFrame> {
    Evaluator::eval_frame(comp, frame)
}

/// Render a range of frames (inclusive start, exclusive end) into memory.
pub fn render_frames(
    comp: &Composition,
    range: FrameRange,
    threading: &RenderThreading,
) -> PromoResult<(Vec<EvaluatedFrame>, RenderStats)> {
    let pool = prepare(comp, range, threading)?;
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    let stats = render_chunks(comp, range, threading, pool.as_ref(), |_, frames| {
        out.extend(frames);
        Ok(())
    })?;
    Ok((out, stats))
}

/// Render a range of frames and stream them into `sink` in timeline order.
///
/// Frames are produced chunk by chunk, so at most one chunk is held in memory regardless of the
/// range length. The range, composition and threading are checked before `sink.begin`.
pub fn render_to_sink(
    comp: &Composition,
    range: FrameRange,
    threading: &RenderThreading,
    sink: &mut dyn FrameSink,
) -> PromoResult<RenderStats> {
    let pool = prepare(comp, range, threading)?;
    sink.begin(SinkConfig {
        id: comp.config.id.clone(),
        width: comp.canvas().width,
        height: comp.canvas().height,
        fps: comp.fps(),
        range,
    })?;
    let stats = render_chunks(comp, range, threading, pool.as_ref(), |chunk, frames| {
        for (f, frame) in (chunk.start.0..chunk.end.0).zip(&frames) {
            sink.push_frame(FrameIndex(f), frame)?;
        }
        Ok(())
    })?;
    sink.end()?;
    Ok(stats)
}

/// Check that `range` is a non-empty part of a valid composition.
pub fn check_render_range(comp: &Composition, range: FrameRange) -> PromoResult<()> {
    if range.is_empty() {
        return Err(PromoError::validation("render range must be non-empty"));
    }
    comp.validate()?;
    if range.end.0 > comp.duration().0 {
        return Err(PromoError::validation(format!(
            "render range end {} exceeds composition duration {}",
            range.end.0,
            comp.duration().0
        )));
    }
    Ok(())
}

fn prepare(
    comp: &Composition,
    range: FrameRange,
    threading: &RenderThreading,
) -> PromoResult<Option<rayon::ThreadPool>> {
    check_render_range(comp, range)?;
    if threading.parallel {
        Ok(Some(build_thread_pool(threading.threads)?))
    } else {
        Ok(None)
    }
}

fn render_chunks(
    comp: &Composition,
    range: FrameRange,
    threading: &RenderThreading,
    pool: Option<&rayon::ThreadPool>,
    mut deliver: impl FnMut(FrameRange, Vec<EvaluatedFrame>) -> PromoResult<()>,
) -> PromoResult<RenderStats> {
    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let mut stats = RenderStats::default();
    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = chunk_start.saturating_add(chunk_size).min(range.end.0);
        let chunk = FrameRange::new(FrameIndex(chunk_start), FrameIndex(chunk_end))
            .map_err(|e| PromoError::evaluation(format!("invalid chunk range: {e}")))?;
        tracing::debug!(
            start = chunk.start.0,
            end = chunk.end.0,
            parallel = pool.is_some(),
            "render chunk"
        );

        let frames = match pool {
            Some(pool) => render_chunk_parallel(comp, chunk, pool)?,
            None => render_chunk_sequential(comp, chunk)?,
        };
        let count = frames.len() as u64;
        deliver(chunk, frames)?;

        stats.frames_total += chunk.len_frames();
        stats.frames_rendered += count;
        stats.chunks += 1;
        chunk_start = chunk_end;
    }

    tracing::info!(
        id = %comp.config.id,
        frames = stats.frames_rendered,
        chunks = stats.chunks,
        parallel = threading.parallel,
        "render finished"
    );
    Ok(stats)
}

fn render_chunk_sequential(
    comp: &Composition,
    range: FrameRange,
) -> PromoResult<Vec<EvaluatedFrame>> {
    (range.start.0..range.end.0)
        .map(|f| Evaluator::eval_frame_unchecked(comp, FrameIndex(f)))
        .collect()
}

fn render_chunk_parallel(
    comp: &Composition,
    range: FrameRange,
    pool: &rayon::ThreadPool,
) -> PromoResult<Vec<EvaluatedFrame>> {
    let indices: Vec<FrameIndex> = (range.start.0..range.end.0).map(FrameIndex).collect();
    // Indexed collect keeps timeline order.
    pool.install(|| {
        indices
            .par_iter()
            .map(|&f| Evaluator::eval_frame_unchecked(comp, f))
            .collect()
    })
}

fn build_thread_pool(threads: Option<usize>) -> PromoResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(PromoError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| PromoError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
