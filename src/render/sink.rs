use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::Context;

use crate::{
    eval::evaluator::EvaluatedFrame,
    foundation::{
        core::{Fps, FrameIndex, FrameRange},
        error::PromoResult,
    },
};

/// Configuration provided to a [`FrameSink`] at the start of a range render.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SinkConfig {
    /// Composition identifier.
    pub id: String,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
    /// Frames that will be pushed.
    pub range: FrameRange,
}

/// Sink contract for consuming evaluated frames in timeline order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order within the
/// requested render range.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> PromoResult<()>;
    /// Push one frame in strictly increasing timeline order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &EvaluatedFrame) -> PromoResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> PromoResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, EvaluatedFrame)>,
    finished: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, EvaluatedFrame)] {
        &self.frames
    }

    /// `true` once `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> PromoResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &EvaluatedFrame) -> PromoResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> PromoResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct FrameRecord<'a> {
    frame: u64,
    fingerprint: u64,
    evaluated: &'a EvaluatedFrame,
}

/// Writes one JSON object per frame, newline-delimited.
///
/// Each line carries the frame index, the frame fingerprint and the full evaluated frame.
pub struct JsonLinesSink<W: Write + Send> {
    writer: W,
    written: u64,
}

impl JsonLinesSink<BufWriter<File>> {
    /// Create (or truncate) `path` and write frames to it.
    pub fn create(path: impl AsRef<Path>) -> PromoResult<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("create frame output '{}'", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Frames written so far.
    pub fn frames_written(&self) -> u64 {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> FrameSink for JsonLinesSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> PromoResult<()> {
        tracing::debug!(id = %cfg.id, frames = cfg.range.len_frames(), "jsonl sink begin");
        self.written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &EvaluatedFrame) -> PromoResult<()> {
        let record = FrameRecord {
            frame: idx.0,
            fingerprint: frame.fingerprint()?.0,
            evaluated: frame,
        };
        serde_json::to_writer(&mut self.writer, &record)?;
        self.writer
            .write_all(b"\n")
            .with_context(|| format!("write frame {}", idx.0))?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> PromoResult<()> {
        self.writer.flush().context("flush frame output")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/sink.rs"]
mod tests;
