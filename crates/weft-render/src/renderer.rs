//! Renderer trait and HeadlessRenderer.
//!
//! A renderer is handed one [`RenderFrame`] per drawn tick. The headless
//! renderer discards frames and only counts them, for benchmarks and CI.

use weft_types::WeftResult;

use crate::frame::RenderFrame;

/// Trait for presenting simulation output.
pub trait Renderer: Send {
    fn submit_frame(&mut self, frame: &RenderFrame) -> WeftResult<()>;

    /// Flush buffers, close files, etc.
    fn finalize(&mut self) -> WeftResult<()>;

    fn name(&self) -> &str;

    fn frame_count(&self) -> u32;
}

/// Discards all frames.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: u32,
    segments: usize,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total segments seen across all frames.
    pub fn segment_count(&self) -> usize {
        self.segments
    }
}

impl Renderer for HeadlessRenderer {
    fn submit_frame(&mut self, frame: &RenderFrame) -> WeftResult<()> {
        self.frames += 1;
        self.segments += frame.segment_count();
        Ok(())
    }

    fn finalize(&mut self) -> WeftResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
