//! Line-segment frames built from simulation state.

use serde::{Deserialize, Serialize};
use weft_sim::MultiLayerCoordinator;
use weft_types::Vec2;

use crate::palette::{Palette, Rgba};

/// One coloured line segment in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Vec2,
    pub end: Vec2,
    pub color: Rgba,
}

/// All segments of one layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerLines {
    pub layer: u16,
    pub segments: Vec<LineSegment>,
}

/// Everything a renderer needs to draw one tick.
///
/// Layers are ordered back to front so later layers draw over earlier
/// ones and layer 0 ends up on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub tick: u32,
    pub layers: Vec<LayerLines>,
}

impl RenderFrame {
    /// Captures every constraint of every layer as `subdivisions`
    /// equal-length pieces (at least one), coloured by `palette`.
    pub fn capture(
        fabric: &MultiLayerCoordinator,
        palette: &dyn Palette,
        subdivisions: usize,
    ) -> Self {
        let pieces = subdivisions.max(1);
        let layers = fabric
            .layers()
            .iter()
            .rev()
            .map(|layer| {
                let depth = layer.id().index();
                let mut segments = Vec::with_capacity(layer.constraints().len() * pieces);
                for (start, end) in layer.segments() {
                    let delta = end - start;
                    for k in 0..pieces {
                        let t0 = k as f32 / pieces as f32;
                        let t1 = (k + 1) as f32 / pieces as f32;
                        let color = palette.color(depth, segments.len());
                        segments.push(LineSegment {
                            start: start + delta * t0,
                            end: start + delta * t1,
                            color,
                        });
                    }
                }
                LayerLines { layer: layer.id().0, segments }
            })
            .collect();

        Self {
            tick: fabric.tick(),
            layers,
        }
    }

    pub fn segment_count(&self) -> usize {
        self.layers.iter().map(|l| l.segments.len()).sum()
    }
}
