//! Colour suppliers.

use serde::{Deserialize, Serialize};

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const WHITE: Rgba = Rgba([255, 255, 255, 255]);

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }
}

/// Supplies the colour of a segment.
///
/// `segment` counts sub-segments within the layer, in constraint order.
/// Implementations may be stateful or random; the simulation never sees
/// the colours.
pub trait Palette {
    fn color(&self, layer: usize, segment: usize) -> Rgba;
}

/// One colour per layer, cycling when there are more layers than colours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidPalette {
    colors: Vec<Rgba>,
}

impl SolidPalette {
    /// Falls back to white when `colors` is empty.
    pub fn new(colors: Vec<Rgba>) -> Self {
        if colors.is_empty() {
            return Self::default();
        }
        Self { colors }
    }
}

impl Default for SolidPalette {
    fn default() -> Self {
        Self { colors: vec![Rgba::WHITE] }
    }
}

impl Palette for SolidPalette {
    fn color(&self, layer: usize, _segment: usize) -> Rgba {
        self.colors[layer % self.colors.len()]
    }
}
