//! # weft-render
//!
//! The boundary between the simulation and whatever draws it.
//!
//! The simulation exposes nodes and constraints; this crate turns them
//! into coloured line segments ([`RenderFrame`]) and defines the
//! [`Renderer`] and [`Palette`] traits that window, capture and palette
//! backends implement. Only a headless renderer and a solid palette
//! live here.

pub mod frame;
pub mod palette;
pub mod renderer;

pub use frame::{LayerLines, LineSegment, RenderFrame};
pub use palette::{Palette, Rgba, SolidPalette};
pub use renderer::{HeadlessRenderer, Renderer};
