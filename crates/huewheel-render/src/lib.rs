//! HueWheel Render Library
//!
//! Renderer abstraction and implementations for the HueWheel picker.
//! The default implementation uses Vello for GPU-accelerated rendering.

mod renderer;
pub mod wheel;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{RenderContext, RenderResult, Renderer, RendererError, WheelStyle};
pub use wheel::{HandleMarker, SaturationOverlay, Shadow, Wedge};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
