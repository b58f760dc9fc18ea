//! Torus renderer: surface sampling, projection and shading.
//!
//! # Structure
//!
//! - [`frame`] - Character grid plus depth buffer
//! - [`sampler`] - Surface sweep, rotation and projection
//! - [`shading`] - Luminance to character ramp

mod frame;
mod sampler;
mod shading;

pub use frame::{CellColor, Frame, BACKGROUND};
pub use sampler::{render_frame, samples, Sample};
pub use shading::{luminance_index, shade, SHADING_RAMP};
