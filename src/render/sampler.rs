//! Torus surface sampling, rotation and perspective projection.
//!
//! The surface is swept by two angles: θ around the tube cross-section and
//! φ around the centre of revolution. Every point is rotated by A and B,
//! projected onto the terminal grid, and shaded by a luminance proxy.

use std::f64::consts::TAU;

use super::frame::Frame;
use super::shading::shade;
use crate::scene::{RenderState, SceneParams, PHI_SPACING, THETA_SPACING};

/// A lit surface point that landed inside the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub col: usize,
    pub row: usize,
    /// Reciprocal depth, larger is closer
    pub ooz: f64,
    /// Lighting proxy in (0, √2)
    pub luminance: f64,
}

/// Sines and cosines of the two rotation angles.
#[derive(Debug, Clone, Copy)]
struct Rotation {
    sin_a: f64,
    cos_a: f64,
    sin_b: f64,
    cos_b: f64,
}

impl Rotation {
    fn new(a: f64, b: f64) -> Self {
        Self {
            sin_a: a.sin(),
            cos_a: a.cos(),
            sin_b: b.sin(),
            cos_b: b.cos(),
        }
    }
}

/// Per-frame projection constants.
#[derive(Debug, Clone, Copy)]
struct Projector {
    rot: Rotation,
    r1: f64,
    r2: f64,
    k1: f64,
    k2: f64,
    ratio: f64,
    off_x: f64,
    off_y: f64,
    width: f64,
    height: f64,
}

impl Projector {
    fn new(state: &RenderState, scene: &SceneParams) -> Self {
        let rot = Rotation::new(state.a, state.b);
        let width = f64::from(state.viewport.width);
        let height = f64::from(state.viewport.height);
        let mut off_x = width * 0.5;
        let mut off_y = height * 0.5;
        if scene.wander {
            off_x += width * 0.5 * rot.sin_a;
            off_y += height * 0.5 * rot.cos_b;
        }
        Self {
            rot,
            r1: scene.r1,
            r2: scene.r2,
            k1: state.k1,
            k2: scene.k2,
            ratio: scene.ratio,
            off_x,
            off_y,
            width,
            height,
        }
    }

    /// Rotate, project and light one surface point.
    ///
    /// Returns `None` for unlit points and points that miss the grid.
    fn project(&self, sin_theta: f64, cos_theta: f64, phi: f64) -> Option<Sample> {
        let Rotation {
            sin_a,
            cos_a,
            sin_b,
            cos_b,
        } = self.rot;
        let sin_phi = phi.sin();
        let cos_phi = phi.cos();

        // cross-section circle before revolving
        let circle_x = self.r2 + self.r1 * cos_theta;
        let circle_y = self.r1 * sin_theta;

        let x = circle_x * (cos_b * cos_phi + sin_a * sin_b * sin_phi) - circle_y * cos_a * sin_b;
        let y = circle_x * (sin_b * cos_phi - sin_a * cos_b * sin_phi) + circle_y * cos_a * cos_b;
        let z = self.k2 + cos_a * circle_x * sin_phi + circle_y * sin_a;
        let ooz = 1.0 / z;

        // screen rows grow downwards, model y grows upwards
        let xp = (self.off_x + self.k1 * ooz * x * self.ratio).floor();
        let yp = (self.off_y - self.k1 * ooz * y).floor();

        let luminance = cos_phi * cos_theta * sin_b
            - cos_a * cos_theta * sin_phi
            - sin_a * sin_theta
            + cos_b * (cos_a * sin_theta - cos_theta * sin_a * sin_phi);

        // written so that NaN coordinates fall out as well
        let on_grid = xp >= 0.0 && xp < self.width && yp >= 0.0 && yp < self.height;
        if luminance <= 0.0 || !on_grid {
            return None;
        }

        Some(Sample {
            col: xp as usize,
            row: yp as usize,
            ooz,
            luminance,
        })
    }
}

/// Angles `0, step, 2*step, ...` strictly below a full turn.
fn sweep(step: f64) -> impl Iterator<Item = f64> + Clone {
    (0u32..)
        .map(move |i| f64::from(i) * step)
        .take_while(|&angle| angle < TAU)
}

/// Every lit, in-bounds surface sample for the given state.
///
/// Samples come out θ-major in sweep order; no depth test is applied.
pub fn samples(state: &RenderState, scene: &SceneParams) -> impl Iterator<Item = Sample> {
    let projector = Projector::new(state, scene);
    sweep(THETA_SPACING).flat_map(move |theta| {
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();
        sweep(PHI_SPACING).filter_map(move |phi| projector.project(sin_theta, cos_theta, phi))
    })
}

/// Rasterise the torus into a fresh frame sized to `state.viewport`.
pub fn render_frame(state: &RenderState, scene: &SceneParams) -> Frame {
    let mut frame = Frame::new(state.viewport.width, state.viewport.height);
    for sample in samples(state, scene) {
        frame.plot(sample.col, sample.row, sample.ooz, shade(sample.luminance));
    }
    frame
}
