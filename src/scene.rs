//! Scene parameters and the per-run render state.

/// Angular step of the tube cross-section (θ) while sampling the surface.
pub const THETA_SPACING: f64 = 0.07;
/// Angular step around the centre of revolution (φ) while sampling the surface.
pub const PHI_SPACING: f64 = 0.02;

/// Rotation applied to angle A after every displayed frame.
pub const A_STEP: f64 = 0.07;
/// Rotation applied to angle B after every displayed frame.
pub const B_STEP: f64 = 0.02;

/// Both rotation angles start here.
pub const INITIAL_ANGLE: f64 = 1.0;

pub const DEFAULT_R1: f64 = 1.0;
pub const DEFAULT_R2: f64 = 2.0;
pub const DEFAULT_K2: f64 = 5.0;
pub const DEFAULT_RATIO: f64 = 2.0;

/// Fixed geometry of the torus and the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneParams {
    /// Minor radius (tube)
    pub r1: f64,
    /// Major radius (centre of the tube to centre of the torus)
    pub r2: f64,
    /// Distance from the viewer to the centre of the torus
    pub k2: f64,
    /// Width/height correction for non-square terminal cells
    pub ratio: f64,
    /// Drift the projection centre with the rotation angles
    pub wander: bool,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            r1: DEFAULT_R1,
            r2: DEFAULT_R2,
            k2: DEFAULT_K2,
            ratio: DEFAULT_RATIO,
            wander: false,
        }
    }
}

impl SceneParams {
    /// Projection scale for a viewport of the given height.
    ///
    /// Chosen so the torus fills roughly three quarters of the rows.
    pub fn focal_factor(&self, height: u16) -> f64 {
        f64::from(height) * self.k2 * 3.0 / (8.0 * (self.r1 + self.r2))
    }
}

/// Terminal size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Everything the sampler needs to know about the current frame.
///
/// Owned by the pacer; the sampler only ever borrows it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    /// Rotation angle A (radians)
    pub a: f64,
    /// Rotation angle B (radians)
    pub b: f64,
    /// Viewport the next frame is rendered for
    pub viewport: Viewport,
    /// Focal factor derived from `viewport.height`
    pub k1: f64,
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderState {
    pub fn new() -> Self {
        Self {
            a: INITIAL_ANGLE,
            b: INITIAL_ANGLE,
            viewport: Viewport::default(),
            k1: 0.0,
        }
    }

    /// Create a state for fixed angles, already sized for `viewport`.
    pub fn at(a: f64, b: f64, viewport: Viewport, scene: &SceneParams) -> Self {
        let mut state = Self {
            a,
            b,
            ..Self::new()
        };
        state.resize(viewport, scene);
        state
    }

    /// Adopt a new viewport and recompute the focal factor.
    pub fn resize(&mut self, viewport: Viewport, scene: &SceneParams) {
        self.viewport = viewport;
        self.k1 = scene.focal_factor(viewport.height);
    }

    /// Advance both rotation angles by one frame.
    pub fn advance(&mut self) {
        self.a += A_STEP;
        self.b += B_STEP;
    }
}
