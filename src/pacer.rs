//! Frame pacing loop.
//!
//! Each tick queries the viewport, renders, optionally stamps the debug
//! overlay, displays, advances the rotation and checks for termination.
//! The time spent working is subtracted from the target frame duration and
//! the remainder is slept, so frame starts stay close to the target period.

use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::RunError;
use crate::overlay::{self, PhaseTimings};
use crate::render::render_frame;
use crate::scene::{RenderState, SceneParams};
use crate::signal::TerminationSignal;
use crate::terminal::{TerminalDisplay, ViewportProvider};

/// Default target frame duration (~30 FPS).
pub const DEFAULT_FRAME_MS: f64 = 33.3;
/// Default slack subtracted from every sleep for scheduler jitter.
pub const DEFAULT_SAFETY_MARGIN_MS: f64 = 1.0;

/// Convert a millisecond setting to a duration, rounded to the microsecond.
///
/// Negative and non-finite values become zero.
pub fn duration_from_millis(ms: f64) -> Duration {
    if !ms.is_finite() || ms <= 0.0 {
        return Duration::ZERO;
    }
    Duration::from_micros((ms * 1000.0).round() as u64)
}

/// Timing and debug settings of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacerConfig {
    /// Target wall-clock time between frame starts
    pub target: Duration,
    /// Subtracted from every sleep
    pub safety_margin: Duration,
    /// Stamp the timing overlay onto each frame
    pub debug: bool,
}

impl Default for PacerConfig {
    fn default() -> Self {
        Self {
            target: duration_from_millis(DEFAULT_FRAME_MS),
            safety_margin: duration_from_millis(DEFAULT_SAFETY_MARGIN_MS),
            debug: false,
        }
    }
}

/// Why the loop stopped without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// A termination signal arrived
    Terminated,
}

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Sleep for `sleep`, then tick again
    Continue { sleep: Duration },
    Stop(Stop),
}

/// Time left to sleep after `busy` worth of work in a frame of `target`.
///
/// Clamped at zero when the work overran the budget.
pub fn sleep_budget(target: Duration, busy: Duration, safety_margin: Duration) -> Duration {
    target.saturating_sub(busy).saturating_sub(safety_margin)
}

/// Drives rendering at a fixed target frame rate.
pub struct FramePacer<V, S, W>
where
    V: ViewportProvider,
    S: TerminationSignal,
    W: Write,
{
    viewport: V,
    signal: S,
    display: TerminalDisplay<W>,
    scene: SceneParams,
    config: PacerConfig,
    state: RenderState,
    last_tick_start: Option<Instant>,
    /// Start-to-start duration of the previous tick
    last_frame: Duration,
    last_timings: PhaseTimings,
}

impl<V, S, W> FramePacer<V, S, W>
where
    V: ViewportProvider,
    S: TerminationSignal,
    W: Write,
{
    pub fn new(scene: SceneParams, config: PacerConfig, viewport: V, signal: S, out: W) -> Self {
        Self {
            viewport,
            signal,
            display: TerminalDisplay::new(out),
            scene,
            config,
            state: RenderState::new(),
            last_tick_start: None,
            last_frame: Duration::ZERO,
            last_timings: PhaseTimings::default(),
        }
    }

    /// Start from the given rotation angles instead of the defaults.
    pub fn with_angles(mut self, a: f64, b: f64) -> Self {
        self.state.a = a;
        self.state.b = b;
        self
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn display(&self) -> &TerminalDisplay<W> {
        &self.display
    }

    /// Phase timings measured by the most recent completed tick.
    pub fn last_timings(&self) -> PhaseTimings {
        self.last_timings
    }

    pub fn into_output(self) -> W {
        self.display.into_inner()
    }

    /// Run one frame.
    ///
    /// Termination is checked once, after the frame has been displayed and
    /// the angles advanced, so a pending request still gets one last frame.
    pub fn tick(&mut self) -> Result<Tick, RunError> {
        let tick_start = Instant::now();
        if let Some(prev) = self.last_tick_start {
            self.last_frame = tick_start.duration_since(prev);
        }
        self.last_tick_start = Some(tick_start);

        let viewport = self.viewport.size().map_err(RunError::Viewport)?;
        let size_query = tick_start.elapsed();
        if viewport != self.state.viewport {
            log::debug!("viewport is now {}x{}", viewport.width, viewport.height);
        }
        self.state.resize(viewport, &self.scene);

        let render_start = Instant::now();
        let mut frame = render_frame(&self.state, &self.scene);
        let render = render_start.elapsed();

        if self.config.debug {
            // display time of the current frame is not known yet
            let timings = PhaseTimings {
                size_query,
                render,
                display: self.last_timings.display,
            };
            overlay::stamp(&mut frame, &timings, self.last_frame, self.config.target);
        }

        let display_start = Instant::now();
        self.display.show(&frame).map_err(RunError::Display)?;
        let display = display_start.elapsed();

        self.last_timings = PhaseTimings {
            size_query,
            render,
            display,
        };
        self.state.advance();

        if self.signal.poll() {
            return Ok(Tick::Stop(Stop::Terminated));
        }

        Ok(Tick::Continue {
            sleep: sleep_budget(
                self.config.target,
                self.last_timings.busy(),
                self.config.safety_margin,
            ),
        })
    }

    /// Tick until a termination request or a fatal error.
    pub fn run(&mut self) -> Result<Stop, RunError> {
        log::info!(
            "rendering at {:.1}ms per frame (debug overlay: {})",
            self.config.target.as_secs_f64() * 1000.0,
            self.config.debug
        );
        loop {
            match self.tick()? {
                Tick::Continue { sleep } => {
                    if !sleep.is_zero() {
                        thread::sleep(sleep);
                    }
                }
                Tick::Stop(stop) => {
                    log::info!(
                        "stopping after {} frames: {:?}",
                        self.display.frames_shown(),
                        stop
                    );
                    return Ok(stop);
                }
            }
        }
    }
}
