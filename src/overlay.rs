//! Debug overlay with frame timing statistics.
//!
//! Stamps up to four lines onto the bottom of a frame, bottom row first:
//! last frame total, display, render and size query time.

use std::time::Duration;

use crate::render::{CellColor, Frame};

/// Colour of the frame line when the previous frame overran its budget.
pub const OVER_BUDGET: CellColor = CellColor { r: 255, g: 85, b: 85 };
/// Colour of the frame line when the previous frame fit its budget.
pub const UNDER_BUDGET: CellColor = CellColor { r: 85, g: 255, b: 85 };

/// Wall-clock cost of each phase of a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseTimings {
    pub size_query: Duration,
    pub render: Duration,
    pub display: Duration,
}

impl PhaseTimings {
    /// Time spent working, i.e. everything but the sleep.
    pub fn busy(&self) -> Duration {
        self.size_query + self.render + self.display
    }
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Overlay text, bottom row first, with the colour for each line.
pub fn overlay_lines(
    timings: &PhaseTimings,
    last_frame: Duration,
    target: Duration,
) -> [(String, Option<CellColor>); 4] {
    let flag = if last_frame > target {
        OVER_BUDGET
    } else {
        UNDER_BUDGET
    };
    [
        (format!("frame   {:>8.2}ms", millis(last_frame)), Some(flag)),
        (format!("display {:>8.2}ms", millis(timings.display)), None),
        (format!("render  {:>8.2}ms", millis(timings.render)), None),
        (format!("size    {:>8.2}ms", millis(timings.size_query)), None),
    ]
}

/// Write the timing lines into the bottom rows of `frame`.
///
/// Frames shorter than four rows just get fewer lines.
pub fn stamp(frame: &mut Frame, timings: &PhaseTimings, last_frame: Duration, target: Duration) {
    let height = frame.height() as usize;
    for (i, (text, color)) in overlay_lines(timings, last_frame, target)
        .iter()
        .enumerate()
        .take(height)
    {
        frame.write_text(height - 1 - i, text, *color);
    }
}
