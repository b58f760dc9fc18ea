//! Unit tests for the torus renderer.
//!
//! These tests cover the sampler's observable guarantees:
//! - Determinism
//! - Depth buffer correctness
//! - Background preservation
//! - Silhouette shape for the reference scene

use std::collections::HashMap;

use donut_term::render::{render_frame, samples, shade, Frame, BACKGROUND, SHADING_RAMP};
use donut_term::scene::{RenderState, SceneParams, Viewport};

fn reference_frame() -> Frame {
    let scene = SceneParams::default();
    let state = RenderState::at(1.0, 1.0, Viewport::new(80, 24), &scene);
    render_frame(&state, &scene)
}

/// First lit cell walking from (col, row) in direction (dc, dr).
fn first_lit(frame: &Frame, col: i64, row: i64, dc: i64, dr: i64) -> Option<(i64, i64)> {
    let (mut c, mut r) = (col, row);
    while c >= 0 && r >= 0 && c < frame.width() as i64 && r < frame.height() as i64 {
        if frame.char_at(c as usize, r as usize) != Some(BACKGROUND) {
            return Some((c, r));
        }
        c += dc;
        r += dr;
    }
    None
}

// ==================== Determinism Tests ====================

#[test]
fn test_render_is_deterministic() {
    let a = reference_frame();
    let b = reference_frame();
    assert_eq!(a.chars(), b.chars());
    assert_eq!(a.to_string_display(), b.to_string_display());
}

#[test]
fn test_frame_matches_viewport() {
    let scene = SceneParams::default();
    for (w, h) in [(80, 24), (120, 40), (10, 3), (1, 1)] {
        let state = RenderState::at(0.7, 0.2, Viewport::new(w, h), &scene);
        let frame = render_frame(&state, &scene);
        assert_eq!(frame.width(), w);
        assert_eq!(frame.height(), h);
        assert_eq!(frame.chars().len(), w as usize * h as usize);
        assert_eq!(frame.depth().len(), frame.chars().len());
    }
}

// ==================== Depth Buffer Tests ====================

#[test]
fn test_depth_is_max_ooz_per_cell() {
    let scene = SceneParams::default();
    let state = RenderState::at(1.0, 1.0, Viewport::new(80, 24), &scene);
    let frame = render_frame(&state, &scene);

    let mut best: HashMap<(usize, usize), f64> = HashMap::new();
    for s in samples(&state, &scene) {
        let entry = best.entry((s.col, s.row)).or_insert(0.0);
        if s.ooz > *entry {
            *entry = s.ooz;
        }
    }

    for row in 0..24 {
        for col in 0..80 {
            let ch = frame.char_at(col, row).unwrap();
            let depth = frame.depth_at(col, row).unwrap();
            match best.get(&(col, row)) {
                Some(&max_ooz) => {
                    assert_ne!(ch, BACKGROUND, "cell ({}, {}) should be lit", col, row);
                    assert_eq!(depth, max_ooz);
                }
                None => {
                    assert_eq!(ch, BACKGROUND, "cell ({}, {}) was never sampled", col, row);
                    assert_eq!(depth, 0.0);
                }
            }
        }
    }
}

#[test]
fn test_cell_char_comes_from_closest_sample() {
    let scene = SceneParams::default();
    let state = RenderState::at(0.4, 2.5, Viewport::new(60, 20), &scene);
    let frame = render_frame(&state, &scene);

    // First sample reaching the max depth of a cell decides its character
    let mut winner: HashMap<(usize, usize), (f64, char)> = HashMap::new();
    for s in samples(&state, &scene) {
        let entry = winner.entry((s.col, s.row)).or_insert((0.0, BACKGROUND));
        if s.ooz > entry.0 {
            *entry = (s.ooz, shade(s.luminance));
        }
    }
    for ((col, row), (_, ch)) in winner {
        assert_eq!(frame.char_at(col, row), Some(ch));
    }
}

#[test]
fn test_only_ramp_characters_are_drawn() {
    let frame = reference_frame();
    for &c in frame.chars() {
        assert!(c == BACKGROUND || SHADING_RAMP.contains(&c), "unexpected {:?}", c);
    }
}

// ==================== Silhouette Tests ====================

#[test]
fn test_reference_scene_is_annular() {
    let frame = reference_frame();
    assert!(frame.lit_cells() > 200);

    // The centre of the viewport looks through the hole
    assert_eq!(frame.char_at(40, 12), Some(BACKGROUND));

    // ... and the hole is enclosed by the tube on every side
    assert!(first_lit(&frame, 40, 12, 1, 0).is_some());
    assert!(first_lit(&frame, 40, 12, -1, 0).is_some());
    assert!(first_lit(&frame, 40, 12, 0, 1).is_some());
    assert!(first_lit(&frame, 40, 12, 0, -1).is_some());
}

#[test]
fn test_reference_scene_is_roughly_centered() {
    let frame = reference_frame();
    let mut sum_col = 0.0;
    let mut sum_row = 0.0;
    let mut count = 0.0;
    for row in 0..24 {
        for col in 0..80 {
            if frame.char_at(col, row) != Some(BACKGROUND) {
                sum_col += col as f64;
                sum_row += row as f64;
                count += 1.0;
            }
        }
    }
    let (mean_col, mean_row) = (sum_col / count, sum_row / count);
    assert!((mean_col - 40.0).abs() < 10.0, "mean col {}", mean_col);
    assert!((mean_row - 12.0).abs() < 6.0, "mean row {}", mean_row);
}

#[test]
fn test_border_rows_stay_background() {
    // The torus fits inside the viewport with room to spare
    let frame = reference_frame();
    let last = frame.height() as usize - 1;
    for col in 0..frame.width() as usize {
        assert_eq!(frame.char_at(col, 0), Some(BACKGROUND));
        assert_eq!(frame.char_at(col, last), Some(BACKGROUND));
    }
}

#[test]
fn test_tiny_viewport_does_not_panic() {
    let scene = SceneParams::default();
    let state = RenderState::at(1.0, 1.0, Viewport::new(1, 1), &scene);
    let frame = render_frame(&state, &scene);
    assert_eq!(frame.chars().len(), 1);
}

#[test]
fn test_viewer_inside_torus_does_not_panic() {
    // k2 smaller than r1 + r2 puts some samples behind the viewer
    let scene = SceneParams {
        k2: 1.0,
        ..SceneParams::default()
    };
    let state = RenderState::at(0.3, 0.9, Viewport::new(80, 24), &scene);
    let frame = render_frame(&state, &scene);
    assert!(frame.depth().iter().all(|&d| d >= 0.0));
}
