//! Luminance to character mapping.

/// Shading ramp, dimmest to brightest.
pub const SHADING_RAMP: [char; 12] = ['.', ',', '-', '~', ':', ';', '=', '!', '*', '#', '$', '@'];

/// Bucket for a luminance value.
///
/// Luminance lies in (-√2, √2); scaling by 8 puts the lit half in 0..=11.
/// Anything outside is clamped onto the ramp.
pub fn luminance_index(luminance: f64) -> usize {
    let bucket = (luminance * 8.0).floor().max(0.0) as usize;
    bucket.min(SHADING_RAMP.len() - 1)
}

/// Ramp character for a luminance value.
pub fn shade(luminance: f64) -> char {
    SHADING_RAMP[luminance_index(luminance)]
}
