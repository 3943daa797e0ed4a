#![forbid(unsafe_code)]

//! Sprite-sheet positioning and slider-track coloring.
//!
//! A sheet is a horizontal strip of `num_frames` square frames. To show one
//! frame, the strip is scaled so that a frame is exactly as tall as the frame
//! box, then shifted left by whole scaled frames:
//!
//! ```text
//! scale              = box_height / frame_size
//! scaled_frame_width = frame_size * scale
//! scaled_total_width = frame_size * num_frames * scale
//! offset_x           = -(frame * scaled_frame_width)
//! ```

/// Background placement of one frame inside a frame box, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteGeometry {
    pub scale: f64,
    pub scaled_frame_width: f64,
    pub scaled_total_width: f64,
    /// Horizontal background offset (zero or negative).
    pub offset_x: f64,
    /// Background height; equals the box height.
    pub height: f64,
}

impl SpriteGeometry {
    /// Place `frame` of a `num_frames` sheet in a box `box_height` pixels tall.
    #[must_use]
    pub fn compute(frame: u32, num_frames: u32, frame_size: u32, box_height: f64) -> Self {
        let frame_size = f64::from(frame_size.max(1));
        let scale = box_height / frame_size;
        let scaled_frame_width = frame_size * scale;
        let scaled_total_width = frame_size * f64::from(num_frames) * scale;
        Self {
            scale,
            scaled_frame_width,
            scaled_total_width,
            offset_x: -(f64::from(frame) * scaled_frame_width),
            height: box_height,
        }
    }

    /// `background-position` value.
    #[must_use]
    pub fn position_css(&self) -> String {
        format!("{}px 0", css_px(self.offset_x))
    }

    /// `background-size` value.
    #[must_use]
    pub fn size_css(&self) -> String {
        format!(
            "{}px {}px",
            css_px(self.scaled_total_width),
            css_px(self.height)
        )
    }
}

/// Slider fill fraction in `[0, 1]`: `frame / (num_frames - 1)`.
///
/// A single-frame sheet has no travel; its fraction is 0.
#[must_use]
pub fn fill_fraction(frame: u32, num_frames: u32) -> f64 {
    if num_frames <= 1 {
        return 0.0;
    }
    let max = f64::from(num_frames - 1);
    (f64::from(frame) / max).clamp(0.0, 1.0)
}

/// Two-color slider track with a hard stop at `fraction`.
#[must_use]
pub fn track_gradient(fraction: f64, fill: &str, rest: &str) -> String {
    let pct = css_px(fraction * 100.0);
    format!("linear-gradient(to right, {fill} 0%, {fill} {pct}%, {rest} {pct}%, {rest} 100%)")
}

/// Format a CSS number without a trailing `.0` and without `-0`.
fn css_px(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let s = format!("{value:.4}");
    s.trim_end_matches('0').trim_end_matches('.').to_owned()
}
