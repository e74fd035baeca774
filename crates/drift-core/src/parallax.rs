use crate::constants::PARALLAX_DAMPING;

/// Vertical image shift in CSS pixels for a scroll delta.
#[inline]
pub fn parallax_offset(scroll_delta: f64) -> f64 {
    scroll_delta * PARALLAX_DAMPING
}

/// CSS `transform` value for a vertical shift.
pub fn translate_y(offset_px: f64) -> String {
    format!("translateY({}px)", offset_px)
}
