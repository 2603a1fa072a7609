// Pure helpers for translating browser input into viewer units.

// Wheel `deltaMode` values; pixel mode (0) passes through
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;

pub const WHEEL_LINE_PX: f32 = 16.0;
pub const WHEEL_PAGE_PX: f32 = 800.0;

/// Normalise a wheel delta to pixels so zoom speed does not depend on the
/// browser's scroll unit.
#[inline]
pub fn wheel_delta_pixels(delta_y: f64, delta_mode: u32) -> f32 {
    let d = delta_y as f32;
    match delta_mode {
        DOM_DELTA_LINE => d * WHEEL_LINE_PX,
        DOM_DELTA_PAGE => d * WHEEL_PAGE_PX,
        _ => d,
    }
}

/// CSS transform placing a marker at screen pixel `(x, y)`.
#[inline]
pub fn translate_css(x: f32, y: f32) -> String {
    format!("translate({:.1}px, {:.1}px)", x, y)
}

/// Fit `(width, height)` inside `max_dim` on both axes, keeping aspect.
#[inline]
pub fn fit_texture_size(width: u32, height: u32, max_dim: u32) -> (u32, u32) {
    let w = width.max(1);
    let h = height.max(1);
    let largest = w.max(h);
    if largest <= max_dim {
        return (w, h);
    }
    let scale = max_dim as f64 / largest as f64;
    (
        ((w as f64 * scale).round() as u32).clamp(1, max_dim),
        ((h as f64 * scale).round() as u32).clamp(1, max_dim),
    )
}

/// Fallback id for hotspot elements without an `id` attribute.
#[inline]
pub fn hotspot_id(element_id: &str, index: usize) -> String {
    if element_id.is_empty() {
        format!("hotspot-{}", index)
    } else {
        element_id.to_string()
    }
}
