use crate::state::{CameraPose, Viewport};
use glam::{Vec2, Vec3, Vec4};

/// Transform a world position into normalized device coordinates.
///
/// Points behind the eye come back mirrored through the perspective divide;
/// pair this with [`crate::is_visible`] before trusting the result.
#[inline]
pub fn project_ndc(world: Vec3, pose: &CameraPose) -> Vec3 {
    let clip = pose.view_projection() * world.extend(1.0);
    clip.truncate() / clip.w
}

/// Inverse of [`project_ndc`] for the same pose.
#[inline]
pub fn unproject_ndc(ndc: Vec3, pose: &CameraPose) -> Vec3 {
    let p = pose.view_projection().inverse() * Vec4::new(ndc.x, ndc.y, ndc.z, 1.0);
    p.truncate() / p.w
}

/// Map NDC x/y to viewport pixels, origin top-left.
#[inline]
pub fn ndc_to_screen(ndc: Vec3, viewport: Viewport) -> Vec2 {
    let hw = viewport.half_width();
    let hh = viewport.half_height();
    Vec2::new(ndc.x * hw + hw, -ndc.y * hh + hh)
}

/// Map viewport pixels plus an NDC depth back into NDC.
#[inline]
pub fn screen_to_ndc(screen: Vec2, depth: f32, viewport: Viewport) -> Vec3 {
    let hw = viewport.half_width();
    let hh = viewport.half_height();
    Vec3::new((screen.x - hw) / hw, -(screen.y - hh) / hh, depth)
}

/// Screen position in pixels of `world` for the given pose and viewport.
///
/// Recomputed on every call; the pose changes continuously while dragging.
pub fn project(world: Vec3, pose: &CameraPose, viewport: Viewport) -> Vec2 {
    ndc_to_screen(project_ndc(world, pose), viewport)
}
