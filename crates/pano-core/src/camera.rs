use crate::constants::*;
use crate::state::{CameraPose, Viewport};
use glam::Vec3;

/// Pointer position in client pixels plus whether it is the primary pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub primary: bool,
}

impl PointerSample {
    pub fn primary(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            primary: true,
        }
    }
}

/// Snapshot taken at pointer-down; drags are measured relative to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragAnchor {
    pub pointer_x: f32,
    pub pointer_y: f32,
    pub lon: f32,
    pub lat: f32,
}

/// Drag-to-look camera sitting at the centre of the panorama sphere.
///
/// Angles are stored in degrees. `lon` is unbounded; `lat` is clamped on every
/// write and again whenever a direction is derived from it.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    pub lon: f32,
    pub lat: f32,
    pub fov_deg: f32,
    pub speed: f32,
    drag: Option<DragAnchor>,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            lon: 0.0,
            lat: 0.0,
            fov_deg: DEFAULT_FOV_DEG,
            speed: DEFAULT_SPEED,
            drag: None,
        }
    }
}

impl OrbitCamera {
    pub fn new(lon: f32, lat: f32, fov_deg: f32) -> Self {
        Self {
            lon,
            lat: clamp_lat(lat),
            fov_deg: clamp_fov(fov_deg),
            ..Self::default()
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_anchor(&self) -> Option<DragAnchor> {
        self.drag
    }

    /// Start a drag. Returns false (and does nothing) for non-primary pointers.
    pub fn begin_drag(&mut self, pointer: PointerSample) -> bool {
        if !pointer.primary {
            return false;
        }
        self.drag = Some(DragAnchor {
            pointer_x: pointer.x,
            pointer_y: pointer.y,
            lon: self.lon,
            lat: self.lat,
        });
        true
    }

    /// Rotate relative to the drag anchor. Returns whether the camera moved.
    pub fn drag_to(&mut self, pointer: PointerSample) -> bool {
        if !pointer.primary {
            return false;
        }
        let Some(anchor) = self.drag else {
            return false;
        };
        let lon = (anchor.pointer_x - pointer.x) * self.speed + anchor.lon;
        let lat = clamp_lat((pointer.y - anchor.pointer_y) * self.speed + anchor.lat);
        let moved = lon != self.lon || lat != self.lat;
        self.lon = lon;
        self.lat = lat;
        moved
    }

    /// Finish a drag. Returns false for non-primary pointers, which leave any
    /// active drag untouched.
    pub fn end_drag(&mut self, pointer: PointerSample) -> bool {
        if !pointer.primary {
            return false;
        }
        self.drag.take().is_some()
    }

    /// Apply a wheel delta: zoom and drag sensitivity move together, each
    /// clamped to its own range.
    pub fn zoom(&mut self, delta_y: f32) {
        if !delta_y.is_finite() {
            return;
        }
        self.fov_deg = clamp_fov(self.fov_deg + delta_y * FOV_PER_WHEEL_UNIT);
        self.speed = clamp_speed(self.speed + delta_y * SPEED_PER_WHEEL_UNIT);
    }

    /// Look-at point on the panorama sphere for the current angles.
    pub fn look_direction(&mut self) -> Vec3 {
        self.lat = clamp_lat(self.lat);
        spherical_direction(self.lon, self.lat) * SPHERE_RADIUS
    }

    /// Derive the camera pose for this frame.
    pub fn pose(&mut self, viewport: Viewport) -> CameraPose {
        let target = self.look_direction();
        CameraPose {
            eye: Vec3::ZERO,
            target,
            up: Vec3::Y,
            aspect: viewport.aspect(),
            fovy_radians: clamp_fov(self.fov_deg).to_radians(),
            znear: Z_NEAR,
            zfar: Z_FAR,
        }
    }
}

/// Unit direction for azimuth `lon` and elevation `lat`, both in degrees.
///
/// `lon = 0, lat = 0` looks down +X; positive `lat` tilts towards +Y.
pub fn spherical_direction(lon_deg: f32, lat_deg: f32) -> Vec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = lon_deg.to_radians();
    Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin())
}

#[inline]
pub fn clamp_lat(lat: f32) -> f32 {
    if lat.is_nan() {
        return 0.0;
    }
    lat.clamp(LAT_MIN_DEG, LAT_MAX_DEG)
}

#[inline]
pub fn clamp_fov(fov: f32) -> f32 {
    if fov.is_nan() {
        return DEFAULT_FOV_DEG;
    }
    fov.clamp(FOV_MIN_DEG, FOV_MAX_DEG)
}

#[inline]
pub fn clamp_speed(speed: f32) -> f32 {
    if speed.is_nan() {
        return DEFAULT_SPEED;
    }
    speed.clamp(SPEED_MIN, SPEED_MAX)
}
