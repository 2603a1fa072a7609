//! View frustum for hotspot culling
//!
//! Extracts frustum planes from the camera's projection and world-inverse
//! matrices and tests point containment.

use crate::state::CameraPose;
use glam::{Mat4, Vec3, Vec4};

/// A plane `normal · p + distance = 0`, normal pointing into the frustum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub distance: f32,
}

impl Plane {
    /// Create a plane from coefficients and normalize it
    pub fn from_coefficients(v: Vec4) -> Self {
        let n = v.truncate();
        let len = n.length();
        if len > 0.0 {
            Self {
                normal: n / len,
                distance: v.w / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Signed distance from point to plane (positive = inside)
    #[inline]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

/// Six clipping planes: left, right, bottom, top, near, far.
#[derive(Debug, Clone, PartialEq)]
pub struct Frustum {
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract planes from a view-projection matrix whose clip space keeps
    /// `-w <= x, y, z <= w` (OpenGL depth range).
    pub fn from_view_projection(vp: Mat4) -> Self {
        let row0 = vp.row(0);
        let row1 = vp.row(1);
        let row2 = vp.row(2);
        let row3 = vp.row(3);

        Self {
            planes: [
                Plane::from_coefficients(row3 + row0),
                Plane::from_coefficients(row3 - row0),
                Plane::from_coefficients(row3 + row1),
                Plane::from_coefficients(row3 - row1),
                Plane::from_coefficients(row3 + row2),
                Plane::from_coefficients(row3 - row2),
            ],
        }
    }

    /// Build from the pose's projection and the inverse of its world
    /// transform. The pose must be derived for the frame being tested.
    pub fn from_pose(pose: &CameraPose) -> Self {
        Self::from_view_projection(pose.projection_matrix() * pose.view_matrix())
    }

    /// Inclusive containment: a point on a plane counts as inside.
    #[inline]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(point) >= 0.0)
    }
}

/// Whether `world` lies inside the frustum of `pose`. Builds a fresh frustum
/// on each call.
pub fn is_visible(world: Vec3, pose: &CameraPose) -> bool {
    Frustum::from_pose(pose).contains_point(world)
}
