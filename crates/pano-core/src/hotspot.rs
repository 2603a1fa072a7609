//! Hotspot registry: static 3D anchors built once from declarative input.

use fnv::FnvHashMap;
use glam::{Mat4, Quat, Vec3};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum HotspotError {
    #[error("hotspot `{id}`: position needs 3 components, found {found}")]
    WrongComponentCount { id: String, found: usize },
    #[error("hotspot `{id}`: `{value}` is not a number")]
    InvalidComponent { id: String, value: String },
    #[error("hotspot `{id}`: position component `{value}` is not finite")]
    NonFinite { id: String, value: String },
}

/// Declarative input for one hotspot, as read from markup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HotspotDescriptor {
    pub id: String,
    /// Raw `"x,y,z"` position string.
    pub position: String,
    /// Index of the popup shown when this hotspot is triggered.
    pub popup: Option<usize>,
}

/// Transform record standing in for the marker in world space.
///
/// It carries no geometry. Facing it towards the camera keeps its world matrix
/// current so projection reads the same pipeline every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Billboard {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Billboard {
    pub fn at(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
        }
    }

    /// Rotate so the local +Z axis points at `eye`.
    pub fn face(&mut self, eye: Vec3) {
        let to_eye = eye - self.translation;
        if to_eye.length_squared() <= f32::EPSILON {
            return;
        }
        let forward = to_eye.normalize();
        let up = if forward.cross(Vec3::Y).length_squared() > 1e-6 {
            Vec3::Y
        } else {
            Vec3::Z
        };
        // look_to_rh builds a view matrix; its inverse is the object's world frame
        let view = Mat4::look_to_rh(self.translation, -forward, up);
        let (_, rotation, _) = view.inverse().to_scale_rotation_translation();
        self.rotation = rotation;
    }

    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }

    pub fn world_position(&self) -> Vec3 {
        self.world_matrix().w_axis.truncate()
    }

    /// Local +Z axis in world space.
    pub fn facing(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hotspot {
    pub id: String,
    pub anchor: Vec3,
    pub popup: Option<usize>,
    pub billboard: Billboard,
}

#[derive(Clone, Debug, Default)]
pub struct HotspotRegistry {
    hotspots: Vec<Hotspot>,
    by_id: FnvHashMap<String, usize>,
}

impl HotspotRegistry {
    /// Build one hotspot per descriptor. The first malformed position aborts
    /// the whole build.
    pub fn from_descriptors<I>(descriptors: I) -> Result<Self, HotspotError>
    where
        I: IntoIterator<Item = HotspotDescriptor>,
    {
        let mut registry = Self::default();
        for desc in descriptors {
            let anchor = parse_position(&desc.id, &desc.position)?;
            let index = registry.hotspots.len();
            registry.by_id.insert(desc.id.clone(), index);
            registry.hotspots.push(Hotspot {
                id: desc.id,
                anchor,
                popup: desc.popup,
                billboard: Billboard::at(anchor),
            });
        }
        log::debug!("[hotspots] registered {}", registry.hotspots.len());
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.hotspots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotspots.is_empty()
    }

    pub fn anchor(&self, index: usize) -> Option<Vec3> {
        self.hotspots.get(index).map(|h| h.anchor)
    }

    pub fn get(&self, index: usize) -> Option<&Hotspot> {
        self.hotspots.get(index)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hotspot> {
        self.hotspots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Hotspot> {
        self.hotspots.iter_mut()
    }
}

/// Parse a `"x,y,z"` anchor string. Exactly three finite numbers are accepted;
/// whitespace around components is ignored.
pub fn parse_position(id: &str, raw: &str) -> Result<Vec3, HotspotError> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(HotspotError::WrongComponentCount {
            id: id.to_string(),
            found: if raw.trim().is_empty() { 0 } else { parts.len() },
        });
    }
    let mut xyz = [0.0_f32; 3];
    for (slot, part) in xyz.iter_mut().zip(&parts) {
        let v: f32 = part.parse().map_err(|_| HotspotError::InvalidComponent {
            id: id.to_string(),
            value: part.to_string(),
        })?;
        if !v.is_finite() {
            return Err(HotspotError::NonFinite {
                id: id.to_string(),
                value: part.to_string(),
            });
        }
        *slot = v;
    }
    Ok(Vec3::from_array(xyz))
}
