use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

/// Equirectangular texture coordinate for a view direction.
///
/// Matches an inward-facing UV sphere: `u` runs with the azimuth measured from
/// +X towards +Z, `v = 0` is the top row (+Y). `panorama.wgsl` uses the same
/// mapping.
pub fn equirect_uv(dir: Vec3) -> Vec2 {
    let d = dir.normalize_or_zero();
    if d == Vec3::ZERO {
        return Vec2::new(0.0, 0.5);
    }
    let u = (d.z.atan2(d.x) / TAU).rem_euclid(1.0);
    let v = d.y.clamp(-1.0, 1.0).acos() / PI;
    Vec2::new(u, v)
}

/// Decoded panorama pixels, tightly packed RGBA8.
#[derive(Clone, Debug, PartialEq)]
pub struct PanoramaImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl PanoramaImage {
    /// Wrap raw pixels; `None` if the buffer length does not match.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        (width > 0 && height > 0 && rgba.len() == expected).then_some(Self {
            width,
            height,
            rgba,
        })
    }

    /// Single grey pixel bound until the first real image decodes.
    pub fn placeholder() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![40, 40, 40, 255],
        }
    }
}

/// Latest decoded image waiting for upload, guarded against out-of-order
/// decodes.
///
/// Every load takes a ticket when it starts. A finished decode is only kept if
/// no newer load has started since, so a slow early drop can never replace a
/// later one.
#[derive(Debug, Default)]
pub struct ImageQueue {
    issued: u32,
    pending: Option<PanoramaImage>,
}

impl ImageQueue {
    pub fn begin_load(&mut self) -> u32 {
        self.issued = self.issued.wrapping_add(1);
        self.issued
    }

    /// Queue `image` for load `ticket`. Returns false and drops the image if
    /// a newer load has started.
    pub fn offer(&mut self, ticket: u32, image: PanoramaImage) -> bool {
        if ticket != self.issued {
            return false;
        }
        self.pending = Some(image);
        true
    }

    pub fn take(&mut self) -> Option<PanoramaImage> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
