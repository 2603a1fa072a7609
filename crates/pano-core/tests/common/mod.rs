// Shared fixtures for host-side core tests.

#![allow(dead_code)]
use pano_core::{CameraPose, MarkerElement, OrbitCamera, Viewport, Visibility};

#[derive(Clone, Debug, PartialEq)]
pub enum MarkerCall {
    Show,
    Hide,
    Move(f32, f32),
}

/// Marker that records every call made on it.
#[derive(Clone, Debug, Default)]
pub struct RecordingMarker {
    pub calls: Vec<MarkerCall>,
    pub shown: bool,
    pub position: Option<(f32, f32)>,
}

impl Visibility for RecordingMarker {
    fn show(&mut self) {
        self.shown = true;
        self.calls.push(MarkerCall::Show);
    }

    fn hide(&mut self) {
        self.shown = false;
        self.calls.push(MarkerCall::Hide);
    }
}

impl MarkerElement for RecordingMarker {
    fn set_screen_position(&mut self, x: f32, y: f32) {
        self.position = Some((x, y));
        self.calls.push(MarkerCall::Move(x, y));
    }
}

pub fn pose_for(lon: f32, lat: f32, fov: f32, viewport: Viewport) -> CameraPose {
    OrbitCamera::new(lon, lat, fov).pose(viewport)
}

pub fn assert_close(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "expected {b}, got {a} (eps {eps})");
}
