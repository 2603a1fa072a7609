//! Viewer session: the single owner of camera, hotspots, popups and viewport.
//!
//! Input handlers mutate the session and get told whether hotspot markers need
//! re-syncing; the render loop only reads a pose from it.

use crate::camera::{OrbitCamera, PointerSample};
use crate::hotspot::{HotspotDescriptor, HotspotError, HotspotRegistry};
use crate::popup::{apply_popup_change, PopupChange, PopupGroup};
use crate::state::{CameraPose, Viewport};
use crate::sync::{sync_hotspots, MarkerElement, SyncReport, Visibility};

#[derive(Debug)]
pub struct ViewerSession {
    pub camera: OrbitCamera,
    pub hotspots: HotspotRegistry,
    pub popups: PopupGroup,
    viewport: Viewport,
}

impl ViewerSession {
    pub fn new(
        descriptors: Vec<HotspotDescriptor>,
        popup_count: usize,
        viewport: Viewport,
    ) -> Result<Self, HotspotError> {
        let hotspots = HotspotRegistry::from_descriptors(descriptors)?;
        Ok(Self {
            camera: OrbitCamera::default(),
            hotspots,
            popups: PopupGroup::new(popup_count),
            viewport,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Camera pose for the current angles and viewport.
    pub fn pose(&mut self) -> CameraPose {
        self.camera.pose(self.viewport)
    }

    pub fn pointer_down(&mut self, pointer: PointerSample) -> bool {
        self.camera.begin_drag(pointer)
    }

    /// Returns true when the camera moved and markers must follow.
    pub fn pointer_move(&mut self, pointer: PointerSample) -> bool {
        self.camera.drag_to(pointer)
    }

    pub fn pointer_up(&mut self, pointer: PointerSample) -> bool {
        self.camera.end_drag(pointer)
    }

    /// Wheel zoom always invalidates marker positions.
    pub fn wheel(&mut self, delta_y: f32) -> bool {
        self.camera.zoom(delta_y);
        true
    }

    /// Returns true if the size actually changed.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let next = Viewport::new(width, height);
        let changed = next != self.viewport;
        self.viewport = next;
        changed
    }

    pub fn sync<M: MarkerElement>(&mut self, markers: &mut [M]) -> SyncReport {
        let pose = self.pose();
        sync_hotspots(&mut self.hotspots, &pose, self.viewport, markers)
    }

    /// Toggle the popup attached to `hotspot_index`, if it has one.
    pub fn trigger_popup<V: Visibility>(
        &mut self,
        hotspot_index: usize,
        popups: &mut [V],
    ) -> PopupChange {
        let Some(popup) = self.hotspots.get(hotspot_index).and_then(|h| h.popup) else {
            return PopupChange::default();
        };
        let change = self.popups.trigger(popup);
        apply_popup_change(&change, popups);
        change
    }
}
