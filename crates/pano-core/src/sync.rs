use crate::frustum::Frustum;
use crate::hotspot::HotspotRegistry;
use crate::projection::project;
use crate::state::{CameraPose, Viewport};

/// Anything that can be shown or hidden by the viewer.
pub trait Visibility {
    fn show(&mut self);
    fn hide(&mut self);
}

/// On-screen stand-in for a hotspot. Implemented by the UI layer.
pub trait MarkerElement: Visibility {
    fn set_screen_position(&mut self, x: f32, y: f32);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub visible: usize,
    pub hidden: usize,
}

/// Re-project every hotspot for `pose` and drive its marker.
///
/// Per hotspot: face the billboard towards the eye, project its world
/// position, then cull that same position. `markers[i]` belongs to hotspot
/// `i`; extra markers are left alone and missing ones are skipped.
pub fn sync_hotspots<M: MarkerElement>(
    registry: &mut HotspotRegistry,
    pose: &CameraPose,
    viewport: Viewport,
    markers: &mut [M],
) -> SyncReport {
    let frustum = Frustum::from_pose(pose);
    let mut report = SyncReport::default();
    for (hotspot, marker) in registry.iter_mut().zip(markers.iter_mut()) {
        hotspot.billboard.face(pose.eye);
        let world = hotspot.billboard.world_position();
        let screen = project(world, pose, viewport);
        if frustum.contains_point(world) {
            marker.show();
            marker.set_screen_position(screen.x, screen.y);
            report.visible += 1;
        } else {
            marker.hide();
            report.hidden += 1;
        }
    }
    report
}
