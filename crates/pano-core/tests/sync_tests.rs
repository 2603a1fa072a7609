// Host-side tests for the hotspot sync loop and the viewer session.

mod common;

use common::{assert_close, MarkerCall, RecordingMarker};
use glam::Vec3;
use pano_core::*;

fn desc(id: &str, position: &str, popup: Option<usize>) -> HotspotDescriptor {
    HotspotDescriptor {
        id: id.to_string(),
        position: position.to_string(),
        popup,
    }
}

fn session() -> ViewerSession {
    ViewerSession::new(
        vec![
            desc("ahead", "250,0,0", Some(0)),
            desc("behind", "-250,0,0", Some(1)),
            desc("right", "400,0,100", None),
        ],
        2,
        Viewport::new(800.0, 600.0),
    )
    .unwrap()
}

#[test]
fn visible_markers_are_shown_then_moved_and_hidden_ones_hidden() {
    let mut s = session();
    let mut markers = vec![RecordingMarker::default(); 3];
    let report = s.sync(&mut markers);

    assert_eq!(report, SyncReport { visible: 2, hidden: 1 });
    assert_eq!(markers[0].calls.len(), 2);
    assert_eq!(markers[0].calls[0], MarkerCall::Show);
    let (x, y) = markers[0].position.unwrap();
    assert_close(x, 400.0, 1e-2);
    assert_close(y, 300.0, 1e-2);

    assert_eq!(markers[1].calls, vec![MarkerCall::Hide]);
    assert!(!markers[1].shown);

    assert!(markers[2].shown);
    assert!(markers[2].position.unwrap().0 > 400.0);
}

#[test]
fn sync_matches_direct_projection() {
    let mut s = session();
    let mut markers = vec![RecordingMarker::default(); 3];
    s.sync(&mut markers);
    let pose = s.pose();
    let expected = project(Vec3::new(400.0, 0.0, 100.0), &pose, s.viewport());
    let (x, y) = markers[2].position.unwrap();
    assert_close(x, expected.x, 1e-3);
    assert_close(y, expected.y, 1e-3);
}

#[test]
fn sync_orients_billboards_towards_the_eye() {
    let mut s = session();
    let mut markers = vec![RecordingMarker::default(); 3];
    s.sync(&mut markers);
    for hotspot in s.hotspots.iter() {
        let expected = (-hotspot.anchor).normalize();
        assert!((hotspot.billboard.facing() - expected).length() < 1e-4);
    }
}

#[test]
fn extra_markers_are_untouched_and_missing_ones_skipped() {
    let mut s = session();
    let mut many = vec![RecordingMarker::default(); 5];
    let report = s.sync(&mut many);
    assert_eq!(report.visible + report.hidden, 3);
    assert!(many[3].calls.is_empty());
    assert!(many[4].calls.is_empty());

    let mut few = vec![RecordingMarker::default(); 1];
    let report = s.sync(&mut few);
    assert_eq!(report, SyncReport { visible: 1, hidden: 0 });
}

#[test]
fn turning_around_swaps_visibility() {
    let mut s = session();
    let mut markers = vec![RecordingMarker::default(); 3];
    s.sync(&mut markers);

    assert!(s.pointer_down(PointerSample::primary(0.0, 0.0)));
    assert!(s.pointer_move(PointerSample::primary(-1_800.0, 0.0)));
    s.sync(&mut markers);
    assert!(s.pointer_up(PointerSample::primary(-1_800.0, 0.0)));

    assert!(!markers[0].shown);
    assert!(markers[1].shown);
    assert!(!markers[2].shown);
    let (x, y) = markers[1].position.unwrap();
    assert_close(x, 400.0, 1e-2);
    assert_close(y, 300.0, 1e-2);
}

#[test]
fn moves_after_pointer_up_do_not_need_a_sync() {
    let mut s = session();
    s.pointer_down(PointerSample::primary(10.0, 10.0));
    s.pointer_up(PointerSample::primary(10.0, 10.0));
    assert!(!s.pointer_move(PointerSample::primary(300.0, 10.0)));
    assert_eq!(s.camera.lon, 0.0);
}

#[test]
fn resize_reports_changes_and_doubles_pixels() {
    let mut s = session();
    let mut markers = vec![RecordingMarker::default(); 3];
    s.sync(&mut markers);
    let (x1, y1) = markers[2].position.unwrap();

    assert!(!s.resize(800.0, 600.0));
    assert!(s.resize(1600.0, 1200.0));
    s.sync(&mut markers);
    let (x2, y2) = markers[2].position.unwrap();
    assert_close(x2, x1 * 2.0, 1e-2);
    assert_close(y2, y1 * 2.0, 1e-2);
}

#[test]
fn wheel_zoom_always_requests_sync() {
    let mut s = session();
    assert!(s.wheel(-200.0));
    assert_close(s.camera.fov_deg, 65.0, 1e-4);
    let mut markers = vec![RecordingMarker::default(); 3];
    s.sync(&mut markers);
    // Narrower view pushes the off-centre marker outward
    assert!(markers[2].position.unwrap().0 > 500.0);
}

#[test]
fn malformed_hotspot_fails_session_setup() {
    let err = ViewerSession::new(
        vec![desc("bad", "1;2;3", None)],
        0,
        Viewport::default(),
    )
    .unwrap_err();
    assert!(matches!(err, HotspotError::WrongComponentCount { found: 1, .. }));
}

#[test]
fn hotspot_click_toggles_its_popup() {
    let mut s = session();
    let mut popups = vec![RecordingMarker::default(); 2];

    let change = s.trigger_popup(0, &mut popups);
    assert_eq!(change.show, Some(0));
    assert!(popups[0].shown);

    s.trigger_popup(1, &mut popups);
    assert!(!popups[0].shown);
    assert!(popups[1].shown);

    // Hotspot without a popup changes nothing
    let change = s.trigger_popup(2, &mut popups);
    assert!(change.is_empty());
    assert!(popups[1].shown);
}
