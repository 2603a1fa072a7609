// Host-side tests for the orbit camera: drag math, zoom coupling and clamps.

mod common;

use common::assert_close;
use pano_core::*;
use rand::prelude::*;

#[test]
fn default_camera_looks_down_positive_x() {
    let mut cam = OrbitCamera::default();
    let dir = cam.look_direction();
    assert_close(dir.x, SPHERE_RADIUS, 1e-3);
    assert_close(dir.y, 0.0, 1e-3);
    assert_close(dir.z, 0.0, 1e-3);
    assert_close(cam.fov_deg, 75.0, 0.0);
    assert_close(cam.speed, 0.1, 0.0);
}

#[test]
fn positive_lat_looks_up_and_lon_90_looks_down_positive_z() {
    let up = spherical_direction(0.0, 45.0);
    assert!(up.y > 0.7 && up.x > 0.7);
    let side = spherical_direction(90.0, 0.0);
    assert_close(side.z, 1.0, 1e-5);
    assert_close(side.x, 0.0, 1e-5);
}

#[test]
fn drag_rotates_relative_to_pointer_down() {
    let mut cam = OrbitCamera::default();
    assert!(cam.begin_drag(PointerSample::primary(100.0, 100.0)));
    assert!(cam.drag_to(PointerSample::primary(50.0, 130.0)));
    // lon = (down_x - x) * speed, lat = (y - down_y) * speed
    assert_close(cam.lon, 5.0, 1e-5);
    assert_close(cam.lat, 3.0, 1e-5);

    // Moves are measured from pointer-down, not accumulated per event
    assert!(cam.drag_to(PointerSample::primary(90.0, 100.0)));
    assert_close(cam.lon, 1.0, 1e-5);
    assert_close(cam.lat, 0.0, 1e-5);
}

#[test]
fn second_drag_starts_from_previous_angles() {
    let mut cam = OrbitCamera::default();
    cam.begin_drag(PointerSample::primary(0.0, 0.0));
    cam.drag_to(PointerSample::primary(-100.0, 0.0));
    cam.end_drag(PointerSample::primary(-100.0, 0.0));
    assert_close(cam.lon, 10.0, 1e-5);

    cam.begin_drag(PointerSample::primary(200.0, 200.0));
    cam.drag_to(PointerSample::primary(100.0, 200.0));
    assert_close(cam.lon, 20.0, 1e-4);
}

#[test]
fn moves_without_a_drag_are_ignored() {
    let mut cam = OrbitCamera::default();
    assert!(!cam.drag_to(PointerSample::primary(500.0, 500.0)));
    assert_eq!(cam.lon, 0.0);
    assert_eq!(cam.lat, 0.0);

    cam.begin_drag(PointerSample::primary(0.0, 0.0));
    cam.end_drag(PointerSample::primary(0.0, 0.0));
    assert!(!cam.is_dragging());
    assert!(!cam.drag_to(PointerSample::primary(-300.0, 0.0)));
    assert_eq!(cam.lon, 0.0);
}

#[test]
fn non_primary_pointers_do_not_start_move_or_end_drags() {
    let mut cam = OrbitCamera::default();
    let secondary = PointerSample {
        x: 10.0,
        y: 10.0,
        primary: false,
    };
    assert!(!cam.begin_drag(secondary));
    assert!(!cam.is_dragging());

    cam.begin_drag(PointerSample::primary(0.0, 0.0));
    assert!(!cam.drag_to(PointerSample {
        x: -400.0,
        y: 0.0,
        primary: false
    }));
    assert_eq!(cam.lon, 0.0);
    assert!(!cam.end_drag(secondary));
    assert!(cam.is_dragging());
}

#[test]
fn drag_clamps_elevation() {
    let mut cam = OrbitCamera::default();
    cam.begin_drag(PointerSample::primary(0.0, 0.0));
    cam.drag_to(PointerSample::primary(0.0, 10_000.0));
    assert_eq!(cam.lat, LAT_MAX_DEG);
    cam.drag_to(PointerSample::primary(0.0, -10_000.0));
    assert_eq!(cam.lat, LAT_MIN_DEG);
}

#[test]
fn look_direction_reclamps_corrupted_elevation() {
    let mut cam = OrbitCamera::default();
    cam.lat = 400.0;
    let dir = cam.look_direction();
    assert_eq!(cam.lat, 85.0);
    assert_close(dir.y, SPHERE_RADIUS * 85f32.to_radians().sin(), 1e-2);

    cam.lat = f32::NAN;
    let dir = cam.look_direction();
    assert!(dir.is_finite());
    assert_eq!(cam.lat, 0.0);
}

#[test]
fn elevation_stays_clamped_for_random_drags() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut cam = OrbitCamera::default();
    for _ in 0..2_000 {
        let x = rng.gen_range(-1.0e5..1.0e5);
        let y = rng.gen_range(-1.0e5..1.0e5);
        if rng.gen_bool(0.1) {
            cam.end_drag(PointerSample::primary(x, y));
            cam.begin_drag(PointerSample::primary(x, y));
        }
        cam.drag_to(PointerSample::primary(x, y));
        assert!((LAT_MIN_DEG..=LAT_MAX_DEG).contains(&cam.lat));
        let mut poked = cam.clone();
        poked.lat = rng.gen_range(-1.0e4..1.0e4);
        poked.look_direction();
        assert!((LAT_MIN_DEG..=LAT_MAX_DEG).contains(&poked.lat));
    }
}

#[test]
fn zoom_moves_fov_and_speed_together() {
    let mut cam = OrbitCamera::default();
    cam.zoom(-100.0);
    assert_close(cam.fov_deg, 70.0, 1e-4);
    assert_close(cam.speed, 0.09, 1e-6);

    cam.zoom(40.0);
    assert_close(cam.fov_deg, 72.0, 1e-4);
    assert_close(cam.speed, 0.094, 1e-6);
}

#[test]
fn zoom_clamps_each_range_independently() {
    let mut cam = OrbitCamera::default();
    cam.zoom(-1_000.0);
    // fov 75 - 50 = 25 is in range, speed 0.1 - 0.1 = 0 hits its floor
    assert_close(cam.fov_deg, 25.0, 1e-4);
    assert_eq!(cam.speed, SPEED_MIN);

    cam.zoom(-10_000.0);
    assert_eq!(cam.fov_deg, FOV_MIN_DEG);
    assert_eq!(cam.speed, SPEED_MIN);

    cam.zoom(10_000.0);
    assert_eq!(cam.fov_deg, FOV_MAX_DEG);
    assert_eq!(cam.speed, SPEED_MAX);
}

#[test]
fn fov_and_speed_stay_clamped_for_random_wheels() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut cam = OrbitCamera::default();
    for _ in 0..2_000 {
        cam.zoom(rng.gen_range(-2_000.0..2_000.0));
        assert!((FOV_MIN_DEG..=FOV_MAX_DEG).contains(&cam.fov_deg));
        assert!((SPEED_MIN..=SPEED_MAX).contains(&cam.speed));
    }
    cam.zoom(f32::NAN);
    assert!(cam.fov_deg.is_finite() && cam.speed.is_finite());
}

#[test]
fn pose_uses_viewport_aspect_and_clip_planes() {
    let mut cam = OrbitCamera::new(0.0, 0.0, 60.0);
    let pose = cam.pose(Viewport::new(1600.0, 900.0));
    assert_close(pose.aspect, 16.0 / 9.0, 1e-6);
    assert_close(pose.fovy_radians, 60f32.to_radians(), 1e-6);
    assert_eq!(pose.znear, Z_NEAR);
    assert_eq!(pose.zfar, Z_FAR);
    assert_eq!(pose.eye, glam::Vec3::ZERO);
    assert_close(pose.forward().x, 1.0, 1e-5);
}
