use glam::{Quat, Vec3};
use crate::camera::{CameraDescriptor, ScreenSize};
use super::*;

const EPSILON: f32 = 1e-3;

// ============================================================================
// aspect_ratio_angle
// ============================================================================

#[test]
fn test_aspect_ratio_angle_full_hd() {
    let angle = aspect_ratio_angle(&ScreenSize::new(1920.0, 1080.0));
    let expected = 1080.0_f32.atan2(1920.0).to_degrees();

    assert!((angle - expected).abs() < 1e-6);
    assert!((angle - 29.357).abs() < EPSILON);
}

#[test]
fn test_aspect_ratio_angle_square_and_portrait() {
    assert!((aspect_ratio_angle(&ScreenSize::new(512.0, 512.0)) - 45.0).abs() < 1e-5);
    assert!(aspect_ratio_angle(&ScreenSize::new(1080.0, 1920.0)) > 45.0);
}

// ============================================================================
// classify_screen_side
// ============================================================================

#[test]
fn test_cardinal_bearings() {
    assert_eq!(classify_screen_side(0.0, 30.0), Side::Right);
    assert_eq!(classify_screen_side(90.0, 30.0), Side::Up);
    assert_eq!(classify_screen_side(180.0, 30.0), Side::Left);
    assert_eq!(classify_screen_side(270.0, 30.0), Side::Down);
}

#[test]
fn test_lower_bounds_inclusive_upper_exclusive() {
    // Right wraps through zero: [330, 360) and [0, 30)
    assert_eq!(classify_screen_side(330.0, 30.0), Side::Right);
    assert_eq!(classify_screen_side(29.999, 30.0), Side::Right);
    assert_eq!(classify_screen_side(30.0, 30.0), Side::Up);
    assert_eq!(classify_screen_side(149.999, 30.0), Side::Up);
    assert_eq!(classify_screen_side(150.0, 30.0), Side::Left);
    assert_eq!(classify_screen_side(209.999, 30.0), Side::Left);
    assert_eq!(classify_screen_side(210.0, 30.0), Side::Down);
    assert_eq!(classify_screen_side(329.999, 30.0), Side::Down);
}

#[test]
fn test_out_of_range_angles_fall_on_right() {
    assert_eq!(classify_screen_side(-10.0, 30.0), Side::Right);
    assert_eq!(classify_screen_side(400.0, 30.0), Side::Right);
}

#[test]
fn test_nan_yields_none() {
    assert_eq!(classify_screen_side(f32::NAN, 30.0), Side::None);
    assert_eq!(classify_screen_side(90.0, f32::NAN), Side::None);
    assert_eq!(Side::default(), Side::None);
}

// ============================================================================
// bearing_angle / target_side
// ============================================================================

fn test_camera() -> CameraDescriptor {
    CameraDescriptor::perspective(
        Vec3::new(0.0, 0.0, 10.0),
        Quat::IDENTITY,
        60.0_f32.to_radians(),
        0.3,
        100.0,
        ScreenSize::new(1920.0, 1080.0),
    )
}

#[test]
fn test_bearing_of_camera_axes() {
    let camera = test_camera();
    let ahead = camera.position() + camera.forward() * 5.0;

    assert!(bearing_angle(&camera, ahead + camera.right()).abs() < EPSILON);
    assert!((bearing_angle(&camera, ahead + camera.up()) - 90.0).abs() < EPSILON);
    assert!((bearing_angle(&camera, ahead - camera.right()) - 180.0).abs() < EPSILON);
    assert!((bearing_angle(&camera, ahead - camera.up()) - 270.0).abs() < EPSILON);
}

#[test]
fn test_bearing_on_forward_axis_is_zero() {
    let camera = test_camera();

    assert_eq!(bearing_angle(&camera, Vec3::new(0.0, 0.0, -50.0)), 0.0);
    assert_eq!(bearing_angle(&camera, camera.position()), 0.0);
}

#[test]
fn test_bearing_stays_below_360() {
    let camera = test_camera();
    let angle = bearing_angle(&camera, Vec3::new(1.0, -1e-9, 0.0));

    assert!((0.0..360.0).contains(&angle));
}

#[test]
fn test_bearing_follows_camera_roll() {
    let camera = CameraDescriptor::perspective(
        Vec3::ZERO,
        Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
        60.0_f32.to_radians(),
        0.3,
        100.0,
        ScreenSize::new(1920.0, 1080.0),
    );

    // Rolled 90° CCW: world +Y is now screen right
    assert!(bearing_angle(&camera, Vec3::new(0.0, 5.0, -5.0)).abs() < EPSILON);
}

#[test]
fn test_target_side_uses_screen_diagonal() {
    let camera = test_camera();

    // 40° bearing: Up on a 16:9 screen (diagonal ~29.4°), Right on a portrait one
    let point = Vec3::new(40.0_f32.to_radians().cos(), 40.0_f32.to_radians().sin(), 0.0);
    assert_eq!(target_side(&camera, point), Ok(Side::Up));

    let mut portrait = camera;
    portrait.set_screen(ScreenSize::new(1080.0, 1920.0));
    assert_eq!(target_side(&portrait, point), Ok(Side::Right));
}

#[test]
fn test_target_side_each_edge() {
    let camera = test_camera();

    assert_eq!(target_side(&camera, Vec3::new(100.0, 0.0, 0.0)), Ok(Side::Right));
    assert_eq!(target_side(&camera, Vec3::new(0.0, 100.0, 0.0)), Ok(Side::Up));
    assert_eq!(target_side(&camera, Vec3::new(-100.0, 0.0, 0.0)), Ok(Side::Left));
    assert_eq!(target_side(&camera, Vec3::new(0.0, -100.0, 0.0)), Ok(Side::Down));
}

#[test]
fn test_target_side_invalid_camera() {
    let mut camera = test_camera();
    camera.set_clip_range(-1.0, 100.0);

    assert!(target_side(&camera, Vec3::ZERO).is_err());
}
