use glam::{Mat4, Quat, Vec3};
use super::*;

const EPSILON: f32 = 1e-5;

#[test]
fn test_new_orders_corners() {
    let aabb = AABB::new(Vec3::new(1.0, -2.0, 3.0), Vec3::new(-1.0, 2.0, -3.0));

    assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, -3.0));
    assert_eq!(aabb.max, Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_center_and_extents() {
    let aabb = AABB::from_center_extents(Vec3::new(10.0, 0.0, -5.0), Vec3::new(1.0, 2.0, 3.0));

    assert_eq!(aabb.center(), Vec3::new(10.0, 0.0, -5.0));
    assert_eq!(aabb.extents(), Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_negative_extents_are_mirrored() {
    let aabb = AABB::from_center_extents(Vec3::ZERO, Vec3::new(-1.0, 1.0, -1.0));

    assert_eq!(aabb.min, Vec3::splat(-1.0));
    assert_eq!(aabb.max, Vec3::splat(1.0));
}

#[test]
fn test_positive_vertex_follows_direction() {
    let aabb = AABB::new(Vec3::splat(-1.0), Vec3::splat(2.0));

    assert_eq!(aabb.positive_vertex(Vec3::new(1.0, -1.0, 0.0)), Vec3::new(2.0, -1.0, 2.0));
    assert_eq!(aabb.positive_vertex(-Vec3::Z), Vec3::new(2.0, 2.0, -1.0));
}

#[test]
fn test_contains_point_inclusive() {
    let aabb = AABB::new(Vec3::ZERO, Vec3::ONE);

    assert!(aabb.contains_point(Vec3::splat(0.5)));
    assert!(aabb.contains_point(Vec3::ONE));
    assert!(!aabb.contains_point(Vec3::new(1.01, 0.5, 0.5)));
}

#[test]
fn test_transformed_translation() {
    let aabb = AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0));
    let world = aabb.transformed(&Mat4::from_translation(Vec3::new(5.0, 0.0, -2.0)));

    assert_eq!(world.min, Vec3::new(4.0, -1.0, -3.0));
    assert_eq!(world.max, Vec3::new(6.0, 1.0, -1.0));
}

#[test]
fn test_transformed_rotation_grows_box() {
    let aabb = AABB::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
    let rotation = Mat4::from_quat(Quat::from_rotation_y(std::f32::consts::FRAC_PI_4));
    let world = aabb.transformed(&rotation);

    let expected = std::f32::consts::SQRT_2;
    assert!((world.max.x - expected).abs() < EPSILON);
    assert!((world.min.z + expected).abs() < EPSILON);
    assert!((world.max.y - 1.0).abs() < EPSILON);
}
