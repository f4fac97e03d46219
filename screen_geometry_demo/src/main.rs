//! Screen geometry demo
//!
//! Orbits a target around a perspective and an orthographic camera and logs,
//! at each step, whether it is on screen and otherwise which edge an
//! off-screen indicator should point to.

use screen_geometry::glam::{Quat, Vec3};
use screen_geometry::screen::{self, CameraDescriptor, ScreenSize, SceneObject, AABB};
use screen_geometry::screen::log::{self, LogSeverity};
use screen_geometry::{screen_error, screen_info};

const SOURCE: &str = "demo";
const STEPS: usize = 12;
const ORBIT_RADIUS: f32 = 40.0;

fn main() {
    log::set_min_severity(LogSeverity::Info);

    let screen_size = ScreenSize::new(1920.0, 1080.0);
    screen_info!(
        SOURCE,
        "Screen {}x{}, diagonal angle {:.2}°",
        screen_size.width,
        screen_size.height,
        screen::aspect_ratio_angle(&screen_size)
    );

    let cameras = [
        (
            "perspective",
            CameraDescriptor::perspective(
                Vec3::ZERO,
                Quat::IDENTITY,
                60.0_f32.to_radians(),
                0.3,
                25.0,
                screen_size,
            ),
        ),
        (
            "orthographic",
            CameraDescriptor::orthographic(Vec3::ZERO, Quat::IDENTITY, 15.0, 0.3, 25.0, screen_size),
        ),
    ];

    for (name, camera) in &cameras {
        screen_info!(SOURCE, "--- {} camera (far clip {}) ---", name, camera.far_clip());
        // Orbit in the plane 30 units in front of the camera, beyond the far clip
        let orbit_point = |step: usize| {
            let angle = step as f32 / STEPS as f32 * std::f32::consts::TAU;
            Vec3::new(angle.cos() * ORBIT_RADIUS, angle.sin() * ORBIT_RADIUS * 0.5, -30.0)
        };
        let mut target = SceneObject::from_bounds(
            "Beacon",
            AABB::from_center_extents(orbit_point(0), Vec3::splat(1.0)),
        );

        for step in 0..STEPS {
            if step > 0 {
                target.translate(orbit_point(step) - orbit_point(step - 1));
            }
            if let Err(e) = report(camera, &target) {
                screen_error!(SOURCE, "Step {} failed: {}", step, e);
            }
        }
    }

    let target = SceneObject::from_bounds("Beacon", AABB::from_center_extents(Vec3::new(0.0, 0.0, -30.0), Vec3::ONE));
    let (_, camera) = &cameras[0];
    screen_info!(
        SOURCE,
        "Dead-center beacon beyond the far clip: regular frustum {}, unbounded test {:?}",
        camera.frustum().intersects_aabb(target.bounds()),
        screen::is_target_on_screen(camera, &target)
    );
}

fn report(camera: &CameraDescriptor, target: &SceneObject) -> screen::Result<()> {
    let position = target.position();
    if screen::is_target_on_screen(camera, target)? {
        screen_info!(SOURCE, "({:>6.1}, {:>6.1}) on screen", position.x, position.y);
    } else {
        let side = screen::target_side(camera, position)?;
        screen_info!(
            SOURCE,
            "({:>6.1}, {:>6.1}) off screen, bearing {:>5.1}° -> {:?}",
            position.x,
            position.y,
            screen::bearing_angle(camera, position),
            side
        );
    }
    Ok(())
}
