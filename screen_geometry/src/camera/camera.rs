/// CameraDescriptor: read-only view of the camera state the screen-space
/// helpers need.
///
/// The caller owns the camera and copies its pose and intrinsics here.
/// From that the descriptor derives the basis vectors, the view and
/// projection matrices, the standard frustum, and the screen-to-world
/// unprojection.
///
/// Conventions: right-handed, camera looks down its local -Z axis,
/// screen origin at the bottom-left corner, clip depth in [-1, 1].

use glam::{Mat3, Mat4, Quat, Vec3};
use crate::error::{Error, Result};
use crate::geometry::Frustum;
use super::screen::ScreenSize;

/// Projection mode with its mode-specific intrinsic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Vertical field of view, in radians
    Perspective { fov_y: f32 },
    /// Half-height of the view volume, in world units
    Orthographic { size: f32 },
}

/// Camera pose, projection, clip range, and target screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraDescriptor {
    position: Vec3,
    rotation: Quat,
    projection: Projection,
    near_clip: f32,
    far_clip: f32,
    screen: ScreenSize,
}

impl CameraDescriptor {
    /// Create a perspective camera at `position` with the given orientation.
    pub fn perspective(
        position: Vec3,
        rotation: Quat,
        fov_y: f32,
        near_clip: f32,
        far_clip: f32,
        screen: ScreenSize,
    ) -> Self {
        Self {
            position,
            rotation,
            projection: Projection::Perspective { fov_y },
            near_clip,
            far_clip,
            screen,
        }
    }

    /// Create an orthographic camera at `position` with the given orientation.
    ///
    /// `size` is the half-height of the view volume; the half-width follows
    /// from the screen aspect ratio.
    pub fn orthographic(
        position: Vec3,
        rotation: Quat,
        size: f32,
        near_clip: f32,
        far_clip: f32,
        screen: ScreenSize,
    ) -> Self {
        Self {
            position,
            rotation,
            projection: Projection::Orthographic { size },
            near_clip,
            far_clip,
            screen,
        }
    }

    /// Re-orient the camera so that it looks from its position toward `target`.
    ///
    /// When `up` is parallel to the view direction an arbitrary
    /// perpendicular axis is used for the camera right vector.
    pub fn looking_at(mut self, target: Vec3, up: Vec3) -> Self {
        self.rotation = look_rotation(target - self.position, up);
        self
    }

    // ===== GETTERS =====

    /// World-space position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// World-space orientation.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn is_orthographic(&self) -> bool {
        matches!(self.projection, Projection::Orthographic { .. })
    }

    pub fn near_clip(&self) -> f32 {
        self.near_clip
    }

    pub fn far_clip(&self) -> f32 {
        self.far_clip
    }

    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    /// Camera right axis (local +X) in world space.
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Camera up axis (local +Y) in world space.
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Viewing direction (local -Z) in world space.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
    }

    /// Set the near and far clip distances.
    pub fn set_clip_range(&mut self, near_clip: f32, far_clip: f32) {
        self.near_clip = near_clip;
        self.far_clip = far_clip;
    }

    pub fn set_screen(&mut self, screen: ScreenSize) {
        self.screen = screen;
    }

    // ===== DERIVED =====

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position).inverse()
    }

    /// Projection matrix (OpenGL depth range).
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix_to(self.far_clip)
    }

    fn projection_matrix_to(&self, far_clip: f32) -> Mat4 {
        let aspect = self.screen.aspect_ratio();
        match self.projection {
            Projection::Perspective { fov_y } => {
                Mat4::perspective_rh_gl(fov_y, aspect, self.near_clip, far_clip)
            }
            Projection::Orthographic { size } => {
                let half_width = size * aspect;
                Mat4::orthographic_rh_gl(
                    -half_width, half_width,
                    -size, size,
                    self.near_clip, far_clip,
                )
            }
        }
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Standard six-plane frustum, far plane at the far clip distance.
    ///
    /// The far clip must be finite and beyond the near clip; otherwise the
    /// projection matrix holds NaN or infinite terms and the planes are
    /// degenerate.
    pub fn frustum(&self) -> Frustum {
        self.frustum_to(self.far_clip)
    }

    /// Six-plane frustum with the far plane at `far_clip` instead of the
    /// camera's own far clip.
    pub(crate) fn frustum_to(&self, far_clip: f32) -> Frustum {
        Frustum::from_view_projection(&(self.projection_matrix_to(far_clip) * self.view_matrix()))
    }

    /// Unproject a screen point to world space.
    ///
    /// `screen.x` and `screen.y` are pixel coordinates (origin bottom-left),
    /// `screen.z` is the distance in front of the camera along `forward()`.
    pub fn screen_to_world_point(&self, screen: Vec3) -> Vec3 {
        let depth = screen.z;
        let ndc_x = screen.x / self.screen.width * 2.0 - 1.0;
        let ndc_y = screen.y / self.screen.height * 2.0 - 1.0;

        let half_height = match self.projection {
            Projection::Perspective { fov_y } => depth * (fov_y * 0.5).tan(),
            Projection::Orthographic { size } => size,
        };
        let half_width = half_height * self.screen.aspect_ratio();

        self.position
            + self.forward() * depth
            + self.right() * (ndc_x * half_width)
            + self.up() * (ndc_y * half_height)
    }

    /// Check that the plane math on this camera is well defined.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` for a zero-area screen, a non-positive
    /// near clip, an out-of-range field of view or orthographic size, or a
    /// non-unit rotation.
    ///
    /// The far clip is not checked: screen-space queries never test against
    /// it, so an infinite far clip is accepted. Callers of [`Self::frustum`]
    /// need a finite far clip beyond the near clip.
    pub fn validate(&self) -> Result<()> {
        if !self.screen.has_area() {
            return Err(Error::InvalidInput(format!(
                "screen must have a positive area, got {}x{}",
                self.screen.width, self.screen.height
            )));
        }
        if !(self.near_clip.is_finite() && self.near_clip > 0.0) {
            return Err(Error::InvalidInput(format!(
                "near clip must be positive, got {}",
                self.near_clip
            )));
        }
        match self.projection {
            Projection::Perspective { fov_y } => {
                if !(fov_y > 0.0 && fov_y < std::f32::consts::PI) {
                    return Err(Error::InvalidInput(format!(
                        "field of view must be in (0, pi) radians, got {}",
                        fov_y
                    )));
                }
            }
            Projection::Orthographic { size } => {
                if !(size.is_finite() && size > 0.0) {
                    return Err(Error::InvalidInput(format!(
                        "orthographic size must be positive, got {}",
                        size
                    )));
                }
            }
        }
        if !self.position.is_finite() || !self.rotation.is_normalized() {
            return Err(Error::InvalidInput(
                "camera pose must be finite with a unit rotation".to_string()
            ));
        }
        Ok(())
    }
}

impl Default for CameraDescriptor {
    /// Perspective camera at the origin looking down -Z, 60° vertical FOV.
    fn default() -> Self {
        Self::perspective(
            Vec3::ZERO,
            Quat::IDENTITY,
            60.0_f32.to_radians(),
            0.3,
            1000.0,
            ScreenSize::default(),
        )
    }
}

/// Rotation whose local -Z maps to `direction` and local +Y leans toward `up`.
fn look_rotation(direction: Vec3, up: Vec3) -> Quat {
    let forward = direction.normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let right = forward.cross(up);
    let right = if right.length_squared() > 1e-12 {
        right.normalize()
    } else {
        forward.any_orthonormal_vector()
    };
    let up = right.cross(forward);
    Quat::from_mat3(&Mat3::from_cols(right, up, -forward)).normalize()
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
