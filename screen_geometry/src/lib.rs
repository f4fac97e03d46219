/*!
# Screen Geometry

Screen-space and camera geometry helpers.

Every operation is a pure function over caller-supplied value types: the
caller copies its camera and scene state into a [`CameraDescriptor`] and
[`SceneObject`]s, and the helpers answer geometric questions about them.

## Overview

- **is_target_on_screen**: frustum test with the far clip treated as infinite
  (perspective and orthographic)
- **is_object_with_tag_inside_volume**: tag-filtered AABB vs plane-set test
- **classify_screen_side / target_side**: which screen edge an off-screen
  target lies beyond
- **aspect_ratio_angle**: angle between the screen x-axis and its diagonal

[`CameraDescriptor`]: crate::camera::CameraDescriptor
[`SceneObject`]: crate::monitor::SceneObject
*/

// Internal modules
mod error;
pub mod camera;
pub mod geometry;
pub mod log;
pub mod monitor;

// Main screen namespace module
pub mod screen {
    // Error types
    pub use crate::error::{Error, Result};

    // Camera description
    pub use crate::camera::{CameraDescriptor, Projection, ScreenSize};

    // Geometry primitives
    pub use crate::geometry::{
        Frustum, Plane, AABB, planes_intersect_aabb,
        PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
    };

    // Screen-space helpers
    pub use crate::monitor::*;

    // Logging sub-module (types and logger slot, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, set_min_severity, min_severity,
        };
    }
}

// Re-export math library at crate root
pub use glam;
