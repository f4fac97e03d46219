//! Camera module: read-only camera description for screen-space queries.
//!
//! The library does NOT own or drive cameras. The caller copies its
//! camera pose and intrinsics into a `CameraDescriptor` per query.

mod camera;
mod screen;

pub use camera::{CameraDescriptor, Projection};
pub use screen::ScreenSize;
