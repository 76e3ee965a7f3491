// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A perspective camera paired with orbit controls.

use aviary_core::math::Vec3;
use aviary_core::scene::{CameraPose, CameraRig};

/// A camera whose eye orbits a target point.
///
/// The orbit target and the point the camera is oriented towards are kept
/// separately, the same way orbit controls and the camera's own `look_at` are
/// distinct in most scene graphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    position: Vec3,
    target: Vec3,
    looking_at: Vec3,
    forward: Vec3,
}

impl OrbitCamera {
    /// Creates a camera at `pose.position` looking at `pose.target`.
    pub fn new(pose: CameraPose) -> Self {
        let mut camera = Self {
            position: pose.position,
            target: pose.target,
            looking_at: pose.target,
            forward: -Vec3::Z,
        };
        camera.look_at(pose.target);
        camera
    }

    /// The point the camera was last oriented towards.
    pub fn looking_at(&self) -> Vec3 {
        self.looking_at
    }

    /// The unit view direction.
    pub fn forward(&self) -> Vec3 {
        self.forward
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(CameraPose::default())
    }
}

impl CameraRig for OrbitCamera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn target(&self) -> Vec3 {
        self.target
    }

    fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    fn look_at(&mut self, point: Vec3) {
        self.looking_at = point;
        let direction = (point - self.position).normalize();
        // Looking at our own position leaves the previous orientation in place.
        if direction != Vec3::ZERO {
            self.forward = direction;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_looks_at_target() {
        let camera = OrbitCamera::new(CameraPose::new(Vec3::new(0.0, 0.0, 30.0), Vec3::ZERO));
        assert_eq!(camera.looking_at(), Vec3::ZERO);
        assert!(camera.forward().abs_diff_eq(-Vec3::Z, 1e-6));
        assert_eq!(camera.pose(), CameraPose::default());
    }

    #[test]
    fn test_look_at_updates_orientation_only() {
        let mut camera = OrbitCamera::default();
        camera.set_position(Vec3::new(10.0, 0.0, 0.0));
        camera.look_at(Vec3::ZERO);
        assert!(camera.forward().abs_diff_eq(-Vec3::X, 1e-6));
        assert_eq!(camera.target(), Vec3::ZERO);
    }

    #[test]
    fn test_look_at_own_position_keeps_forward() {
        let mut camera = OrbitCamera::default();
        let before = camera.forward();
        camera.look_at(camera.position());
        assert_eq!(camera.forward(), before);
    }
}
