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

//! Contracts for the rendering and camera collaborators.
//!
//! The swarm never owns a renderer. It asks a [`VisualFactory`] for one
//! [`VisualHandle`] per agent and afterwards only writes positions and colors
//! through that handle. Camera framing goes through a [`CameraRig`].

use serde::{Deserialize, Serialize};

use crate::error::VisualError;
use crate::math::{LinearRgba, Vec3};

/// A renderable object owned by the scene and driven by one agent.
///
/// Color is a direct capability of the handle, so callers never inspect or
/// downcast the underlying material.
pub trait VisualHandle {
    /// The position currently held by the visual object.
    fn position(&self) -> Vec3;

    /// Writes a new position to the visual object.
    fn set_position(&mut self, position: Vec3) -> Result<(), VisualError>;

    /// Replaces the visual object's color.
    fn set_color(&mut self, color: LinearRgba) -> Result<(), VisualError>;
}

/// Creates visual objects already attached to a renderable scene.
pub trait VisualFactory {
    /// The handle type returned for each spawned object.
    type Handle: VisualHandle;

    /// Instantiates a visual object at `position` tinted with `color`.
    fn spawn(&mut self, position: Vec3, color: LinearRgba) -> Result<Self::Handle, VisualError>;
}

/// A camera's eye position together with the point it orbits and looks at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// The eye position.
    pub position: Vec3,
    /// The orbit target the camera looks at.
    pub target: Vec3,
}

impl CameraPose {
    /// Creates a pose from an eye position and a look-at target.
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }
}

impl Default for CameraPose {
    /// Thirty units back on the Z axis, looking at the origin.
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 30.0), Vec3::ZERO)
    }
}

/// A camera with orbit controls.
pub trait CameraRig {
    /// The camera's eye position.
    fn position(&self) -> Vec3;

    /// Moves the camera's eye.
    fn set_position(&mut self, position: Vec3);

    /// The orbit controls' target point.
    fn target(&self) -> Vec3;

    /// Moves the orbit controls' target point.
    fn set_target(&mut self, target: Vec3);

    /// Orients the camera towards `point`.
    fn look_at(&mut self, point: Vec3);

    /// The current pose, built from [`position`](CameraRig::position) and
    /// [`target`](CameraRig::target).
    fn pose(&self) -> CameraPose {
        CameraPose::new(self.position(), self.target())
    }
}
