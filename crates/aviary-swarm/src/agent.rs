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

//! A single drone's positional and visual state.

use aviary_core::animation::Tweener;
use aviary_core::math::{LinearRgba, Vec3};
use aviary_core::scene::VisualHandle;

use crate::error::SwarmError;
use crate::idle::IdleMotion;
use crate::transition::{TransitionDriver, TransitionOutcome};

/// One agent of a swarm.
///
/// `current_position` is the authoritative position: transitions and idle
/// motion mutate it, and [`sync_visual`](Agent::sync_visual) pushes it to the
/// visual handle once per frame.
#[derive(Debug)]
pub struct Agent<H> {
    id: usize,
    current_position: Vec3,
    target_position: Vec3,
    initial_position: Vec3,
    color: LinearRgba,
    visual: H,
}

impl<H: VisualHandle> Agent<H> {
    /// Creates an agent resting at `position`, which also becomes its home.
    pub fn new(id: usize, position: Vec3, color: LinearRgba, visual: H) -> Self {
        Self {
            id,
            current_position: position,
            target_position: position,
            initial_position: position,
            color,
            visual,
        }
    }

    /// The agent's stable index in its swarm.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Where the agent is this frame.
    pub fn current_position(&self) -> Vec3 {
        self.current_position
    }

    /// The most recently requested destination.
    pub fn target_position(&self) -> Vec3 {
        self.target_position
    }

    /// The position the agent was created at.
    pub fn initial_position(&self) -> Vec3 {
        self.initial_position
    }

    /// The agent's color.
    pub fn color(&self) -> LinearRgba {
        self.color
    }

    /// The visual handle driven by this agent.
    pub fn visual(&self) -> &H {
        &self.visual
    }

    /// Adds this frame's idle perturbation to the vertical position.
    ///
    /// The offset is added, not assigned, so it accumulates across frames.
    pub fn apply_idle_offset(&mut self, motion: &IdleMotion, time: f64, index: usize) {
        self.current_position.y += motion.offset(time, index);
    }

    /// Records `position` as the destination and asks `driver` to move there
    /// over `duration` seconds, replacing any transition already in flight.
    ///
    /// The new transition starts from the current position, so superseding a
    /// running transition never makes the agent jump.
    pub fn set_target<T: Tweener>(
        &mut self,
        position: Vec3,
        duration: f32,
        driver: &mut TransitionDriver<T>,
    ) -> Result<(), SwarmError> {
        let outcome =
            driver.request_transition(self.id, self.current_position, position, duration)?;
        self.target_position = position;
        if outcome == TransitionOutcome::Snapped {
            self.current_position = position;
        }
        Ok(())
    }

    /// Recolors the agent immediately.
    pub fn set_color(&mut self, color: LinearRgba) -> Result<(), SwarmError> {
        self.visual
            .set_color(color)
            .map_err(|source| SwarmError::Visual {
                agent: self.id,
                source,
            })?;
        self.color = color;
        Ok(())
    }

    /// Writes the authoritative position of a running transition.
    pub(crate) fn write_transition_position(&mut self, position: Vec3) {
        self.current_position = position;
    }

    /// Pushes the current position to the visual handle.
    pub fn sync_visual(&mut self) -> Result<(), SwarmError> {
        self.visual
            .set_position(self.current_position)
            .map_err(|source| SwarmError::Visual {
                agent: self.id,
                source,
            })
    }
}
