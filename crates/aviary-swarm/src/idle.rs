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

//! Continuous "breathing" motion applied to every agent each frame.

use aviary_core::scene::VisualHandle;
use serde::{Deserialize, Serialize};

use crate::swarm::Swarm;

/// Parameters of the per-frame vertical perturbation.
///
/// For agent `i` at time `t` the frame's offset is
/// `sin(t + i · phase_step) · amplitude`. Offsets are added to the current
/// position every frame, so the motion drifts rather than oscillating around
/// a fixed point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdleMotion {
    /// Peak offset per frame, in world units.
    pub amplitude: f64,
    /// Phase shift between consecutive agents, in radians.
    pub phase_step: f64,
}

impl IdleMotion {
    /// The default motion: `amplitude = 0.001`, `phase_step = 0.0001`.
    pub const fn new() -> Self {
        Self {
            amplitude: 0.001,
            phase_step: 0.0001,
        }
    }

    /// A motion that never moves anything.
    pub const fn still() -> Self {
        Self {
            amplitude: 0.0,
            phase_step: 0.0,
        }
    }

    /// The vertical offset for agent `index` at `time` seconds.
    ///
    /// Evaluated in `f64` because `time` is usually wall-clock seconds.
    #[inline]
    pub fn offset(&self, time: f64, index: usize) -> f32 {
        ((time + index as f64 * self.phase_step).sin() * self.amplitude) as f32
    }

    /// Applies one frame of idle motion to every agent of `swarm`.
    ///
    /// Agents are independent of each other, so the iteration order carries
    /// no meaning.
    pub fn apply<H: VisualHandle>(&self, swarm: &mut Swarm<H>, time: f64) {
        log::trace!("Applying idle motion at t={time:.3} to {} agents.", swarm.len());
        for agent in swarm.iter_mut() {
            let index = agent.id();
            agent.apply_idle_offset(self, time, index);
        }
    }
}

impl Default for IdleMotion {
    fn default() -> Self {
        Self::new()
    }
}
