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

//! The ordered, fixed-size collection of agents.

use aviary_core::math::{LinearRgba, Vec3};
use aviary_core::scene::{VisualFactory, VisualHandle};
use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::error::SwarmError;
use crate::formation;

/// How agents are tinted at creation: hue walks the color wheel by index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// HSL saturation in `[0, 1]`.
    pub saturation: f32,
    /// HSL lightness in `[0, 1]`.
    pub lightness: f32,
    /// Alpha of every agent.
    pub opacity: f32,
}

impl Palette {
    /// 70% saturation, 50% lightness, 90% opacity.
    pub const fn new() -> Self {
        Self {
            saturation: 0.7,
            lightness: 0.5,
            opacity: 0.9,
        }
    }

    /// The color of agent `index` out of `count`: hue `index / count · 360°`.
    pub fn color_for(&self, index: usize, count: usize) -> LinearRgba {
        let hue = if count == 0 {
            0.0
        } else {
            index as f32 / count as f32 * 360.0
        };
        LinearRgba::from_hsl(hue, self.saturation, self.lightness).with_alpha(self.opacity)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

/// An ordered collection of agents.
///
/// Agent `i` is always at index `i`; formation math uses that index. The
/// agent count is fixed at creation.
#[derive(Debug)]
pub struct Swarm<H> {
    agents: Vec<Agent<H>>,
}

impl<H: VisualHandle> Swarm<H> {
    /// Creates `count` agents laid out on a grid with `spacing` between
    /// neighbours, spawning one visual per agent through `factory`.
    ///
    /// # Errors
    /// Fails if the grid parameters are invalid or a visual cannot be spawned.
    pub fn create<F>(
        factory: &mut F,
        count: usize,
        spacing: f32,
        palette: &Palette,
    ) -> Result<Self, SwarmError>
    where
        F: VisualFactory<Handle = H>,
    {
        let layout = formation::grid(count, spacing)?;
        let mut agents = Vec::with_capacity(count);
        for (id, position) in layout.into_iter().enumerate() {
            let color = palette.color_for(id, count);
            let visual = factory
                .spawn(position, color)
                .map_err(|source| SwarmError::Visual { agent: id, source })?;
            agents.push(Agent::new(id, position, color, visual));
        }
        log::info!("Swarm created with {count} agents (grid spacing {spacing}).");
        Ok(Self { agents })
    }

    /// Number of agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// A swarm built by [`create`](Swarm::create) is never empty.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// The agent with index `id`.
    pub fn get(&self, id: usize) -> Option<&Agent<H>> {
        self.agents.get(id)
    }

    /// Mutable access to the agent with index `id`.
    pub fn get_mut(&mut self, id: usize) -> Option<&mut Agent<H>> {
        self.agents.get_mut(id)
    }

    /// Iterates agents in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Agent<H>> {
        self.agents.iter()
    }

    /// Iterates agents mutably in index order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Agent<H>> {
        self.agents.iter_mut()
    }

    /// Every agent's home position, in index order.
    pub fn initial_positions(&self) -> Vec<Vec3> {
        self.agents.iter().map(Agent::initial_position).collect()
    }

    /// Every agent's current destination, in index order.
    pub fn target_positions(&self) -> Vec<Vec3> {
        self.agents.iter().map(Agent::target_position).collect()
    }

    /// Every agent's current position, in index order.
    pub fn current_positions(&self) -> Vec<Vec3> {
        self.agents.iter().map(Agent::current_position).collect()
    }

    /// Pushes every agent's current position to its visual.
    ///
    /// Stops at the first failing visual; agents before it are already written.
    pub fn sync_visuals(&mut self) -> Result<(), SwarmError> {
        self.agents.iter_mut().try_for_each(Agent::sync_visual)
    }
}
