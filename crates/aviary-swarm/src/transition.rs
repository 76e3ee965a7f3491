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

//! Per-agent transitions issued to a tweening engine.
//!
//! The driver is the only component that talks to the [`Tweener`]. It keeps a
//! record of every agent transition in flight, hands requests to the engine
//! with replace semantics, and writes the engine's samples back into the
//! swarm once per frame.

use std::collections::BTreeMap;

use aviary_core::animation::{Ease, TweenKey, TweenRequest, TweenSample, Tweener};
use aviary_core::error::TweenError;
use aviary_core::math::Vec3;
use aviary_core::scene::VisualHandle;

use crate::swarm::Swarm;

/// The state of one agent's transition while it is in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Position the transition started from.
    pub from: Vec3,
    /// Position reached when the transition completes.
    pub to: Vec3,
    /// Length of the transition in seconds.
    pub duration: f32,
}

/// What happened to a transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The engine interpolates towards the target over the duration.
    Started,
    /// The engine interpolates towards the target and a running transition
    /// for the same agent was cancelled.
    Superseded,
    /// The duration was zero or negative: the agent must be placed on the
    /// target immediately.
    Snapped,
}

/// Issues and supervises agent transitions on a tweening engine.
#[derive(Debug)]
pub struct TransitionDriver<T> {
    tweener: T,
    ease: Ease,
    active: BTreeMap<usize, Transition>,
}

impl<T: Tweener> TransitionDriver<T> {
    /// Creates a driver using the default ease-in/ease-out curve.
    pub fn new(tweener: T) -> Self {
        Self::with_ease(tweener, Ease::default())
    }

    /// Creates a driver with a specific easing curve.
    pub fn with_ease(tweener: T, ease: Ease) -> Self {
        Self {
            tweener,
            ease,
            active: BTreeMap::new(),
        }
    }

    /// The easing curve applied to every request.
    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// The underlying tweening engine.
    pub fn tweener(&self) -> &T {
        &self.tweener
    }

    /// Mutable access to the underlying tweening engine.
    pub fn tweener_mut(&mut self) -> &mut T {
        &mut self.tweener
    }

    /// Requests that agent `agent` moves from `from` to `to` over `duration` seconds.
    ///
    /// At most one transition exists per agent: a request for an agent that
    /// is still moving cancels the running transition and replaces it. The
    /// caller passes the agent's *current* position as `from`, so the path
    /// stays continuous at the moment of replacement.
    ///
    /// # Errors
    /// Returns [`TweenError::InvalidDuration`] for NaN or infinite durations,
    /// and forwards any error raised by the engine.
    pub fn request_transition(
        &mut self,
        agent: usize,
        from: Vec3,
        to: Vec3,
        duration: f32,
    ) -> Result<TransitionOutcome, TweenError> {
        let key = TweenKey::Agent(agent);
        if !duration.is_finite() {
            return Err(TweenError::InvalidDuration { key, duration });
        }

        let request = TweenRequest::new(from, to, duration).with_ease(self.ease);
        self.tweener.animate(key, request)?;

        let previous = self.active.remove(&agent);
        if request.is_instant() {
            log::debug!("Agent {agent} snapped to {to:?} (duration {duration}).");
            return Ok(TransitionOutcome::Snapped);
        }

        self.active.insert(agent, Transition { from, to, duration });
        match previous {
            Some(old) => {
                log::trace!(
                    "Agent {agent}: transition towards {:?} superseded by {to:?}.",
                    old.to
                );
                Ok(TransitionOutcome::Superseded)
            }
            None => Ok(TransitionOutcome::Started),
        }
    }

    /// Requests a camera property tween with the same easing as agents.
    pub fn request_camera(
        &mut self,
        key: TweenKey,
        from: Vec3,
        to: Vec3,
        duration: f32,
    ) -> Result<(), TweenError> {
        if !duration.is_finite() {
            return Err(TweenError::InvalidDuration { key, duration });
        }
        let request = TweenRequest::new(from, to, duration).with_ease(self.ease);
        self.tweener.animate(key, request)
    }

    /// Advances the engine's clock by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tweener.advance(dt);
    }

    /// Writes this frame's agent samples into `swarm` and returns the samples
    /// that belong to other properties (the camera).
    ///
    /// Samples for agents without a transition in flight are dropped. A
    /// snapped agent was already placed at request time, and the engine's
    /// leftover sample must not overwrite motion applied since.
    pub fn apply<H: VisualHandle>(&mut self, swarm: &mut Swarm<H>) -> Vec<TweenSample> {
        let mut others = Vec::new();
        for sample in self.tweener.drain() {
            match sample.key {
                TweenKey::Agent(id) => {
                    if !self.active.contains_key(&id) {
                        log::trace!("Dropping sample for agent {id} with no transition in flight.");
                        continue;
                    }
                    if let Some(agent) = swarm.get_mut(id) {
                        agent.write_transition_position(sample.value);
                    }
                    if sample.finished {
                        self.active.remove(&id);
                    }
                }
                _ => others.push(sample),
            }
        }
        others
    }

    /// Returns `true` while agent `agent` has a transition in flight.
    pub fn is_transitioning(&self, agent: usize) -> bool {
        self.active.contains_key(&agent)
    }

    /// The transition in flight for agent `agent`.
    pub fn transition(&self, agent: usize) -> Option<&Transition> {
        self.active.get(&agent)
    }

    /// Number of agents currently in transition.
    pub fn active_transitions(&self) -> usize {
        self.active.len()
    }
}
