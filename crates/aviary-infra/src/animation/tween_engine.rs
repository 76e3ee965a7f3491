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

//! A frame-clocked tweening engine with replace-on-animate semantics.

use std::collections::BTreeMap;

use aviary_core::animation::{Tween, TweenKey, TweenRequest, TweenSample, Tweener};
use aviary_core::error::TweenError;

#[derive(Debug, Clone, Copy)]
struct Slot {
    tween: Tween,
    // Set when the tween moved (or was created instant) since the last drain.
    pending: bool,
}

/// A tweening engine that keeps one tween per key and only moves when the
/// host calls [`Tweener::advance`].
///
/// Keys are stored in a `BTreeMap`, so [`Tweener::drain`] reports samples in
/// key order: agents by index first, then the camera position, then the
/// camera target.
#[derive(Debug, Default)]
pub struct TweenEngine {
    slots: BTreeMap<TweenKey, Slot>,
    replaced: u64,
}

impl TweenEngine {
    /// Creates an empty engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// The tween currently running for `key`, if any.
    pub fn tween(&self, key: TweenKey) -> Option<&Tween> {
        self.slots.get(&key).map(|slot| &slot.tween)
    }

    /// How many running tweens have been replaced by a newer request.
    pub fn replaced_count(&self) -> u64 {
        self.replaced
    }
}

impl Tweener for TweenEngine {
    fn animate(&mut self, key: TweenKey, request: TweenRequest) -> Result<(), TweenError> {
        if !request.duration.is_finite() {
            return Err(TweenError::InvalidDuration {
                key,
                duration: request.duration,
            });
        }
        if !request.from.is_finite() || !request.to.is_finite() {
            return Err(TweenError::NonFiniteEndpoint(key));
        }

        let slot = Slot {
            tween: Tween::new(request),
            pending: request.is_instant(),
        };
        if self.slots.insert(key, slot).is_some() {
            self.replaced += 1;
            log::trace!("Tween for {key:?} replaced by a new request.");
        }
        Ok(())
    }

    fn advance(&mut self, dt: f32) {
        if !dt.is_finite() {
            log::warn!("Ignoring non-finite tween clock step {dt}.");
            return;
        }
        if dt <= 0.0 {
            return;
        }
        for slot in self.slots.values_mut() {
            slot.tween.advance(dt);
            slot.pending = true;
        }
    }

    fn drain(&mut self) -> Vec<TweenSample> {
        let samples: Vec<TweenSample> = self
            .slots
            .iter_mut()
            .filter(|(_, slot)| slot.pending)
            .map(|(key, slot)| {
                slot.pending = false;
                slot.tween.sample(*key)
            })
            .collect();
        self.slots.retain(|_, slot| !slot.tween.is_finished());
        samples
    }

    fn is_active(&self, key: TweenKey) -> bool {
        self.slots.contains_key(&key)
    }

    fn active_count(&self) -> usize {
        self.slots.len()
    }
}
