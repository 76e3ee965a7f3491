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

//! Value types exchanged with a tweening engine.

use super::Ease;
use crate::math::Vec3;

/// Identifies the property a tween drives.
///
/// A tweening engine keeps at most one tween per key: animating a key that
/// is already in flight replaces the running tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TweenKey {
    /// The position of the agent with the given swarm index.
    Agent(usize),
    /// The camera's eye position.
    CameraPosition,
    /// The orbit controls' target point.
    CameraTarget,
}

/// A request to interpolate a vector from `from` to `to` over `duration` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenRequest {
    /// The value at the start of the interpolation.
    pub from: Vec3,
    /// The value reached exactly when `duration` has elapsed.
    pub to: Vec3,
    /// Length of the interpolation in seconds. Zero or less snaps to `to`.
    pub duration: f32,
    /// The easing curve shaping progress over time.
    pub ease: Ease,
}

impl TweenRequest {
    /// Creates a request using the default ease-in/ease-out curve.
    pub fn new(from: Vec3, to: Vec3, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            ease: Ease::default(),
        }
    }

    /// Replaces the easing curve.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Returns `true` if the request completes without intermediate frames.
    #[inline]
    pub fn is_instant(&self) -> bool {
        self.duration <= 0.0
    }
}

/// One value produced by a running tween for a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSample {
    /// The property this sample belongs to.
    pub key: TweenKey,
    /// The interpolated value to write.
    pub value: Vec3,
    /// Normalized elapsed time in `[0, 1]`.
    pub progress: f32,
    /// `true` on the last sample of the tween, where `value` equals the target.
    pub finished: bool,
}

/// A single in-flight interpolation and its elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    request: TweenRequest,
    elapsed: f32,
}

impl Tween {
    /// Starts a tween at elapsed time zero.
    pub fn new(request: TweenRequest) -> Self {
        Self {
            request,
            elapsed: 0.0,
        }
    }

    /// The request this tween was started from.
    pub fn request(&self) -> &TweenRequest {
        &self.request
    }

    /// Seconds elapsed since the tween started, capped at its duration.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Moves the tween forward by `dt` seconds. Negative steps are ignored.
    pub fn advance(&mut self, dt: f32) {
        if dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.request.duration.max(0.0));
        }
    }

    /// Normalized elapsed time in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.request.is_instant() {
            1.0
        } else {
            (self.elapsed / self.request.duration).clamp(0.0, 1.0)
        }
    }

    /// Returns `true` once the full duration has elapsed.
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// The eased value at the current elapsed time.
    ///
    /// Returns the target exactly once finished, so no rounding error from
    /// the interpolation survives the last frame.
    pub fn value(&self) -> Vec3 {
        if self.is_finished() {
            return self.request.to;
        }
        let t = self.request.ease.apply(self.progress());
        Vec3::lerp(self.request.from, self.request.to, t)
    }

    /// Produces the sample for the current elapsed time.
    pub fn sample(&self, key: TweenKey) -> TweenSample {
        TweenSample {
            key,
            value: self.value(),
            progress: self.progress(),
            finished: self.is_finished(),
        }
    }
}
