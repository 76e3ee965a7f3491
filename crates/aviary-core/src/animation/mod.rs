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

//! Time-based interpolation contracts.
//!
//! The controller never interpolates on its own. It hands [`TweenRequest`]s to
//! a [`Tweener`] and applies the [`TweenSample`]s the tweener reports once its
//! clock has been advanced by the host.

mod ease;
mod tween;

pub use self::ease::Ease;
pub use self::tween::{Tween, TweenKey, TweenRequest, TweenSample};

use crate::error::TweenError;

/// A tweening engine that interpolates keyed vector properties over time.
///
/// Implementations must keep **at most one** tween per [`TweenKey`]:
/// `animate` on a key that is already running replaces the old tween without
/// reporting it again.
pub trait Tweener {
    /// Starts (or replaces) the tween driving `key`.
    ///
    /// A request with `duration <= 0.0` completes on the next [`drain`](Tweener::drain)
    /// with a single finished sample at the target.
    fn animate(&mut self, key: TweenKey, request: TweenRequest) -> Result<(), TweenError>;

    /// Advances every running tween by `dt` seconds.
    fn advance(&mut self, dt: f32);

    /// Returns the current sample of every tween that moved since the last
    /// drain, and forgets the tweens that finished.
    ///
    /// Samples are ordered by key so callers observe a deterministic write order.
    fn drain(&mut self) -> Vec<TweenSample>;

    /// Returns `true` if a tween is running for `key`.
    fn is_active(&self, key: TweenKey) -> bool;

    /// The number of running tweens.
    fn active_count(&self) -> usize;
}
