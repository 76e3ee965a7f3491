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

//! Easing curves used to shape interpolations over time.

use serde::{Deserialize, Serialize};

/// An easing curve mapping normalized time `t ∈ [0, 1]` to progress.
///
/// Every curve is monotonically non-decreasing, maps `0 → 0` and `1 → 1`
/// exactly, and clamps inputs outside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Ease {
    /// Constant velocity.
    Linear,
    /// Quadratic acceleration then deceleration (`power2.inOut`).
    #[default]
    QuadInOut,
    /// Cubic acceleration then deceleration, a sharper S-curve.
    CubicInOut,
}

impl Ease {
    /// Evaluates the curve at normalized time `t`.
    ///
    /// # Examples
    ///
    /// ```
    /// use aviary_core::animation::Ease;
    /// assert_eq!(Ease::QuadInOut.apply(0.0), 0.0);
    /// assert_eq!(Ease::QuadInOut.apply(0.5), 0.5);
    /// assert_eq!(Ease::QuadInOut.apply(1.0), 1.0);
    /// ```
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Ease::Linear => t,
            Ease::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            Ease::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}
