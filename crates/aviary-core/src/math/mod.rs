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

//! Provides the mathematics primitives used to lay out and move a swarm.
//!
//! All angular functions in this module operate in **radians**.

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

pub use std::f32::consts::{PI, TAU};

/// The golden angle in radians, `π·(3 − √5)`.
///
/// Successive multiples of this angle never line up, which is what spreads
/// the points of a Fibonacci lattice evenly around a sphere.
pub const GOLDEN_ANGLE: f32 = 2.399_963_2;

// --- Declare Sub-Modules ---

pub mod color;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::color::LinearRgba;
pub use self::vector::Vec3;

// --- Utility Functions ---

/// Performs an approximate equality comparison between two floats with a custom tolerance.
///
/// # Examples
///
/// ```
/// use aviary_core::math::approx_eq_eps;
/// assert!(approx_eq_eps(0.001, 0.002, 1e-2));
/// assert!(!approx_eq_eps(0.001, 0.002, 1e-4));
/// ```
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Performs an approximate equality comparison using the module's default [`EPSILON`].
///
/// # Examples
///
/// ```
/// use aviary_core::math::{approx_eq, EPSILON};
/// assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
/// assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
/// ```
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, EPSILON)
}

/// Returns the smallest integer `k` such that `k * k * k >= n`.
///
/// Computed with integer arithmetic so perfect cubes never round up because
/// of a floating-point `cbrt` landing just above the exact root.
///
/// # Examples
///
/// ```
/// use aviary_core::math::ceil_cbrt;
/// assert_eq!(ceil_cbrt(8), 2);
/// assert_eq!(ceil_cbrt(9), 3);
/// assert_eq!(ceil_cbrt(27), 3);
/// ```
pub fn ceil_cbrt(n: usize) -> usize {
    let mut k = (n as f64).cbrt().floor() as usize;
    while k.saturating_mul(k).saturating_mul(k) < n {
        k += 1;
    }
    while k > 0 && (k - 1) * (k - 1) * (k - 1) >= n {
        k -= 1;
    }
    k
}

/// Returns the smallest integer `k` such that `k * k >= n`.
///
/// # Examples
///
/// ```
/// use aviary_core::math::ceil_sqrt;
/// assert_eq!(ceil_sqrt(16), 4);
/// assert_eq!(ceil_sqrt(17), 5);
/// ```
pub fn ceil_sqrt(n: usize) -> usize {
    let mut k = (n as f64).sqrt().floor() as usize;
    while k.saturating_mul(k) < n {
        k += 1;
    }
    while k > 0 && (k - 1) * (k - 1) >= n {
        k -= 1;
    }
    k
}
