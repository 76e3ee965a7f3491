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

//! Pure generators that compute one target position per agent index.
//!
//! Every generator is deterministic and independent of where the agents
//! currently are: the same `(count, parameters)` always yields the same
//! positions, in index order.

use aviary_core::math::{ceil_cbrt, ceil_sqrt, Vec3, GOLDEN_ANGLE, PI, TAU};
use serde::{Deserialize, Serialize};

use crate::error::FormationError;

/// Number of full turns made by a helix formation.
pub const HELIX_TURNS: f32 = 3.0;

/// How agents are shared between the strands of a helix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HelixStrands {
    /// Every agent on one strand.
    #[default]
    Single,
    /// Even indices on one strand, odd indices on a second strand rotated by π.
    Interleaved,
}

/// A named target-position pattern the swarm can be sent to at runtime.
///
/// The creation layout is not one of them: [`grid`] only places agents when
/// the swarm is built, and the swarm returns there through a reset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Formation {
    /// A Fibonacci lattice on a sphere centered at the origin.
    Sphere {
        /// Sphere radius.
        radius: f32,
    },
    /// A helix climbing the Y axis.
    DoubleHelix {
        /// Helix radius.
        radius: f32,
        /// Total height, centered on the origin.
        height: f32,
        /// Strand assignment.
        strands: HelixStrands,
    },
    /// A cubic lattice centered at the origin.
    Cube {
        /// Nominal edge length of the cube.
        size: f32,
    },
}

impl Formation {
    /// A short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Formation::Sphere { .. } => "sphere",
            Formation::DoubleHelix { .. } => "double helix",
            Formation::Cube { .. } => "cube",
        }
    }

    /// Computes the target of every agent index in `[0, count)`.
    pub fn positions(&self, count: usize) -> Result<Vec<Vec3>, FormationError> {
        match *self {
            Formation::Sphere { radius } => sphere(count, radius),
            Formation::DoubleHelix {
                radius,
                height,
                strands,
            } => double_helix(count, radius, height, strands),
            Formation::Cube { size } => cube(count, size),
        }
    }
}

/// A transient set of targets together with the transition duration.
#[derive(Debug, Clone, PartialEq)]
pub struct FormationRequest {
    /// One target per agent index.
    pub positions: Vec<Vec3>,
    /// Duration forwarded unchanged to every per-agent transition.
    pub duration: f32,
}

impl FormationRequest {
    /// Generates the request for `formation` over `count` agents.
    pub fn new(formation: &Formation, count: usize, duration: f32) -> Result<Self, FormationError> {
        Ok(Self {
            positions: formation.positions(count)?,
            duration,
        })
    }

    /// Wraps already computed positions, such as the agents' home positions.
    pub fn from_positions(positions: Vec<Vec3>, duration: f32) -> Self {
        Self {
            positions,
            duration,
        }
    }
}

fn check_count(count: usize) -> Result<(), FormationError> {
    if count == 0 {
        Err(FormationError::EmptySwarm)
    } else {
        Ok(())
    }
}

fn check_positive(name: &'static str, value: f32) -> Result<(), FormationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FormationError::InvalidParameter { name, value })
    }
}

/// A square grid of side `ceil(√count)` on the XY plane, used only as the
/// layout agents are created in.
///
/// The grid is shifted by half its extent (`side · spacing / 2`), which
/// centers it up to one spacing.
pub fn grid(count: usize, spacing: f32) -> Result<Vec<Vec3>, FormationError> {
    check_count(count)?;
    check_positive("spacing", spacing)?;

    let side = ceil_sqrt(count);
    let offset = side as f32 * spacing / 2.0;

    Ok((0..count)
        .map(|i| {
            let x = (i % side) as f32 * spacing - offset;
            let y = (i / side) as f32 * spacing - offset;
            Vec3::new(x, y, 0.0)
        })
        .collect())
}

/// A Fibonacci lattice: `count` points spread evenly over a sphere.
///
/// Heights run from the north pole (index 0) to the south pole (last index).
/// A single agent sits on the north pole.
pub fn sphere(count: usize, radius: f32) -> Result<Vec<Vec3>, FormationError> {
    check_count(count)?;
    check_positive("radius", radius)?;

    if count == 1 {
        return Ok(vec![Vec3::new(0.0, radius, 0.0)]);
    }

    let last = (count - 1) as f32;
    Ok((0..count)
        .map(|i| {
            let y = 1.0 - (i as f32 / last) * 2.0;
            let ring = (1.0 - y * y).max(0.0).sqrt();
            let theta = GOLDEN_ANGLE * i as f32;
            Vec3::new(
                theta.cos() * ring * radius,
                y * radius,
                theta.sin() * ring * radius,
            )
        })
        .collect())
}

/// A helix of [`HELIX_TURNS`] turns climbing from `-height / 2`.
pub fn double_helix(
    count: usize,
    radius: f32,
    height: f32,
    strands: HelixStrands,
) -> Result<Vec<Vec3>, FormationError> {
    check_count(count)?;
    check_positive("radius", radius)?;
    check_positive("height", height)?;

    let point = |step: f32, steps: f32, phase: f32| {
        let fraction = step / steps;
        let angle = fraction * TAU * HELIX_TURNS + phase;
        Vec3::new(
            angle.cos() * radius,
            fraction * height - height / 2.0,
            angle.sin() * radius,
        )
    };

    Ok(match strands {
        HelixStrands::Single => (0..count)
            .map(|i| point(i as f32, count as f32, 0.0))
            .collect(),
        HelixStrands::Interleaved => {
            let rungs = count.div_ceil(2) as f32;
            (0..count)
                .map(|i| {
                    let phase = if i % 2 == 0 { 0.0 } else { PI };
                    point((i / 2) as f32, rungs, phase)
                })
                .collect()
        }
    })
}

/// A cubic lattice of `ceil(∛count)` agents per edge, centered at the origin.
///
/// When `count` is not a perfect cube the top layer is only partially filled.
pub fn cube(count: usize, size: f32) -> Result<Vec<Vec3>, FormationError> {
    check_count(count)?;
    check_positive("size", size)?;

    let edge = ceil_cbrt(count);
    let spacing = size / edge as f32;
    let offset = spacing * (edge - 1) as f32 / 2.0;

    Ok((0..count)
        .map(|i| {
            let x = (i % edge) as f32 * spacing - offset;
            let y = ((i / edge) % edge) as f32 * spacing - offset;
            let z = (i / (edge * edge)) as f32 * spacing - offset;
            Vec3::new(x, y, z)
        })
        .collect())
}
