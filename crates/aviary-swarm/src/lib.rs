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

//! # Aviary Swarm
//!
//! Choreographs a swarm of drones in 3D space. A [`SwarmController`] owns the
//! agents, computes formation targets, hands per-agent transitions to a
//! tweening engine, and keeps a breathing idle motion running on top.
//!
//! ```rust,ignore
//! let mut scene = HeadlessScene::new();
//! let mut controller = SwarmController::from_config(
//!     &SwarmConfig::small(),
//!     &mut scene,
//!     TweenEngine::new(),
//!     OrbitCamera::default(),
//!     SystemClock,
//! )?;
//! controller.form_sphere(None, None)?;
//! loop {
//!     controller.tick(1.0 / 60.0)?;
//! }
//! ```

#![warn(missing_docs)]

pub mod agent;
pub mod config;
pub mod controller;
pub mod error;
pub mod formation;
pub mod idle;
pub mod swarm;
pub mod transition;

pub use agent::Agent;
pub use config::{FormationDefaults, SwarmConfig};
pub use controller::SwarmController;
pub use error::{ConfigError, FormationError, SwarmError};
pub use formation::{Formation, FormationRequest, HelixStrands};
pub use idle::IdleMotion;
pub use swarm::{Palette, Swarm};
pub use transition::{Transition, TransitionDriver, TransitionOutcome};
