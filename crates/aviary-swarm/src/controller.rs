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

//! The swarm formation controller: the public facade over agents,
//! formations, transitions, idle motion, and camera framing.
//!
//! # Frame contract
//!
//! Each rendered frame the host calls [`SwarmController::tick`], which runs
//! two steps in a fixed order:
//!
//! 1. [`advance`](SwarmController::advance): the tweening engine's clock moves
//!    and every running transition writes its authoritative position.
//! 2. [`update`](SwarmController::update): idle motion adds its offset on top,
//!    then every agent's position is pushed to its visual.
//!
//! Hosts that drive the tweening clock themselves call the two steps
//! separately, in that order.

use aviary_core::animation::{TweenKey, TweenSample, Tweener};
use aviary_core::math::{LinearRgba, Vec3};
use aviary_core::scene::{CameraPose, CameraRig, VisualFactory, VisualHandle};
use aviary_core::time::Clock;

use crate::config::{FormationDefaults, SwarmConfig};
use crate::error::{FormationError, SwarmError};
use crate::formation::{Formation, FormationRequest};
use crate::idle::IdleMotion;
use crate::swarm::{Palette, Swarm};
use crate::transition::TransitionDriver;

/// Owns a swarm and choreographs it between formations.
pub struct SwarmController<H, T, R, C> {
    swarm: Swarm<H>,
    driver: TransitionDriver<T>,
    camera: R,
    initial_camera: CameraPose,
    clock: C,
    idle: IdleMotion,
    palette: Palette,
    defaults: FormationDefaults,
    default_duration: f32,
}

impl<H, T, R, C> SwarmController<H, T, R, C>
where
    H: VisualHandle,
    T: Tweener,
    R: CameraRig,
    C: Clock,
{
    /// Creates a controller with default settings. The camera's current pose
    /// becomes the pose restored by [`reset_camera`](Self::reset_camera).
    pub fn new(swarm: Swarm<H>, tweener: T, camera: R, clock: C) -> Self {
        let config = SwarmConfig::default();
        let initial_camera = camera.pose();
        Self {
            swarm,
            driver: TransitionDriver::with_ease(tweener, config.ease),
            camera,
            initial_camera,
            clock,
            idle: config.idle,
            palette: config.palette,
            defaults: config.formations,
            default_duration: config.default_duration,
        }
    }

    /// Validates `config`, creates its swarm through `factory`, and builds a
    /// controller whose initial camera pose is `config.camera`.
    pub fn from_config<F>(
        config: &SwarmConfig,
        factory: &mut F,
        tweener: T,
        camera: R,
        clock: C,
    ) -> Result<Self, SwarmError>
    where
        F: VisualFactory<Handle = H>,
    {
        config.validate()?;
        let swarm = Swarm::create(
            factory,
            config.agent_count,
            config.grid_spacing,
            &config.palette,
        )?;
        Ok(Self {
            swarm,
            driver: TransitionDriver::with_ease(tweener, config.ease),
            camera,
            initial_camera: config.camera,
            clock,
            idle: config.idle,
            palette: config.palette,
            defaults: config.formations,
            default_duration: config.default_duration,
        })
    }

    /// Replaces the pose restored by [`reset_camera`](Self::reset_camera).
    pub fn with_initial_camera_pose(mut self, pose: CameraPose) -> Self {
        self.initial_camera = pose;
        self
    }

    /// Replaces the idle motion parameters.
    pub fn with_idle_motion(mut self, idle: IdleMotion) -> Self {
        self.idle = idle;
        self
    }

    // --- Accessors ---

    /// The controlled swarm.
    pub fn swarm(&self) -> &Swarm<H> {
        &self.swarm
    }

    /// The camera rig.
    pub fn camera(&self) -> &R {
        &self.camera
    }

    /// Mutable access to the camera rig, for user-driven orbiting.
    pub fn camera_mut(&mut self) -> &mut R {
        &mut self.camera
    }

    /// The clock idle motion reads its time from.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The pose restored by [`reset_camera`](Self::reset_camera).
    pub fn initial_camera_pose(&self) -> CameraPose {
        self.initial_camera
    }

    /// The transition driver.
    pub fn driver(&self) -> &TransitionDriver<T> {
        &self.driver
    }

    /// The tweening engine.
    pub fn tweener(&self) -> &T {
        self.driver.tweener()
    }

    /// Number of agents currently in transition.
    pub fn active_transitions(&self) -> usize {
        self.driver.active_transitions()
    }

    /// The duration used when an operation is given none.
    pub fn default_duration(&self) -> f32 {
        self.default_duration
    }

    fn duration_or_default(&self, duration: Option<f32>) -> f32 {
        duration.unwrap_or(self.default_duration)
    }

    // --- Formations ---

    /// Moves every agent to `formation` over `duration` seconds.
    ///
    /// Targets are computed before any agent is touched, so invalid formation
    /// parameters leave the swarm unchanged. A tweening failure stops at the
    /// failing agent; agents before it already have their new target.
    pub fn form(&mut self, formation: Formation, duration: Option<f32>) -> Result<(), SwarmError> {
        let duration = self.duration_or_default(duration);
        let request = FormationRequest::new(&formation, self.swarm.len(), duration)?;
        log::info!(
            "Forming {} with {} agents over {duration}s.",
            formation.name(),
            self.swarm.len()
        );
        self.apply_request(request)
    }

    /// Forms a Fibonacci sphere. Defaults: radius 10.
    pub fn form_sphere(
        &mut self,
        radius: Option<f32>,
        duration: Option<f32>,
    ) -> Result<(), SwarmError> {
        let radius = radius.unwrap_or(self.defaults.sphere_radius);
        self.form(Formation::Sphere { radius }, duration)
    }

    /// Forms a helix. Defaults: radius 10, height 20.
    pub fn form_double_helix(
        &mut self,
        radius: Option<f32>,
        height: Option<f32>,
        duration: Option<f32>,
    ) -> Result<(), SwarmError> {
        let formation = Formation::DoubleHelix {
            radius: radius.unwrap_or(self.defaults.helix_radius),
            height: height.unwrap_or(self.defaults.helix_height),
            strands: self.defaults.helix_strands,
        };
        self.form(formation, duration)
    }

    /// Forms a cubic lattice. Defaults: size 10.
    pub fn form_cube(&mut self, size: Option<f32>, duration: Option<f32>) -> Result<(), SwarmError> {
        let size = size.unwrap_or(self.defaults.cube_size);
        self.form(Formation::Cube { size }, duration)
    }

    /// Sends every agent back to the position it was created at.
    pub fn reset_formation(&mut self, duration: Option<f32>) -> Result<(), SwarmError> {
        let duration = self.duration_or_default(duration);
        log::info!("Resetting formation over {duration}s.");
        let request = FormationRequest::from_positions(self.swarm.initial_positions(), duration);
        self.apply_request(request)
    }

    fn apply_request(&mut self, request: FormationRequest) -> Result<(), SwarmError> {
        if request.positions.len() != self.swarm.len() {
            return Err(FormationError::CountMismatch {
                positions: request.positions.len(),
                agents: self.swarm.len(),
            }
            .into());
        }
        let duration = request.duration;
        for (agent, position) in self.swarm.iter_mut().zip(request.positions) {
            agent.set_target(position, duration, &mut self.driver)?;
        }
        Ok(())
    }

    // --- Camera ---

    /// Eases the camera and its orbit target back to the initial pose.
    ///
    /// The camera is re-oriented towards the initial target on every frame of
    /// the transition, not only at the end.
    pub fn reset_camera(&mut self, duration: Option<f32>) -> Result<(), SwarmError> {
        let duration = self.duration_or_default(duration);
        let pose = self.initial_camera;
        log::info!("Resetting camera to {pose:?} over {duration}s.");

        self.driver.request_camera(
            TweenKey::CameraPosition,
            self.camera.position(),
            pose.position,
            duration,
        )?;
        self.driver.request_camera(
            TweenKey::CameraTarget,
            self.camera.target(),
            pose.target,
            duration,
        )?;

        if duration <= 0.0 {
            self.camera.set_target(pose.target);
            self.camera.set_position(pose.position);
            self.camera.look_at(pose.target);
        }
        Ok(())
    }

    /// Resets the camera and the formation with the same duration.
    pub fn reset_all(&mut self, duration: Option<f32>) -> Result<(), SwarmError> {
        self.reset_camera(duration)?;
        self.reset_formation(duration)
    }

    fn apply_camera_samples(&mut self, samples: Vec<TweenSample>) {
        let look_target = self.initial_camera.target;
        for sample in samples {
            match sample.key {
                TweenKey::CameraPosition => {
                    self.camera.set_position(sample.value);
                    self.camera.look_at(look_target);
                }
                TweenKey::CameraTarget => self.camera.set_target(sample.value),
                TweenKey::Agent(_) => {}
            }
        }
    }

    // --- Agents ---

    /// Recolors agent `id` immediately.
    pub fn set_agent_color(&mut self, id: usize, color: LinearRgba) -> Result<(), SwarmError> {
        self.swarm
            .get_mut(id)
            .ok_or(SwarmError::UnknownAgent(id))?
            .set_color(color)
    }

    /// The current position of agent `id`.
    pub fn agent_position(&self, id: usize) -> Option<Vec3> {
        self.swarm.get(id).map(|agent| agent.current_position())
    }

    /// Repaints every agent with its creation hue, undoing any
    /// [`set_agent_color`](Self::set_agent_color) calls.
    pub fn recolor_by_hue(&mut self) -> Result<(), SwarmError> {
        let count = self.swarm.len();
        let palette = self.palette;
        self.swarm
            .iter_mut()
            .enumerate()
            .try_for_each(|(i, agent)| agent.set_color(palette.color_for(i, count)))
    }

    // --- Frame ---

    /// Advances the tweening clock by `dt` seconds and writes the positions of
    /// every running transition, agents and camera alike.
    pub fn advance(&mut self, dt: f32) {
        self.driver.advance(dt);
        let camera_samples = self.driver.apply(&mut self.swarm);
        self.apply_camera_samples(camera_samples);
    }

    /// Applies idle motion at the clock's current time and pushes positions
    /// to the visuals.
    pub fn update(&mut self) -> Result<(), SwarmError> {
        let time = self.clock.now_seconds();
        self.update_at(time)
    }

    /// Applies idle motion at `time` seconds and pushes positions to the visuals.
    pub fn update_at(&mut self, time: f64) -> Result<(), SwarmError> {
        self.idle.apply(&mut self.swarm, time);
        self.swarm.sync_visuals()
    }

    /// Runs one full frame: [`advance`](Self::advance) then [`update`](Self::update).
    pub fn tick(&mut self, dt: f32) -> Result<(), SwarmError> {
        self.advance(dt);
        self.update()
    }
}

impl<H: VisualHandle, T, R, C> std::fmt::Debug for SwarmController<H, T, R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwarmController")
            .field("agents", &self.swarm.len())
            .field("initial_camera", &self.initial_camera)
            .field("idle", &self.idle)
            .field("default_duration", &self.default_duration)
            .finish_non_exhaustive()
    }
}
