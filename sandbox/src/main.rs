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

// Aviary Sandbox
// Flies a headless swarm through every formation and logs how it settles.

use anyhow::{Context, Result};
use aviary_core::animation::Tweener;
use aviary_core::math::{LinearRgba, Vec3};
use aviary_core::scene::CameraRig;
use aviary_infra::{HeadlessScene, HeadlessVisual, OrbitCamera, SystemClock, TweenEngine};
use aviary_swarm::{SwarmConfig, SwarmController};

const FRAME: f32 = 1.0 / 60.0;
/// Extra time given to each step after its transitions should be over.
const SETTLE: f32 = 0.25;

type Controller = SwarmController<HeadlessVisual, TweenEngine, OrbitCamera, SystemClock>;

#[derive(Debug, Clone, Copy)]
enum Step {
    Sphere,
    DoubleHelix,
    Cube,
    OrbitAway,
    ResetAll,
}

const CHOREOGRAPHY: &[Step] = &[
    Step::Sphere,
    Step::DoubleHelix,
    Step::Cube,
    Step::OrbitAway,
    Step::ResetAll,
];

fn load_config() -> Result<SwarmConfig> {
    match std::env::args().nth(1) {
        Some(path) => SwarmConfig::load(&path)
            .with_context(|| format!("failed to load swarm config from '{path}'")),
        None => {
            log::info!("No config path given, using the small preset.");
            Ok(SwarmConfig::small())
        }
    }
}

fn run_step(controller: &mut Controller, step: Step) -> Result<()> {
    let duration = controller.default_duration();
    match step {
        Step::Sphere => controller.form_sphere(None, None)?,
        Step::DoubleHelix => controller.form_double_helix(None, None, None)?,
        Step::Cube => controller.form_cube(None, None)?,
        Step::OrbitAway => {
            let camera = controller.camera_mut();
            camera.set_position(Vec3::new(25.0, 15.0, 25.0));
            camera.set_target(Vec3::new(0.0, 5.0, 0.0));
            controller.set_agent_color(0, LinearRgba::RED)?;
            return Ok(());
        }
        Step::ResetAll => controller.reset_all(None)?,
    }

    let frames = ((duration + SETTLE) / FRAME).ceil() as usize;
    for _ in 0..frames {
        controller.tick(FRAME)?;
    }

    let worst = controller
        .swarm()
        .iter()
        .map(|agent| agent.current_position().distance(agent.target_position()))
        .fold(0.0_f32, f32::max);
    log::info!(
        "{step:?} settled after {frames} frames: worst drift {worst:.4}, {} tweens still active.",
        controller.tweener().active_count()
    );
    Ok(())
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    let mut scene = HeadlessScene::new();
    let mut controller = SwarmController::from_config(
        &config,
        &mut scene,
        TweenEngine::new(),
        OrbitCamera::new(config.camera),
        SystemClock,
    )?;
    log::info!(
        "Spawned {} agents into the headless scene.",
        scene.len()
    );

    for &step in CHOREOGRAPHY {
        run_step(&mut controller, step)?;
    }

    let camera = controller.camera();
    log::info!(
        "Camera back at {:?}, looking at {:?}.",
        camera.position(),
        camera.looking_at()
    );
    log::debug!("{controller:?}");
    Ok(())
}
