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

//! Integration tests driving the controller facade with headless collaborators.

use aviary_core::animation::{Tween, TweenKey, TweenRequest, TweenSample, Tweener};
use aviary_core::error::TweenError;
use aviary_core::math::{LinearRgba, Vec3};
use aviary_core::scene::{CameraPose, CameraRig};
use aviary_infra::{HeadlessScene, HeadlessVisual, ManualClock, OrbitCamera, TweenEngine};
use aviary_swarm::{
    FormationError, IdleMotion, SwarmConfig, SwarmController, SwarmError,
};

const FRAME: f32 = 1.0 / 60.0;

type Controller = SwarmController<HeadlessVisual, TweenEngine, OrbitCamera, ManualClock>;

fn config(agent_count: usize) -> SwarmConfig {
    SwarmConfig {
        agent_count,
        idle: IdleMotion::still(),
        ..SwarmConfig::default()
    }
}

fn controller_with(config: &SwarmConfig) -> (Controller, HeadlessScene) {
    let mut scene = HeadlessScene::new();
    let controller = SwarmController::from_config(
        config,
        &mut scene,
        TweenEngine::new(),
        OrbitCamera::new(config.camera),
        ManualClock::new(0.0),
    )
    .unwrap();
    (controller, scene)
}

fn controller(agent_count: usize) -> (Controller, HeadlessScene) {
    controller_with(&config(agent_count))
}

fn run_for(controller: &mut Controller, seconds: f32) {
    let frames = (seconds / FRAME).ceil() as usize + 1;
    for _ in 0..frames {
        controller.tick(FRAME).unwrap();
    }
}

fn assert_vec_eq(actual: Vec3, expected: Vec3, epsilon: f32) {
    assert!(
        actual.abs_diff_eq(expected, epsilon),
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn test_sphere_targets_lie_on_radius_and_are_distinct() {
    let (mut controller, _) = controller(100);
    controller.form_sphere(Some(10.0), None).unwrap();

    let targets = controller.swarm().target_positions();
    assert_eq!(targets.len(), 100);
    for (i, a) in targets.iter().enumerate() {
        assert!((a.length() - 10.0).abs() < 1e-3);
        for b in &targets[i + 1..] {
            assert!(a.distance(*b) > 1e-3);
        }
    }
    assert_eq!(controller.active_transitions(), 100);
}

#[test]
fn test_agents_settle_on_sphere() {
    let (mut controller, scene) = controller(20);
    controller.form_sphere(None, Some(1.0)).unwrap();
    run_for(&mut controller, 1.0);

    assert_eq!(controller.active_transitions(), 0);
    for agent in controller.swarm().iter() {
        assert_eq!(agent.current_position(), agent.target_position());
        let visual = scene.object(agent.id()).unwrap();
        assert_eq!(visual.position, agent.current_position());
    }
}

#[test]
fn test_cube_of_eight_occupies_corners() {
    let (mut controller, _) = controller(8);
    controller.form_cube(Some(8.0), None).unwrap();

    let targets = controller.swarm().target_positions();
    for target in &targets {
        for component in [target.x, target.y, target.z] {
            assert_eq!(component.abs(), 2.0);
        }
    }
    for (i, a) in targets.iter().enumerate() {
        for b in &targets[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_double_helix_reference_points() {
    let (mut controller, _) = controller(12);
    controller.form_double_helix(Some(10.0), Some(20.0), None).unwrap();

    let targets = controller.swarm().target_positions();
    assert_vec_eq(targets[0], Vec3::new(10.0, -10.0, 0.0), 1e-4);
    assert_vec_eq(targets[6], Vec3::new(-10.0, 0.0, 0.0), 1e-4);
}

#[test]
fn test_reset_formation_is_idempotent() {
    let (mut controller, _) = controller(16);
    let home = controller.swarm().initial_positions();

    controller.form_cube(None, Some(0.5)).unwrap();
    run_for(&mut controller, 0.25);

    controller.reset_formation(None).unwrap();
    let first = controller.swarm().target_positions();
    controller.reset_formation(None).unwrap();
    let second = controller.swarm().target_positions();

    assert_eq!(first, home);
    assert_eq!(second, home);

    run_for(&mut controller, 2.0);
    assert_eq!(controller.swarm().current_positions(), home);
}

#[test]
fn test_superseding_transition_rests_at_new_target_without_jump() {
    let (mut controller, _) = controller(8);
    controller.form_sphere(Some(10.0), Some(2.0)).unwrap();
    run_for(&mut controller, 0.8);

    let before = controller.swarm().current_positions();
    controller.form_cube(Some(8.0), Some(2.0)).unwrap();
    let cube_targets = controller.swarm().target_positions();

    // The request itself moves nothing.
    assert_eq!(controller.swarm().current_positions(), before);

    // The first frame after replacement starts from where the agent was.
    controller.tick(FRAME).unwrap();
    for (agent, previous) in controller.swarm().iter().zip(&before) {
        assert!(agent.current_position().distance(*previous) < 0.05);
    }

    run_for(&mut controller, 2.0);
    for (agent, target) in controller.swarm().iter().zip(&cube_targets) {
        assert_eq!(agent.current_position(), *target);
    }
}

#[test]
fn test_zero_duration_snaps_immediately() {
    let (mut controller, _) = controller(27);
    controller.form_cube(Some(9.0), Some(0.0)).unwrap();

    assert_eq!(controller.active_transitions(), 0);
    assert_eq!(
        controller.swarm().current_positions(),
        controller.swarm().target_positions()
    );

    controller.tick(FRAME).unwrap();
    assert_eq!(
        controller.swarm().current_positions(),
        controller.swarm().target_positions()
    );
}

#[test]
fn test_idle_offset_survives_the_frame_after_a_snap() {
    let config = SwarmConfig {
        agent_count: 8,
        ..SwarmConfig::default()
    };
    let (mut controller, _) = controller_with(&config);
    controller.form_cube(Some(8.0), Some(0.0)).unwrap();
    let target = controller.swarm().get(3).unwrap().target_position();

    let time = std::f64::consts::FRAC_PI_2;
    controller.update_at(time).unwrap();
    let drifted = controller.agent_position(3).unwrap();
    let offset = IdleMotion::default().offset(time, 3);
    assert_vec_eq(drifted, target + Vec3::new(0.0, offset, 0.0), 1e-6);

    controller.advance(FRAME);
    assert_eq!(controller.agent_position(3), Some(drifted));
}

#[test]
fn test_invalid_formation_leaves_swarm_untouched() {
    let (mut controller, _) = controller(10);
    let err = controller.form_sphere(Some(-1.0), None).unwrap_err();
    assert!(matches!(
        err,
        SwarmError::Formation(FormationError::InvalidParameter { name: "radius", .. })
    ));
    assert_eq!(
        controller.swarm().target_positions(),
        controller.swarm().initial_positions()
    );
    assert_eq!(controller.active_transitions(), 0);

    let err = controller.form_cube(None, Some(f32::NAN)).unwrap_err();
    assert!(matches!(
        err,
        SwarmError::Tween(TweenError::InvalidDuration { .. })
    ));
}

#[test]
fn test_idle_offset_applies_after_transition_write() {
    let config = SwarmConfig {
        agent_count: 4,
        ..SwarmConfig::default()
    };
    let mut scene = HeadlessScene::new();
    let clock_time = std::f64::consts::FRAC_PI_2;
    let mut controller = SwarmController::from_config(
        &config,
        &mut scene,
        TweenEngine::new(),
        OrbitCamera::default(),
        ManualClock::new(clock_time),
    )
    .unwrap();

    let from = controller.swarm().get(0).unwrap().current_position();
    controller.form_sphere(Some(10.0), Some(2.0)).unwrap();
    let to = controller.swarm().get(0).unwrap().target_position();
    controller.tick(0.5).unwrap();

    let mut reference = Tween::new(TweenRequest::new(from, to, 2.0));
    reference.advance(0.5);
    let offset = IdleMotion::default().offset(clock_time, 0);
    let expected = reference.value() + Vec3::new(0.0, offset, 0.0);

    assert_vec_eq(controller.agent_position(0).unwrap(), expected, 1e-6);
    assert_eq!(
        scene.object(0).map(|o| o.position),
        controller.agent_position(0)
    );
}

#[test]
fn test_idle_motion_drifts_settled_agents() {
    let config = SwarmConfig {
        agent_count: 3,
        ..SwarmConfig::default()
    };
    let mut scene = HeadlessScene::new();
    let mut controller = SwarmController::from_config(
        &config,
        &mut scene,
        TweenEngine::new(),
        OrbitCamera::default(),
        ManualClock::new(0.0),
    )
    .unwrap();

    let home = controller.agent_position(1).unwrap();
    let time = std::f64::consts::FRAC_PI_2;
    controller.update_at(time).unwrap();
    controller.update_at(time).unwrap();

    let moved = controller.agent_position(1).unwrap();
    let step = IdleMotion::default().offset(time, 1);
    assert!((moved.y - (home.y + 2.0 * step)).abs() < 1e-6);
    assert_eq!(moved.x, home.x);
    assert_eq!(moved.z, home.z);
}

#[test]
fn test_update_reads_time_from_the_controller_clock() {
    let config = SwarmConfig {
        agent_count: 2,
        ..SwarmConfig::default()
    };
    let (mut controller, scene) = controller_with(&config);
    let home = controller.agent_position(1).unwrap();

    controller.clock().set(std::f64::consts::FRAC_PI_2);
    controller.update().unwrap();

    let step = IdleMotion::default().offset(std::f64::consts::FRAC_PI_2, 1);
    let moved = controller.agent_position(1).unwrap();
    assert!((moved.y - (home.y + step)).abs() < 1e-7);
    assert_eq!(scene.object(1).map(|o| o.position), Some(moved));
}

#[test]
fn test_reset_camera_converges_and_keeps_looking_at_target() {
    let (mut controller, _) = controller(4);
    let initial = controller.initial_camera_pose();
    assert_eq!(initial, CameraPose::default());

    controller.camera_mut().set_position(Vec3::new(25.0, 12.0, -4.0));
    controller.camera_mut().set_target(Vec3::new(3.0, -2.0, 6.0));

    controller.reset_camera(Some(1.0)).unwrap();
    let mut previous_distance = controller.camera().target().distance(initial.target);
    for _ in 0..70 {
        controller.tick(FRAME).unwrap();
        let camera = controller.camera();
        assert_eq!(camera.looking_at(), initial.target);
        let distance = camera.target().distance(initial.target);
        assert!(distance <= previous_distance + 1e-6);
        previous_distance = distance;
    }

    assert_eq!(controller.camera().position(), initial.position);
    assert_eq!(controller.camera().target(), initial.target);
    assert!(!controller.tweener().is_active(TweenKey::CameraPosition));
}

#[test]
fn test_reset_all_issues_camera_and_formation() {
    let (mut controller, _) = controller(8);
    controller.form_sphere(None, Some(0.0)).unwrap();
    controller.camera_mut().set_position(Vec3::new(0.0, 40.0, 0.0));

    controller.reset_all(Some(1.5)).unwrap();
    assert!(controller.tweener().is_active(TweenKey::CameraPosition));
    assert!(controller.tweener().is_active(TweenKey::CameraTarget));
    assert_eq!(controller.active_transitions(), 8);
    assert_eq!(
        controller.swarm().target_positions(),
        controller.swarm().initial_positions()
    );

    run_for(&mut controller, 1.5);
    assert_eq!(controller.camera().pose(), controller.initial_camera_pose());
    assert_eq!(
        controller.swarm().current_positions(),
        controller.swarm().initial_positions()
    );
}

#[test]
fn test_reset_camera_with_zero_duration_snaps() {
    let (mut controller, _) = controller(2);
    controller.camera_mut().set_position(Vec3::new(5.0, 5.0, 5.0));
    controller.reset_camera(Some(0.0)).unwrap();
    assert_eq!(controller.camera().pose(), controller.initial_camera_pose());
    assert_eq!(controller.camera().looking_at(), Vec3::ZERO);
}

#[test]
fn test_visual_failure_is_surfaced_with_partial_progress() {
    let (mut controller, scene) = controller(6);
    scene.detach(4);

    let err = controller.update_at(0.0).unwrap_err();
    assert!(matches!(err, SwarmError::Visual { agent: 4, .. }));
    for id in 0..4 {
        assert_eq!(scene.object(id).map(|o| o.position_writes), Some(1));
    }
    assert_eq!(scene.object(5).map(|o| o.position_writes), Some(0));
}

#[test]
fn test_set_agent_color() {
    let (mut controller, scene) = controller(3);
    controller.set_agent_color(2, LinearRgba::GREEN).unwrap();
    assert_eq!(scene.object(2).map(|o| o.color), Some(LinearRgba::GREEN));
    assert_eq!(
        controller.swarm().get(2).map(|a| a.color()),
        Some(LinearRgba::GREEN)
    );

    let err = controller.set_agent_color(3, LinearRgba::RED).unwrap_err();
    assert!(matches!(err, SwarmError::UnknownAgent(3)));
}

/// Accepts a fixed number of requests, then reports itself unavailable.
struct FlakyTweener {
    inner: TweenEngine,
    remaining: usize,
}

impl Tweener for FlakyTweener {
    fn animate(&mut self, key: TweenKey, request: TweenRequest) -> Result<(), TweenError> {
        if self.remaining == 0 {
            return Err(TweenError::Unavailable("engine stopped".into()));
        }
        self.remaining -= 1;
        self.inner.animate(key, request)
    }

    fn advance(&mut self, dt: f32) {
        self.inner.advance(dt);
    }

    fn drain(&mut self) -> Vec<TweenSample> {
        self.inner.drain()
    }

    fn is_active(&self, key: TweenKey) -> bool {
        self.inner.is_active(key)
    }

    fn active_count(&self) -> usize {
        self.inner.active_count()
    }
}

#[test]
fn test_tween_failure_leaves_partial_formation_visible() {
    let mut scene = HeadlessScene::new();
    let mut controller = SwarmController::from_config(
        &config(10),
        &mut scene,
        FlakyTweener {
            inner: TweenEngine::new(),
            remaining: 4,
        },
        OrbitCamera::default(),
        ManualClock::new(0.0),
    )
    .unwrap();

    let err = controller.form_sphere(None, None).unwrap_err();
    assert!(matches!(err, SwarmError::Tween(TweenError::Unavailable(_))));
    assert_eq!(controller.active_transitions(), 4);

    let swarm = controller.swarm();
    for id in 0..4 {
        let agent = swarm.get(id).unwrap();
        assert_ne!(agent.target_position(), agent.initial_position());
    }
    for id in 4..10 {
        let agent = swarm.get(id).unwrap();
        assert_eq!(agent.target_position(), agent.initial_position());
    }
}

#[test]
fn test_from_config_rejects_invalid_config() {
    let mut scene = HeadlessScene::new();
    let bad = SwarmConfig {
        agent_count: 0,
        ..SwarmConfig::default()
    };
    let err = SwarmController::from_config(
        &bad,
        &mut scene,
        TweenEngine::new(),
        OrbitCamera::default(),
        ManualClock::new(0.0),
    )
    .unwrap_err();
    assert!(matches!(err, SwarmError::Config(_)));
    assert!(scene.is_empty());
}

#[test]
fn test_new_captures_camera_pose() {
    let mut scene = HeadlessScene::new();
    let swarm = aviary_swarm::Swarm::create(&mut scene, 5, 0.5, &Default::default()).unwrap();
    let pose = CameraPose::new(Vec3::new(0.0, 10.0, 10.0), Vec3::Y);
    let controller = SwarmController::new(
        swarm,
        TweenEngine::new(),
        OrbitCamera::new(pose),
        ManualClock::new(0.0),
    );
    assert_eq!(controller.initial_camera_pose(), pose);
    assert_eq!(controller.default_duration(), 2.0);
}

#[test]
fn test_recolor_by_hue_restores_creation_colors() {
    let (mut controller, scene) = controller(5);
    let original = scene.object(3).map(|o| o.color);
    controller.set_agent_color(3, LinearRgba::WHITE).unwrap();
    controller.recolor_by_hue().unwrap();
    assert_eq!(scene.object(3).map(|o| o.color), original);
    assert_eq!(controller.swarm().get(3).map(|a| a.color()), original);
}
