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

//! Controller configuration, loadable from RON.
//!
//! ```ron
//! (
//!     agent_count: 1000,
//!     grid_spacing: 0.5,
//!     default_duration: 2.0,
//!     ease: QuadInOut,
//!     camera: (position: (x: 0.0, y: 0.0, z: 30.0), target: (x: 0.0, y: 0.0, z: 0.0)),
//! )
//! ```
//!
//! Every field is optional and falls back to its default.

use std::path::Path;

use aviary_core::animation::Ease;
use aviary_core::scene::CameraPose;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::formation::HelixStrands;
use crate::idle::IdleMotion;
use crate::swarm::Palette;

/// Default parameters of the named formations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormationDefaults {
    /// Radius used by `form_sphere` when none is given.
    pub sphere_radius: f32,
    /// Radius used by `form_double_helix` when none is given.
    pub helix_radius: f32,
    /// Height used by `form_double_helix` when none is given.
    pub helix_height: f32,
    /// Strand layout used by `form_double_helix`.
    pub helix_strands: HelixStrands,
    /// Edge length used by `form_cube` when none is given.
    pub cube_size: f32,
}

impl FormationDefaults {
    /// Sphere radius 10, helix radius 10 and height 20 on one strand, cube size 10.
    pub const fn new() -> Self {
        Self {
            sphere_radius: 10.0,
            helix_radius: 10.0,
            helix_height: 20.0,
            helix_strands: HelixStrands::Single,
            cube_size: 10.0,
        }
    }
}

impl Default for FormationDefaults {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a controller needs besides its collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    /// Number of agents created at startup.
    pub agent_count: usize,
    /// Distance between neighbours in the initial grid.
    pub grid_spacing: f32,
    /// Transition length in seconds when an operation is given none.
    pub default_duration: f32,
    /// Easing curve of every agent and camera transition.
    pub ease: Ease,
    /// Idle motion parameters.
    pub idle: IdleMotion,
    /// Agent coloring at creation.
    pub palette: Palette,
    /// Default formation parameters.
    pub formations: FormationDefaults,
    /// The camera pose restored by `reset_camera`.
    pub camera: CameraPose,
}

impl SwarmConfig {
    /// The default configuration: 1000 agents, 0.5 grid spacing, 2 second
    /// transitions with quadratic ease-in/ease-out.
    pub const fn new() -> Self {
        Self {
            agent_count: 1000,
            grid_spacing: 0.5,
            default_duration: 2.0,
            ease: Ease::QuadInOut,
            idle: IdleMotion::new(),
            palette: Palette::new(),
            formations: FormationDefaults::new(),
            camera: CameraPose::new(
                aviary_core::math::Vec3::new(0.0, 0.0, 30.0),
                aviary_core::math::Vec3::ZERO,
            ),
        }
    }

    /// A small swarm for demos and tests: 64 agents, 1 second transitions.
    pub const fn small() -> Self {
        Self {
            agent_count: 64,
            default_duration: 1.0,
            ..Self::new()
        }
    }

    /// Parses a configuration from RON source and validates it.
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::de::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a RON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron_str(&source)?;
        log::info!("Loaded swarm config from '{}'.", path.display());
        Ok(config)
    }

    /// Serializes the configuration to pretty RON.
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::default().indentor("  ".to_string());
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Checks every value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.agent_count == 0 {
            return Err(invalid("agent_count", "must be at least 1"));
        }
        let positive = [
            ("grid_spacing", self.grid_spacing),
            ("formations.sphere_radius", self.formations.sphere_radius),
            ("formations.helix_radius", self.formations.helix_radius),
            ("formations.helix_height", self.formations.helix_height),
            ("formations.cube_size", self.formations.cube_size),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, format!("must be finite and positive, got {value}")));
            }
        }
        if !self.default_duration.is_finite() || self.default_duration < 0.0 {
            return Err(invalid(
                "default_duration",
                format!("must be finite and non-negative, got {}", self.default_duration),
            ));
        }
        if !self.idle.amplitude.is_finite() || !self.idle.phase_step.is_finite() {
            return Err(invalid("idle", "amplitude and phase_step must be finite"));
        }
        if !self.camera.position.is_finite() || !self.camera.target.is_finite() {
            return Err(invalid("camera", "pose must be finite"));
        }
        Ok(())
    }
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aviary_core::math::Vec3;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SwarmConfig::default();
        assert_eq!(config.agent_count, 1000);
        assert_eq!(config.grid_spacing, 0.5);
        assert_eq!(config.default_duration, 2.0);
        assert_eq!(config.ease, Ease::QuadInOut);
        assert_eq!(config.idle, IdleMotion::new());
        assert_eq!(config.formations.helix_height, 20.0);
        assert_eq!(config.camera, CameraPose::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_ron_falls_back_to_defaults() {
        let config = SwarmConfig::from_ron_str(
            "(agent_count: 27, ease: CubicInOut, formations: (cube_size: 6.0))",
        )
        .unwrap();
        assert_eq!(config.agent_count, 27);
        assert_eq!(config.ease, Ease::CubicInOut);
        assert_eq!(config.formations.cube_size, 6.0);
        assert_eq!(config.formations.sphere_radius, 10.0);
        assert_eq!(config.grid_spacing, 0.5);
    }

    #[test]
    fn test_camera_pose_from_ron() {
        let config = SwarmConfig::from_ron_str(
            "(camera: (position: (x: 1.0, y: 2.0, z: 3.0), target: (x: 0.0, y: 1.0, z: 0.0)))",
        )
        .unwrap();
        assert_eq!(config.camera.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(config.camera.target, Vec3::Y);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = SwarmConfig::from_ron_str("(agent_count: 0)").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "agent_count",
                ..
            }
        ));

        let err = SwarmConfig::from_ron_str("(formations: (sphere_radius: -1.0))").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "formations.sphere_radius",
                ..
            }
        ));

        let err = SwarmConfig::from_ron_str("(default_duration: -2.0)").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "default_duration",
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_ron_is_a_parse_error() {
        let err = SwarmConfig::from_ron_str("(agent_count: \"many\")").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_ron_round_trip() {
        let config = SwarmConfig::small();
        let text = config.to_ron_string().unwrap();
        assert_eq!(SwarmConfig::from_ron_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(agent_count: 8, grid_spacing: 1.0)").unwrap();
        let config = SwarmConfig::load(file.path()).unwrap();
        assert_eq!(config.agent_count, 8);
        assert_eq!(config.grid_spacing, 1.0);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SwarmConfig::load("/definitely/not/here.ron").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
