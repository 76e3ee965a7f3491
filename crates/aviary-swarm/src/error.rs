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

//! Error types for swarm construction, formations, and transitions.

use std::path::PathBuf;

use aviary_core::error::{TweenError, VisualError};
use thiserror::Error;

/// A formation could not be computed from the given parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormationError {
    /// Formations need at least one agent.
    #[error("a formation needs at least one agent")]
    EmptySwarm,
    /// A size-like parameter was zero, negative, NaN, or infinite.
    #[error("formation parameter `{name}` must be finite and positive, got {value}")]
    InvalidParameter {
        /// The parameter name.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// The number of positions does not match the swarm.
    #[error("formation has {positions} positions for {agents} agents")]
    CountMismatch {
        /// Number of positions in the request.
        positions: usize,
        /// Number of agents in the swarm.
        agents: usize,
    },
}

/// A configuration file could not be read or is invalid.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config '{path}': {source}")]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The RON source did not parse.
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// The configuration could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
    /// A value is out of range.
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        /// The offending field.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// Any error surfaced by a swarm controller operation.
///
/// Agents processed before the failing one keep their new state; the error
/// names the agent so the caller can decide how to recover.
#[derive(Debug, Error)]
pub enum SwarmError {
    /// The formation parameters were rejected.
    #[error(transparent)]
    Formation(#[from] FormationError),
    /// The tweening engine rejected a request.
    #[error(transparent)]
    Tween(#[from] TweenError),
    /// A visual handle failed for the given agent.
    #[error("visual failure for agent {agent}: {source}")]
    Visual {
        /// The agent whose visual failed.
        agent: usize,
        /// The underlying rendering error.
        #[source]
        source: VisualError,
    },
    /// No agent has the given id.
    #[error("no agent with id {0}")]
    UnknownAgent(usize),
    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
