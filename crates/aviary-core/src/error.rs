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

//! Error types reported by the collaborators of a swarm controller.

use thiserror::Error;

use crate::animation::TweenKey;

/// An error raised by the rendering collaborator for a visual handle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VisualError {
    /// The scene refused to create a visual object.
    #[error("failed to spawn visual: {0}")]
    SpawnFailed(String),
    /// The handle no longer refers to a live visual object.
    #[error("visual handle {0} is detached from the scene")]
    Detached(usize),
    /// The backend rejected a write.
    #[error("visual backend error: {0}")]
    Backend(String),
}

/// An error raised by the tweening collaborator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TweenError {
    /// The duration was NaN or infinite.
    #[error("invalid tween duration {duration} for {key:?}")]
    InvalidDuration {
        /// The property the request targeted.
        key: TweenKey,
        /// The rejected duration.
        duration: f32,
    },
    /// The start or end value contained a NaN or infinite component.
    #[error("non-finite tween endpoint for {0:?}")]
    NonFiniteEndpoint(TweenKey),
    /// The engine cannot accept work.
    #[error("tweening engine unavailable: {0}")]
    Unavailable(String),
}
