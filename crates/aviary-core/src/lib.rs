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

//! # Aviary Core
//!
//! Foundational crate containing the math primitives, easing curves, and the
//! interface contracts of the collaborators a swarm controller drives:
//! visual handles, the tweening engine, the camera rig, and the clock.

#![warn(missing_docs)]

pub mod animation;
pub mod error;
pub mod math;
pub mod scene;
pub mod time;

pub use animation::{Ease, Tween, TweenKey, TweenRequest, TweenSample, Tweener};
pub use error::{TweenError, VisualError};
pub use scene::{CameraPose, CameraRig, VisualFactory, VisualHandle};
pub use time::Clock;
