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

//! Clock abstraction for time-driven effects.

/// A source of wall-clock time in seconds.
///
/// Idle motion is a function of absolute time, so the clock is `f64`: `f32`
/// cannot resolve sub-second changes at epoch-sized values.
pub trait Clock {
    /// Current time in seconds.
    fn now_seconds(&self) -> f64;
}
