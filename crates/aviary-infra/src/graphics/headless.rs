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

//! An in-memory scene that records what a renderer would draw.
//!
//! Useful for running a choreography without a GPU, and for inspecting every
//! position and color write a controller issues.

use std::sync::{Arc, Mutex, MutexGuard};

use aviary_core::error::VisualError;
use aviary_core::math::{LinearRgba, Vec3};
use aviary_core::scene::{VisualFactory, VisualHandle};

/// The state of one visual object in a [`HeadlessScene`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualObject {
    /// Last position written.
    pub position: Vec3,
    /// Last color written.
    pub color: LinearRgba,
    /// Number of position writes since the object was spawned.
    pub position_writes: u64,
    /// Set once the object has been removed from the scene.
    pub detached: bool,
}

#[derive(Debug, Default)]
struct SceneState {
    objects: Vec<VisualObject>,
    spawn_limit: Option<usize>,
}

/// A scene without a renderer. Cloning it yields another view of the same scene.
#[derive(Debug, Clone, Default)]
pub struct HeadlessScene {
    state: Arc<Mutex<SceneState>>,
}

impl HeadlessScene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, SceneState>, VisualError> {
        self.state
            .lock()
            .map_err(|e| VisualError::Backend(format!("scene lock poisoned: {e}")))
    }

    /// The number of objects ever spawned into the scene.
    ///
    /// A poisoned scene is logged and reported as empty.
    pub fn len(&self) -> usize {
        match self.lock() {
            Ok(state) => state.objects.len(),
            Err(e) => {
                log::warn!("Headless scene unreadable, reporting it empty: {e}");
                0
            }
        }
    }

    /// Returns `true` if nothing was spawned yet, or the scene is poisoned.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A snapshot of the object with the given spawn index, or `None` if
    /// there is no such object or the scene is poisoned.
    pub fn object(&self, index: usize) -> Option<VisualObject> {
        match self.lock() {
            Ok(state) => state.objects.get(index).copied(),
            Err(e) => {
                log::warn!("Headless scene unreadable, object {index} unavailable: {e}");
                None
            }
        }
    }

    /// Removes an object from the scene. Later writes through its handle fail.
    pub fn detach(&self, index: usize) {
        if let Ok(mut state) = self.lock() {
            if let Some(object) = state.objects.get_mut(index) {
                object.detached = true;
                log::debug!("Visual {index} detached from the headless scene.");
            }
        }
    }

    /// Makes [`VisualFactory::spawn`] fail once `limit` objects exist.
    pub fn set_spawn_limit(&self, limit: Option<usize>) {
        if let Ok(mut state) = self.lock() {
            state.spawn_limit = limit;
        }
    }
}

impl VisualFactory for HeadlessScene {
    type Handle = HeadlessVisual;

    fn spawn(&mut self, position: Vec3, color: LinearRgba) -> Result<HeadlessVisual, VisualError> {
        let mut state = self.lock()?;
        if let Some(limit) = state.spawn_limit {
            if state.objects.len() >= limit {
                return Err(VisualError::SpawnFailed(format!(
                    "scene is limited to {limit} objects"
                )));
            }
        }
        let index = state.objects.len();
        state.objects.push(VisualObject {
            position,
            color,
            position_writes: 0,
            detached: false,
        });
        Ok(HeadlessVisual {
            index,
            scene: self.clone(),
        })
    }
}

/// A handle to one object of a [`HeadlessScene`].
#[derive(Debug, Clone)]
pub struct HeadlessVisual {
    index: usize,
    scene: HeadlessScene,
}

impl HeadlessVisual {
    /// The spawn index of the object in its scene.
    pub fn index(&self) -> usize {
        self.index
    }

    fn with_object<R>(
        &self,
        f: impl FnOnce(&mut VisualObject) -> R,
    ) -> Result<R, VisualError> {
        let mut state = self.scene.lock()?;
        match state.objects.get_mut(self.index) {
            Some(object) if !object.detached => Ok(f(object)),
            _ => Err(VisualError::Detached(self.index)),
        }
    }
}

impl VisualHandle for HeadlessVisual {
    /// The last written position. Detached handles and poisoned scenes log
    /// the failure and report the origin.
    fn position(&self) -> Vec3 {
        self.with_object(|o| o.position).unwrap_or_else(|e| {
            log::warn!("Reading position of visual {} failed: {e}", self.index);
            Vec3::ZERO
        })
    }

    fn set_position(&mut self, position: Vec3) -> Result<(), VisualError> {
        self.with_object(|o| {
            o.position = position;
            o.position_writes += 1;
        })
    }

    fn set_color(&mut self, color: LinearRgba) -> Result<(), VisualError> {
        self.with_object(|o| o.color = color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_and_write() {
        let mut scene = HeadlessScene::new();
        let mut handle = scene.spawn(Vec3::ONE, LinearRgba::RED).unwrap();
        assert_eq!(handle.index(), 0);
        assert_eq!(handle.position(), Vec3::ONE);

        handle.set_position(Vec3::Z).unwrap();
        handle.set_color(LinearRgba::BLUE).unwrap();

        let object = scene.object(0).unwrap();
        assert_eq!(object.position, Vec3::Z);
        assert_eq!(object.color, LinearRgba::BLUE);
        assert_eq!(object.position_writes, 1);
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_detached_handle_rejects_writes() {
        let mut scene = HeadlessScene::new();
        let mut handle = scene.spawn(Vec3::ZERO, LinearRgba::WHITE).unwrap();
        scene.detach(0);
        assert_eq!(
            handle.set_position(Vec3::ONE),
            Err(VisualError::Detached(0))
        );
        assert_eq!(
            handle.set_color(LinearRgba::RED),
            Err(VisualError::Detached(0))
        );
    }

    #[test]
    fn test_spawn_limit() {
        let mut scene = HeadlessScene::new();
        scene.set_spawn_limit(Some(1));
        assert!(scene.spawn(Vec3::ZERO, LinearRgba::WHITE).is_ok());
        assert!(matches!(
            scene.spawn(Vec3::ZERO, LinearRgba::WHITE),
            Err(VisualError::SpawnFailed(_))
        ));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_poisoned_scene_falls_back_and_rejects_writes() {
        let mut scene = HeadlessScene::new();
        let mut handle = scene.spawn(Vec3::ONE, LinearRgba::WHITE).unwrap();

        let holder = scene.clone();
        let result = std::thread::spawn(move || {
            let _guard = holder.state.lock().unwrap();
            panic!("writer crashed while holding the scene");
        })
        .join();
        assert!(result.is_err());
        assert!(scene.state.is_poisoned());

        assert_eq!(scene.len(), 0);
        assert!(scene.is_empty());
        assert_eq!(scene.object(0), None);
        assert_eq!(handle.position(), Vec3::ZERO);
        assert!(matches!(
            handle.set_position(Vec3::Z),
            Err(VisualError::Backend(_))
        ));
    }
}
