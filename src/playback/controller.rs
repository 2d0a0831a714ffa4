//! Time-driven interpolation over a path instance chain.

use std::time::Duration;

use glam::Vec3;
use log::{debug, warn};

use crate::camera::Camera;
use crate::error::PlaybackError;
use crate::options::PlaybackOptions;
use crate::path::instance::{self, PathNode, Transform};
use crate::path::registry::PathProvider;
use crate::path::PathId;
use crate::store::{Entity, EntityStore};
use crate::util::easing::Easing;

/// Snapshot of the current node taken before any mutation, so the
/// borrow of the store ends before the camera and controller update.
struct StepTarget {
    next: Option<Entity>,
    position: Vec3,
    look_at: Option<Vec3>,
}

/// Camera path playback controller.
///
/// Owns the idle/playing/paused state machine and drives the camera
/// along one instance chain per playback. Collaborators (entity store,
/// path provider, camera) are passed into each call rather than held,
/// so a controller is plain data and trivially testable.
///
/// Per tick while playing and unpaused, [`update`](Self::update)
/// accumulates elapsed time into a blend factor over the current
/// segment, eases it, and writes the interpolated origin and focus to
/// the camera. Reaching the end of a segment commits that pose as the
/// new interpolation anchor and advances down the chain; reaching the
/// tail sentinel tears the instance down and returns to idle.
#[derive(Debug)]
pub struct PathPlayback {
    head: Option<Entity>,
    current: Option<Entity>,
    anchor_origin: Vec3,
    anchor_focus: Vec3,
    elapsed_in_step: Duration,
    step_duration: Duration,
    paused: bool,
    easing: Easing,
    time_scale: f32,
}

impl PathPlayback {
    /// Idle controller with default easing and time scale.
    #[must_use]
    pub fn new() -> Self {
        Self {
            head: None,
            current: None,
            anchor_origin: Vec3::ZERO,
            anchor_focus: Vec3::ZERO,
            elapsed_in_step: Duration::ZERO,
            step_duration: Duration::ZERO,
            paused: false,
            easing: Easing::DEFAULT,
            time_scale: 1.0,
        }
    }

    /// Idle controller configured from options.
    ///
    /// A non-finite or negative time scale falls back to 1.0.
    #[must_use]
    pub fn with_options(options: &PlaybackOptions) -> Self {
        let time_scale = if options.time_scale.is_finite() && options.time_scale >= 0.0 {
            options.time_scale
        } else {
            1.0
        };
        Self {
            easing: options.easing,
            time_scale,
            ..Self::new()
        }
    }

    /// Begin playback of the path registered under `id`, anchored at the
    /// camera's current origin.
    ///
    /// # Errors
    ///
    /// - [`PlaybackError::ResourceNotFound`] if the id does not resolve;
    ///   nothing is created and no state changes.
    /// - [`PlaybackError::AlreadyPlaying`] if a playback is active; the
    ///   running playback is untouched.
    /// - [`PlaybackError::EmptyDefinition`] if the definition has no
    ///   waypoints.
    pub fn start(
        &mut self,
        store: &mut EntityStore,
        provider: &impl PathProvider,
        camera: &mut Camera,
        id: PathId,
    ) -> Result<(), PlaybackError> {
        if self.is_active(store) {
            return Err(PlaybackError::AlreadyPlaying(id));
        }
        // A stale head (chain destroyed externally) is cleared first so
        // the controller never carries two instances' worth of state.
        self.stop(store);

        let definition = provider
            .path(id)
            .ok_or(PlaybackError::ResourceNotFound(id))?;
        let head = instance::build(store, id, &definition, camera.origin())
            .ok_or(PlaybackError::EmptyDefinition(id))?;

        self.head = Some(head);
        self.current = Some(head);
        self.anchor_origin = camera.origin();
        self.anchor_focus = camera.focus();
        // The first segment aims the camera at the head's look-at point
        // from the start, when one exists.
        if let Some(position) = store
            .get::<PathNode>(head)
            .and_then(|node| node.look_at)
            .and_then(|look_at| store.get::<Transform>(look_at))
            .map(|transform| transform.position)
        {
            self.anchor_focus = position;
        }
        self.step_duration = definition.step_duration();
        self.elapsed_in_step = Duration::ZERO;
        self.paused = false;

        debug!(
            "started path {id} ({} waypoints, step {:?})",
            definition.waypoints().len(),
            self.step_duration
        );
        Ok(())
    }

    /// Tear down the current instance chain and return to idle.
    ///
    /// Safe to call when already idle.
    pub fn stop(&mut self, store: &mut EntityStore) {
        if let Some(head) = self.head.take() {
            let destroyed = instance::teardown(store, head);
            debug!("stopped playback ({destroyed} entities destroyed)");
        }
        self.current = None;
        self.elapsed_in_step = Duration::ZERO;
        self.step_duration = Duration::ZERO;
        self.paused = false;
    }

    /// Suspend or resume interpolation. While paused the camera holds
    /// its last computed pose and no time accumulates.
    pub fn pause(&mut self, flag: bool) {
        self.paused = flag;
    }

    /// Whether the pause latch is set.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether a playback is active: the head entity of the current
    /// chain is still valid in the store.
    #[must_use]
    pub fn is_active(&self, store: &EntityStore) -> bool {
        self.head.is_some_and(|head| store.contains(head))
    }

    /// Advance playback by `dt` and write the interpolated pose to the
    /// camera.
    ///
    /// No-op while idle or paused. If the chain was invalidated
    /// externally, playback is treated as finished and stops cleanly.
    pub fn update(&mut self, store: &mut EntityStore, camera: &mut Camera, dt: Duration) {
        let Some(head) = self.head else {
            return;
        };
        if !store.contains(head) {
            warn!("path instance invalidated externally; stopping playback");
            self.stop(store);
            return;
        }
        let Some(target) = self.current.and_then(|current| step_target(store, current)) else {
            warn!("path node invalidated externally; stopping playback");
            self.stop(store);
            return;
        };
        if self.paused {
            return;
        }

        self.elapsed_in_step += dt.mul_f32(self.time_scale);
        // A zero-length step (zero total duration, or authored that way)
        // completes instantly instead of dividing by zero.
        let blend_factor = if self.step_duration.is_zero() {
            1.0
        } else {
            (self.elapsed_in_step.as_secs_f32() / self.step_duration.as_secs_f32()).min(1.0)
        };
        let eased = self.easing.evaluate(blend_factor);

        camera.set_origin(self.anchor_origin.lerp(target.position, eased));
        if let Some(look_at) = target.look_at {
            camera.set_focus(self.anchor_focus.lerp(look_at, eased));
        }

        if blend_factor >= 1.0 {
            self.advance(store, &target);
        }
    }

    /// Commit the reached pose as the new interpolation anchors and step
    /// to the next node, stopping at the tail sentinel.
    fn advance(&mut self, store: &mut EntityStore, target: &StepTarget) {
        self.anchor_origin = target.position;
        if let Some(look_at) = target.look_at {
            self.anchor_focus = look_at;
        }
        match target.next {
            Some(next) => {
                self.current = Some(next);
                self.elapsed_in_step = Duration::ZERO;
            }
            None => {
                debug!("path complete");
                self.stop(store);
            }
        }
    }
}

impl Default for PathPlayback {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the current node's link and world positions, liveness-checking
/// the look-at pairing.
fn step_target(store: &EntityStore, current: Entity) -> Option<StepTarget> {
    let node = store.get::<PathNode>(current)?;
    let position = store.get::<Transform>(current)?.position;
    let look_at = node
        .look_at
        .and_then(|look_at| store.get::<Transform>(look_at))
        .map(|transform| transform.position);
    Some(StepTarget {
        next: node.next,
        position,
        look_at,
    })
}
