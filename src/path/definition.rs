//! Immutable authored camera path definitions.

use std::fmt;
use std::time::Duration;

use glam::Vec3;

/// Stable identifier for an authored camera path.
///
/// Ids are plain 64-bit values so they can be minted by any resource
/// pipeline; [`PathId::from_name`] derives one from a resource name with
/// FNV-1a, which is stable across runs and platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathId(u64);

impl PathId {
    /// Wrap a raw 64-bit id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Derive a stable id from a resource name (FNV-1a).
    #[must_use]
    pub const fn from_name(name: &str) -> Self {
        let bytes = name.as_bytes();
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
            i += 1;
        }
        Self(hash)
    }

    /// The raw 64-bit value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// One authored step of a camera path.
///
/// Both offsets are relative to the playback anchor (the camera's world
/// position at the moment playback starts), not absolute positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    /// Camera position offset from the anchor.
    pub position_offset: Vec3,
    /// Look-at target offset from the anchor.
    pub look_at_offset: Vec3,
}

impl Waypoint {
    /// Waypoint from a pair of anchor-relative offsets.
    #[must_use]
    pub const fn new(position_offset: Vec3, look_at_offset: Vec3) -> Self {
        Self {
            position_offset,
            look_at_offset,
        }
    }
}

/// An immutable authored camera path: ordered waypoints plus timing.
///
/// Definitions are owned by a [`registry`](crate::path::registry) and
/// shared between concurrent playbacks; nothing mutates one after load.
/// A well-formed definition has at least one waypoint.
#[derive(Debug, Clone, PartialEq)]
pub struct PathDefinition {
    waypoints: Vec<Waypoint>,
    total_duration: Duration,
    movement_speed: u32,
    display_name: Option<String>,
}

impl PathDefinition {
    /// Definition from authored waypoints, total playback duration, and
    /// the authored movement-speed hint.
    #[must_use]
    pub fn new(
        waypoints: Vec<Waypoint>,
        total_duration: Duration,
        movement_speed: u32,
    ) -> Self {
        Self {
            waypoints,
            total_duration,
            movement_speed,
            display_name: None,
        }
    }

    /// Attach a human-readable name for debug display.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// The ordered waypoint sequence.
    #[must_use]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Total duration of one full playback.
    #[must_use]
    pub const fn total_duration(&self) -> Duration {
        self.total_duration
    }

    /// Authored movement-speed hint. Playback timing is derived from
    /// [`total_duration`](Self::total_duration); this value is carried
    /// for tooling.
    #[must_use]
    pub const fn movement_speed(&self) -> u32 {
        self.movement_speed
    }

    /// Debug display name, if the author set one.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Duration of one segment: total duration split evenly across the
    /// waypoints. Zero for a (malformed) empty definition.
    #[must_use]
    pub fn step_duration(&self) -> Duration {
        match u32::try_from(self.waypoints.len()) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(count) => self.total_duration / count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_step() -> PathDefinition {
        PathDefinition::new(
            vec![
                Waypoint::new(Vec3::X, Vec3::ZERO),
                Waypoint::new(Vec3::Y, Vec3::ZERO),
                Waypoint::new(Vec3::Z, Vec3::ZERO),
            ],
            Duration::from_millis(3000),
            10,
        )
    }

    #[test]
    fn step_duration_splits_total_evenly() {
        assert_eq!(three_step().step_duration(), Duration::from_millis(1000));
    }

    #[test]
    fn step_duration_of_empty_definition_is_zero() {
        let def = PathDefinition::new(vec![], Duration::from_secs(5), 0);
        assert_eq!(def.step_duration(), Duration::ZERO);
    }

    #[test]
    fn display_name_defaults_to_none() {
        assert_eq!(three_step().display_name(), None);
        let named = three_step().with_display_name("flyover");
        assert_eq!(named.display_name(), Some("flyover"));
    }

    #[test]
    fn id_from_name_is_stable() {
        let a = PathId::from_name("intro");
        let b = PathId::from_name("intro");
        let c = PathId::from_name("outro");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn id_display_is_hex() {
        let id = PathId::new(0xdead_beef);
        assert_eq!(id.to_string(), "0x00000000deadbeef");
    }
}
