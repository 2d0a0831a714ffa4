//! Crate-level error types.

use std::fmt;

use crate::path::PathId;

/// Errors produced by the playback controller.
///
/// Only `start` can fail; every failure leaves the controller untouched.
/// Mid-playback faults (externally invalidated entities, degenerate step
/// timing) are recovered internally and never surface as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackError {
    /// No path definition is registered under the given id.
    ResourceNotFound(PathId),
    /// A playback is already running; stop it before starting another.
    AlreadyPlaying(PathId),
    /// The resolved definition has no waypoints.
    EmptyDefinition(PathId),
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceNotFound(id) => {
                write!(f, "no camera path registered under id {id}")
            }
            Self::AlreadyPlaying(id) => {
                write!(f, "cannot start path {id}: a playback is already active")
            }
            Self::EmptyDefinition(id) => {
                write!(f, "camera path {id} has no waypoints")
            }
        }
    }
}

impl std::error::Error for PlaybackError {}
