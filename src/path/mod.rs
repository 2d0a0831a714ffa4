//! Authored camera paths and their run-time entity instances.
//!
//! A [`PathDefinition`] is an immutable authored resource: waypoint
//! offsets plus timing, registered in a [`PathRegistry`] under a stable
//! [`PathId`]. Starting a playback materializes a definition into a
//! private linked chain of entities (the instance graph) anchored at the
//! camera's position; see [`instance`].

/// Immutable authored path data and stable identifiers.
pub mod definition;
/// Run-time instance graph: components, construction, teardown.
pub mod instance;
/// Registry of authored definitions and the lookup seam.
pub mod registry;

pub use definition::{PathDefinition, PathId, Waypoint};
pub use registry::{PathProvider, PathRegistry};
