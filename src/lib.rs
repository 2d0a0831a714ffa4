// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Entity-backed camera path playback for real-time 3D engines.
//!
//! A camera path is authored as an ordered list of waypoints (position and
//! look-at offsets) with a total duration. When playback starts, camrail
//! materializes the path as a linked chain of entities in a shared
//! [`store::EntityStore`], anchored at the camera's current position, and
//! then drives a per-tick interpolation state machine that eases the shared
//! [`camera::Camera`] from node to node. When the chain is exhausted the
//! instance graph is torn down and the controller returns to idle.
//!
//! # Key entry points
//!
//! - [`playback::PathPlayback`] - the playback controller state machine
//! - [`store::EntityStore`] - generational entity/component store
//! - [`path::PathRegistry`] - registry of authored path definitions
//! - [`options::Options`] - runtime configuration (easing, time scale,
//!   camera defaults)
//!
//! # Architecture
//!
//! Authored [`path::PathDefinition`]s are immutable and shared; each
//! playback builds its own private instance chain, so multiple concurrent
//! playbacks of one definition never interfere. The controller holds only
//! entity handles into the store and liveness-checks them before every
//! dereference, so external destruction of path entities degrades to a
//! clean stop rather than a fault.

pub mod camera;
pub mod error;
pub mod options;
pub mod path;
pub mod playback;
pub mod store;
pub mod util;
