//! Run-time path instance graphs.
//!
//! Starting a playback materializes a [`PathDefinition`] into a chain of
//! entities: one position entity per waypoint, linked through
//! [`PathNode::next`], each paired with a separate look-at entity through
//! [`PathNode::look_at`]. All positions are resolved against the anchor
//! (the camera's world position at start time). The head of the chain
//! carries a [`PathStart`] marker naming the source definition, which is
//! what distinguishes instance heads during bulk iteration.

use glam::{Quat, Vec3};
use log::debug;

use super::definition::{PathDefinition, PathId, Waypoint};
use crate::store::{Entity, EntityStore};

/// World transform attached to every path instance entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position.
    pub position: Vec3,
    /// Orientation (identity for path nodes).
    pub rotation: Quat,
    /// Scale (unit for path nodes).
    pub scale: Vec3,
}

impl Transform {
    /// Transform at a position with identity rotation and unit scale.
    #[must_use]
    pub const fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

/// Chain link attached to every position entity of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathNode {
    /// The following position entity; `None` marks the tail.
    pub next: Option<Entity>,
    /// The paired look-at entity, if one exists.
    pub look_at: Option<Entity>,
}

/// Marker attached to the head position entity only.
///
/// Records which definition this run-time chain was built from, so bulk
/// iteration can enumerate the active instances of a given path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStart {
    /// Id of the source definition.
    pub source: PathId,
    /// Reserved instance flags.
    pub flags: u32,
}

fn spawn_position(store: &mut EntityStore, anchor: Vec3, waypoint: &Waypoint) -> Entity {
    let entity = store.spawn();
    store.insert(entity, Transform::at(anchor + waypoint.position_offset));
    entity
}

fn spawn_look_at(store: &mut EntityStore, anchor: Vec3, waypoint: &Waypoint) -> Entity {
    let entity = store.spawn();
    store.insert(entity, Transform::at(anchor + waypoint.look_at_offset));
    entity
}

/// Materialize a definition as a fresh instance chain anchored at
/// `anchor`, returning the head entity.
///
/// Creates exactly one position entity and one look-at entity per
/// waypoint; only the head receives the [`PathStart`] marker. Returns
/// `None` (creating nothing) for a definition with no waypoints.
pub fn build(
    store: &mut EntityStore,
    id: PathId,
    definition: &PathDefinition,
    anchor: Vec3,
) -> Option<Entity> {
    let (first, rest) = definition.waypoints().split_first()?;

    let head = spawn_position(store, anchor, first);
    store.insert(head, PathStart { source: id, flags: 0 });

    let mut previous_position = head;
    let mut previous_look_at = spawn_look_at(store, anchor, first);

    for waypoint in rest {
        let position = spawn_position(store, anchor, waypoint);
        store.insert(
            previous_position,
            PathNode {
                next: Some(position),
                look_at: Some(previous_look_at),
            },
        );
        previous_position = position;
        previous_look_at = spawn_look_at(store, anchor, waypoint);
    }

    store.insert(
        previous_position,
        PathNode {
            next: None,
            look_at: Some(previous_look_at),
        },
    );

    debug!(
        "built instance of path {id} ({} waypoints, anchor {anchor})",
        definition.waypoints().len()
    );
    Some(head)
}

/// Destroy an instance chain rooted at `head`, including every paired
/// look-at entity. The head is destroyed last.
///
/// Idempotent: an already-destroyed head is a no-op, and look-at
/// entities that were invalidated externally are skipped without error.
/// Runs in O(chain length) with an iterative walk.
///
/// Returns the number of entities destroyed.
pub fn teardown(store: &mut EntityStore, head: Entity) -> usize {
    if !store.contains(head) {
        return 0;
    }

    let mut destroyed = 0;
    let (mut current, head_look_at) = store
        .get::<PathNode>(head)
        .map_or((None, None), |node| (node.next, node.look_at));

    if let Some(look_at) = head_look_at {
        if store.despawn(look_at) {
            destroyed += 1;
        }
    }

    while let Some(entity) = current {
        let (next, look_at) = store
            .get::<PathNode>(entity)
            .map_or((None, None), |node| (node.next, node.look_at));
        if store.despawn(entity) {
            destroyed += 1;
        }
        if let Some(look_at) = look_at {
            if store.despawn(look_at) {
                destroyed += 1;
            }
        }
        current = next;
    }

    if store.despawn(head) {
        destroyed += 1;
    }
    debug!("tore down path instance ({destroyed} entities)");
    destroyed
}

/// Number of position nodes reachable from `head` (zero if the head is
/// dead). Walks the chain iteratively, stopping at the tail sentinel or
/// at the first externally destroyed node.
#[must_use]
pub fn chain_len(store: &EntityStore, head: Entity) -> usize {
    let mut count = 0;
    let mut current = Some(head);
    while let Some(entity) = current {
        if !store.contains(entity) {
            break;
        }
        count += 1;
        current = store.get::<PathNode>(entity).and_then(|node| node.next);
    }
    count
}

/// Head entities of every live instance built from the given definition.
#[must_use]
pub fn instances_of(store: &EntityStore, id: PathId) -> Vec<Entity> {
    store
        .iter::<PathStart>()
        .filter(|(_, start)| start.source == id)
        .map(|(entity, _)| entity)
        .collect()
}
