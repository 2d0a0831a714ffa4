//! Generational entity store with typed component records.
//!
//! Entities are opaque handles into a slot arena. Each slot carries a
//! generation counter that is bumped on despawn, so a stale handle can
//! never address a recycled slot (the ABA problem). Components are
//! arbitrary `'static` types stored in per-type columns keyed by entity
//! index, which makes iteration-by-type a walk over a single column
//! rather than a scan of every entity.

use std::any::{Any, TypeId};

use rustc_hash::FxHashMap;

/// Opaque handle to an entity in an [`EntityStore`].
///
/// Handles are cheap to copy and remain safe after the entity dies:
/// [`EntityStore::contains`] returns `false` for any stale handle, even
/// if the underlying slot has been recycled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    index: u32,
    generation: u32,
}

impl Entity {
    /// Slot index, exposed for diagnostics only.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }
}

/// One arena slot: the current generation and whether it is occupied.
#[derive(Debug, Clone, Copy)]
struct Slot {
    generation: u32,
    alive: bool,
}

/// Type-erased view of a component column, enough for despawn cleanup.
trait AnyColumn {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    /// Drop the record stored for the given entity index, if any.
    fn evict(&mut self, index: u32);
}

/// Concrete column: all records of one component type, keyed by entity
/// index.
struct Column<T> {
    cells: FxHashMap<u32, T>,
}

impl<T> Column<T> {
    fn new() -> Self {
        Self {
            cells: FxHashMap::default(),
        }
    }
}

impl<T: 'static> AnyColumn for Column<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn evict(&mut self, index: u32) {
        let _ = self.cells.remove(&index);
    }
}

/// Shared container of entities and their attached component records.
///
/// The store is the sole owner of entity lifetime; everything else holds
/// [`Entity`] handles and must liveness-check them before dereferencing.
#[derive(Default)]
pub struct EntityStore {
    slots: Vec<Slot>,
    free: Vec<u32>,
    columns: FxHashMap<TypeId, Box<dyn AnyColumn>>,
    live: u32,
}

impl EntityStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new live entity with no components attached.
    pub fn spawn(&mut self) -> Entity {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.alive = true;
            self.live += 1;
            return Entity {
                index,
                generation: slot.generation,
            };
        }

        let index = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
        self.slots.push(Slot {
            generation: 0,
            alive: true,
        });
        self.live += 1;
        Entity {
            index,
            generation: 0,
        }
    }

    /// Destroy an entity and drop all of its component records.
    ///
    /// Returns `false` if the handle was already dead; destroying a dead
    /// entity is a no-op, never an error.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        if !self.contains(entity) {
            return false;
        }
        let slot = &mut self.slots[entity.index as usize];
        slot.alive = false;
        slot.generation = slot.generation.wrapping_add(1);
        for column in self.columns.values_mut() {
            column.evict(entity.index);
        }
        self.free.push(entity.index);
        self.live -= 1;
        true
    }

    /// Whether the handle refers to a live entity.
    #[must_use]
    pub fn contains(&self, entity: Entity) -> bool {
        self.slots
            .get(entity.index as usize)
            .is_some_and(|slot| slot.alive && slot.generation == entity.generation)
    }

    /// Attach a component record to a live entity, replacing any existing
    /// record of the same type. No-op on a dead handle.
    pub fn insert<T: 'static>(&mut self, entity: Entity, value: T) {
        if !self.contains(entity) {
            return;
        }
        let column = self
            .columns
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(Column::<T>::new()));
        if let Some(column) = column.as_any_mut().downcast_mut::<Column<T>>() {
            let _ = column.cells.insert(entity.index, value);
        }
    }

    /// The component record of type `T` on the entity, if the entity is
    /// live and carries one.
    #[must_use]
    pub fn get<T: 'static>(&self, entity: Entity) -> Option<&T> {
        if !self.contains(entity) {
            return None;
        }
        self.column::<T>()?.cells.get(&entity.index)
    }

    /// Mutable access to the component record of type `T` on the entity.
    pub fn get_mut<T: 'static>(&mut self, entity: Entity) -> Option<&mut T> {
        if !self.contains(entity) {
            return None;
        }
        self.columns
            .get_mut(&TypeId::of::<T>())?
            .as_any_mut()
            .downcast_mut::<Column<T>>()?
            .cells
            .get_mut(&entity.index)
    }

    /// Detach and return the component record of type `T`, if present.
    pub fn remove<T: 'static>(&mut self, entity: Entity) -> Option<T> {
        if !self.contains(entity) {
            return None;
        }
        self.columns
            .get_mut(&TypeId::of::<T>())?
            .as_any_mut()
            .downcast_mut::<Column<T>>()?
            .cells
            .remove(&entity.index)
    }

    /// Iterate every live entity carrying a component of type `T`.
    ///
    /// Iteration order is unspecified.
    pub fn iter<T: 'static>(&self) -> impl Iterator<Item = (Entity, &T)> {
        let slots = &self.slots;
        self.column::<T>()
            .into_iter()
            .flat_map(|column| column.cells.iter())
            .map(move |(&index, value)| {
                let generation = slots
                    .get(index as usize)
                    .map_or(0, |slot| slot.generation);
                (Entity { index, generation }, value)
            })
    }

    /// Number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live as usize
    }

    /// Whether the store holds no live entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    fn column<T: 'static>(&self) -> Option<&Column<T>> {
        self.columns
            .get(&TypeId::of::<T>())?
            .as_any()
            .downcast_ref::<Column<T>>()
    }
}

impl std::fmt::Debug for EntityStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityStore")
            .field("live", &self.live)
            .field("slots", &self.slots.len())
            .field("component_types", &self.columns.len())
            .finish()
    }
}
