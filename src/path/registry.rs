//! Registry of authored path definitions.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::{PathDefinition, PathId};

/// Read-only lookup seam for resolving path ids into definitions.
///
/// The playback controller depends on this trait rather than on a
/// concrete registry, so tests can substitute stub providers and hosts
/// can adapt their own resource systems.
pub trait PathProvider {
    /// Resolve an id into its shared, immutable definition.
    fn path(&self, id: PathId) -> Option<Arc<PathDefinition>>;
}

/// Owning registry of authored camera paths, keyed by stable id.
///
/// Definitions are stored behind `Arc` so lookups hand out shared
/// handles; concurrent playbacks of one definition all reference the
/// same authored data.
#[derive(Debug, Default)]
pub struct PathRegistry {
    paths: FxHashMap<PathId, Arc<PathDefinition>>,
}

impl PathRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition under an id, replacing any previous entry.
    pub fn insert(&mut self, id: PathId, definition: PathDefinition) {
        let _ = self.paths.insert(id, Arc::new(definition));
    }

    /// Remove a definition. In-flight playbacks keep their `Arc` handles
    /// and finish undisturbed.
    pub fn remove(&mut self, id: PathId) -> Option<Arc<PathDefinition>> {
        self.paths.remove(&id)
    }

    /// Whether an id is registered.
    #[must_use]
    pub fn contains(&self, id: PathId) -> bool {
        self.paths.contains_key(&id)
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate the registered ids (unspecified order).
    pub fn ids(&self) -> impl Iterator<Item = PathId> + '_ {
        self.paths.keys().copied()
    }
}

impl PathProvider for PathRegistry {
    fn path(&self, id: PathId) -> Option<Arc<PathDefinition>> {
        self.paths.get(&id).cloned()
    }
}
