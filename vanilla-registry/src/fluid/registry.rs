use super::{FluidEntry, FluidId};
use crate::RegistryExt;
use rustc_hash::FxHashMap;

pub struct FluidRegistry {
    by_id: FxHashMap<FluidId, FluidEntry>,
    by_name: FxHashMap<&'static str, FluidId>,
    allows_registering: bool,
}

impl FluidRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_id: FxHashMap::default(),
            by_name: FxHashMap::default(),
            allows_registering: true,
        }
    }

    /// # Panics
    /// Panics if the registry has been frozen.
    pub fn register(&mut self, entry: FluidEntry) {
        assert!(
            self.allows_registering,
            "Cannot register fluid after registry is frozen"
        );
        self.by_name.insert(entry.name, entry.id);
        self.by_id.insert(entry.id, entry);
    }

    #[must_use]
    pub fn get(&self, id: FluidId) -> Option<&FluidEntry> {
        self.by_id.get(&id)
    }

    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<FluidId> {
        self.by_name.get(name).copied()
    }

    /// Display name for logging; unknown ids print as `unknown`.
    #[must_use]
    pub fn name_of(&self, id: FluidId) -> &'static str {
        self.get(id).map_or("unknown", |entry| entry.name)
    }
}

impl Default for FluidRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryExt for FluidRegistry {
    fn freeze(&mut self) {
        self.allows_registering = false;
    }
}
