use std::{collections::HashMap, sync::Arc};

use super::adapters::LoginAdapter;
use crate::modules::users::profile::Platform;

/// Platform → adapter lookup used by the coordinator for both login
/// dispatch and logout routing.
#[derive(Clone, Default)]
pub struct AdapterRegistry {
    adapters: HashMap<Platform, Arc<dyn LoginAdapter>>,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self {
            adapters: HashMap::new(),
        }
    }

    /// Registers an adapter under the platform it reports. Registering a
    /// second adapter for the same platform replaces the first.
    pub fn register(mut self, adapter: Arc<dyn LoginAdapter>) -> Self {
        self.adapters.insert(adapter.platform(), adapter);
        self
    }

    pub fn get(&self, platform: Platform) -> Option<Arc<dyn LoginAdapter>> {
        self.adapters.get(&platform).cloned()
    }
}
