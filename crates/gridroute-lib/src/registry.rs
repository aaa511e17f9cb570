use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::strategy::{AStarStrategy, DijkstraStrategy, PathfindingStrategy};

/// Name resolved when a caller does not specify an algorithm.
pub const DEFAULT_STRATEGY: &str = "astar";

/// Case-insensitive name-to-strategy lookup.
///
/// Constructed explicitly by whoever assembles the service; there is no
/// module-level singleton. [`StrategyRegistry::default`] registers the two
/// built-in algorithms, and [`StrategyRegistry::register`] accepts further
/// ones without modifying lookup logic.
#[derive(Clone)]
pub struct StrategyRegistry {
    strategies: HashMap<String, Arc<dyn PathfindingStrategy>>,
}

impl StrategyRegistry {
    /// Registry with nothing registered; useful for fully custom setups.
    pub fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Register a strategy under a case-insensitive name.
    ///
    /// Re-registering a name replaces the previous strategy.
    pub fn register(&mut self, name: &str, strategy: Arc<dyn PathfindingStrategy>) {
        self.strategies.insert(name.to_lowercase(), strategy);
    }

    /// Resolve a strategy by name, falling back to [`DEFAULT_STRATEGY`] when
    /// no name is supplied.
    ///
    /// An unregistered name is a caller error, not a "no path" outcome, so
    /// this is the one lookup in the core that fails loudly.
    pub fn get(&self, name: Option<&str>) -> Result<Arc<dyn PathfindingStrategy>> {
        let requested = name.unwrap_or(DEFAULT_STRATEGY);
        self.strategies
            .get(&requested.to_lowercase())
            .cloned()
            .ok_or_else(|| Error::UnknownStrategy {
                name: requested.to_string(),
                available: self.names(),
            })
    }

    /// Registered strategy names, sorted for stable introspection output.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.strategies.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("astar", Arc::new(AStarStrategy));
        registry.register("dijkstra", Arc::new(DijkstraStrategy));
        registry
    }
}
