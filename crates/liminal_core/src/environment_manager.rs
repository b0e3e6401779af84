//! Environment management
//!
//! The EnvironmentManager owns all three environments and enforces that
//! exactly one of them is active and visible at any time.
//!
//! # Example
//! ```ignore
//! let mut manager = EnvironmentManager::new([corridor, pool, classroom]);
//!
//! // Switch to the pool; returns Ok(false) if it was already active
//! manager.activate(1)?;
//!
//! // Frame loop
//! let env = manager.active_mut();
//! ```

use crate::environment::{Environment, EnvironmentError, EnvironmentKind};
use crate::World;

/// Owns the environments and tracks which one is active
pub struct EnvironmentManager {
    /// Environments in `EnvironmentKind` index order
    environments: Vec<Environment>,
    /// Index of the active environment
    active: usize,
}

impl EnvironmentManager {
    /// Create a manager from the three environments, activating the first
    ///
    /// Environments are re-ordered by kind, so the array order does not matter.
    pub fn new(environments: [Environment; 3]) -> Self {
        let mut environments: Vec<Environment> = environments.into();
        environments.sort_by_key(|env| env.kind().index());
        debug_assert!(environments
            .iter()
            .zip(EnvironmentKind::ALL)
            .all(|(env, kind)| env.kind() == kind));

        for env in &mut environments {
            env.set_visible(false);
        }
        environments[0].set_visible(true);

        Self {
            environments,
            active: 0,
        }
    }

    /// Make the environment at `index` the active one
    ///
    /// Returns `Ok(true)` if the active environment changed and `Ok(false)`
    /// if `index` was already active (nothing changes).
    pub fn activate(&mut self, index: usize) -> Result<bool, EnvironmentError> {
        let kind = EnvironmentKind::try_from(index)?;
        if index == self.active {
            return Ok(false);
        }

        self.environments[self.active].set_visible(false);
        self.environments[index].set_visible(true);
        log::info!(
            "Switched environment: {} -> {}",
            self.environments[self.active].kind(),
            kind
        );
        self.active = index;
        Ok(true)
    }

    /// Index of the active environment
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Kind of the active environment
    pub fn active_kind(&self) -> EnvironmentKind {
        self.environments[self.active].kind()
    }

    /// Get a reference to the active environment
    pub fn active(&self) -> &Environment {
        &self.environments[self.active]
    }

    /// Get a mutable reference to the active environment
    pub fn active_mut(&mut self) -> &mut Environment {
        &mut self.environments[self.active]
    }

    /// Get a reference to the active environment's world
    pub fn active_world(&self) -> &World {
        &self.active().world
    }

    /// Get an environment by index (whether active or not)
    pub fn get(&self, index: usize) -> Option<&Environment> {
        self.environments.get(index)
    }

    /// Number of visible environments (always 1)
    pub fn visible_count(&self) -> usize {
        self.environments.iter().filter(|env| env.is_visible()).count()
    }

    /// Iterate over all environments in index order
    pub fn iter(&self) -> impl Iterator<Item = &Environment> {
        self.environments.iter()
    }
}
