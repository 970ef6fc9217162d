//! Registration ledger: which identifiers this manager owns in the host
//! registry, per category.
//!
//! A key enters the ledger only after the host accepted it, and every key
//! leaves it during teardown whether or not the host confirmed the removal.

use crate::id::{Category, RecipeKey};
use crate::recipe::Recipe;
use crate::registry::RecipeRegistry;
use std::collections::BTreeSet;
use tracing::{info, warn};

/// The host refused a registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("host registry rejected recipe '{key}'")]
    Rejected { key: RecipeKey },
}

/// Outcome of draining one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeardownReport {
    pub category: Category,
    pub removed: Vec<RecipeKey>,
    pub failed: Vec<RecipeKey>,
}

impl TeardownReport {
    /// Number of remove calls issued to the host.
    pub fn attempted(&self) -> usize {
        self.removed.len() + self.failed.len()
    }
}

/// Identifiers currently owned in the host registry, one set per category.
#[derive(Debug, Default)]
pub struct Ledger {
    owned: [BTreeSet<RecipeKey>; 3],
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `recipe` to the host under `key` and track it on success.
    pub fn register<R: RecipeRegistry + ?Sized>(
        &mut self,
        registry: &mut R,
        key: RecipeKey,
        recipe: Recipe,
    ) -> Result<(), RegistrationError> {
        if !registry.add(&key, recipe) {
            warn!(recipe = %key, "failed to register {} recipe", key.category);
            return Err(RegistrationError::Rejected { key });
        }
        info!(recipe = %key, "registered {} recipe", key.category);
        self.owned[key.category.index()].insert(key);
        Ok(())
    }

    /// Remove every owned recipe of `category` from the host, then forget
    /// them all. Failed removals are reported but not retained.
    pub fn unregister_all<R: RecipeRegistry + ?Sized>(
        &mut self,
        registry: &mut R,
        category: Category,
    ) -> TeardownReport {
        let keys = std::mem::take(&mut self.owned[category.index()]);
        let mut report = TeardownReport {
            category,
            removed: Vec::new(),
            failed: Vec::new(),
        };
        for key in keys {
            if registry.remove(&key) {
                info!(recipe = %key, "removed {category} recipe");
                report.removed.push(key);
            } else {
                warn!(recipe = %key, "failed to remove {category} recipe");
                report.failed.push(key);
            }
        }
        report
    }

    pub fn owns(&self, key: &RecipeKey) -> bool {
        self.owned[key.category.index()].contains(key)
    }

    pub fn owned(&self, category: Category) -> impl Iterator<Item = &RecipeKey> {
        self.owned[category.index()].iter()
    }

    pub fn owned_count(&self, category: Category) -> usize {
        self.owned[category.index()].len()
    }

    pub fn total_owned(&self) -> usize {
        self.owned.iter().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_owned() == 0
    }
}
