//! Lifecycle controller: load every category on start, remove everything this
//! manager registered on stop.

use craftbook_core::builder;
use craftbook_core::id::{Category, RecipeKey};
use craftbook_core::item::{ItemCatalog, ItemResolver};
use craftbook_core::ledger::{Ledger, TeardownReport};
use craftbook_core::registry::RecipeRegistry;
use craftbook_core::validation::SkippedEntry;
use craftbook_data::loader::{ConfigStore, DataLoadError};
use craftbook_data::parser::parse_document;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::ManagerSettings;
use crate::error::PluginError;

/// Whether this manager currently owns registrations in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Unloaded,
    Loaded,
}

/// What happened to one category during start.
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub category: Category,
    pub registered: Vec<RecipeKey>,
    pub skipped: Vec<SkippedEntry>,
    pub rejected: Vec<RecipeKey>,
    /// Set when the category's document could not be loaded at all.
    pub load_error: Option<Arc<DataLoadError>>,
}

impl CategoryReport {
    fn new(category: Category) -> Self {
        Self {
            category,
            registered: Vec::new(),
            skipped: Vec::new(),
            rejected: Vec::new(),
            load_error: None,
        }
    }
}

/// Outcome of `on_start`, one report per category in load order.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub categories: Vec<CategoryReport>,
}

impl LoadReport {
    pub fn category(&self, category: Category) -> Option<&CategoryReport> {
        self.categories.iter().find(|r| r.category == category)
    }

    pub fn registered_count(&self) -> usize {
        self.categories.iter().map(|r| r.registered.len()).sum()
    }

    pub fn skipped_count(&self) -> usize {
        self.categories.iter().map(|r| r.skipped.len()).sum()
    }
}

/// Outcome of `on_stop`, one teardown report per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopReport {
    pub categories: Vec<TeardownReport>,
}

impl StopReport {
    pub fn removed_count(&self) -> usize {
        self.categories.iter().map(|r| r.removed.len()).sum()
    }

    pub fn failed_count(&self) -> usize {
        self.categories.iter().map(|r| r.failed.len()).sum()
    }
}

/// Owns the host collaborators and the ledger for one enable/disable cycle
/// at a time.
pub struct RecipeManager<C, R, S> {
    catalog: C,
    registry: R,
    store: S,
    ledger: Ledger,
    settings: ManagerSettings,
    state: LifecycleState,
}

impl<C, R, S> RecipeManager<C, R, S>
where
    C: ItemCatalog,
    R: RecipeRegistry,
    S: ConfigStore,
{
    pub fn new(catalog: C, registry: R, store: S, settings: ManagerSettings) -> Self {
        Self::with_ledger(catalog, registry, store, settings, Ledger::new())
    }

    /// Create a manager around an existing ledger.
    pub fn with_ledger(
        catalog: C,
        registry: R,
        store: S,
        settings: ManagerSettings,
        ledger: Ledger,
    ) -> Self {
        let state = if ledger.is_empty() {
            LifecycleState::Unloaded
        } else {
            LifecycleState::Loaded
        };
        Self {
            catalog,
            registry,
            store,
            ledger,
            settings,
            state,
        }
    }

    /// Load and register every category: crafting, then smelting, then
    /// blasting. A failing category never prevents the others from loading.
    pub fn on_start(&mut self) -> Result<LoadReport, PluginError> {
        if self.state == LifecycleState::Loaded {
            warn!("start requested while recipes are still registered");
            return Err(PluginError::AlreadyLoaded);
        }

        let categories = Category::ALL
            .iter()
            .map(|category| self.load_category(*category))
            .collect();
        let report = LoadReport { categories };
        self.state = LifecycleState::Loaded;

        info!(
            registered = report.registered_count(),
            skipped = report.skipped_count(),
            "recipe load complete"
        );
        Ok(report)
    }

    /// Remove every recipe this manager registered. Local tracking is
    /// cleared even where the host refused a removal.
    pub fn on_stop(&mut self) -> StopReport {
        let categories = Category::ALL
            .iter()
            .map(|category| self.ledger.unregister_all(&mut self.registry, *category))
            .collect();
        let report = StopReport { categories };
        self.state = LifecycleState::Unloaded;

        info!(
            removed = report.removed_count(),
            failed = report.failed_count(),
            "recipe unload complete"
        );
        report
    }

    fn load_category(&mut self, category: Category) -> CategoryReport {
        let mut report = CategoryReport::new(category);

        let document = match self.store.load(category.document_name()) {
            Ok(document) => document,
            Err(e) => {
                warn!("could not load {category} recipes: {e}");
                report.load_error = Some(Arc::new(e));
                return report;
            }
        };

        let resolver = ItemResolver::new(&self.catalog);
        let outcome = parse_document(category, &document, &resolver, self.settings.strictness);
        report.skipped = outcome.skipped;

        for descriptor in outcome.descriptors {
            let entry = descriptor.key.clone();
            let (key, recipe) =
                match builder::build(&self.settings.namespace, descriptor, self.settings.strictness)
                {
                    Ok(built) => built,
                    Err(reason) => {
                        warn!(entry = %entry, "skipping {category} recipe: {reason}");
                        report.skipped.push(SkippedEntry::new(&entry, reason));
                        continue;
                    }
                };
            match self.ledger.register(&mut self.registry, key.clone(), recipe) {
                Ok(()) => report.registered.push(key),
                Err(_) => report.rejected.push(key),
            }
        }

        report
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    pub fn settings(&self) -> &ManagerSettings {
        &self.settings
    }
}
