//! Item types, the host catalog contract, and namespaced name resolution.

use crate::id::ItemTypeId;
use crate::recipe::RecipeChoice;
use std::collections::HashMap;

// ===========================================================================
// Catalog
// ===========================================================================

/// The host's item catalog: a name to item-type lookup.
///
/// Names passed to `lookup` are bare identifiers (the namespace already
/// stripped). Implementations decide their own case rules; [`Catalog`]
/// ignores case.
pub trait ItemCatalog {
    fn lookup(&self, name: &str) -> Option<ItemTypeId>;
}

impl<C: ItemCatalog + ?Sized> ItemCatalog for &C {
    fn lookup(&self, name: &str) -> Option<ItemTypeId> {
        (**self).lookup(name)
    }
}

/// In-process catalog with case-insensitive lookup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    names: Vec<String>,
    name_to_id: HashMap<String, ItemTypeId>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from names, assigning ids in order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::new();
        for name in names {
            catalog.register(name.as_ref());
        }
        catalog
    }

    /// Register an item type. Registering an existing name returns its id.
    pub fn register(&mut self, name: &str) -> ItemTypeId {
        let canonical = name.to_ascii_uppercase();
        if let Some(id) = self.name_to_id.get(&canonical) {
            return *id;
        }
        let id = ItemTypeId(self.names.len() as u32);
        self.names.push(canonical.clone());
        self.name_to_id.insert(canonical, id);
        id
    }

    /// Canonical (upper-case) name of an item type.
    pub fn name(&self, id: ItemTypeId) -> Option<&str> {
        self.names.get(id.0 as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl ItemCatalog for Catalog {
    fn lookup(&self, name: &str) -> Option<ItemTypeId> {
        self.name_to_id.get(&name.to_ascii_uppercase()).copied()
    }
}

// ===========================================================================
// Item stacks
// ===========================================================================

/// An item type together with a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemStack {
    pub item: ItemTypeId,
    pub amount: u32,
}

impl ItemStack {
    pub fn new(item: ItemTypeId, amount: u32) -> Self {
        Self { item, amount }
    }
}

// ===========================================================================
// Resolution
// ===========================================================================

/// Why a namespaced item name did not resolve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The name is not of the form `namespace:identifier`.
    #[error("malformed item name '{raw}' (expected 'namespace:identifier')")]
    Malformed { raw: String },

    /// The identifier is not in the catalog.
    #[error("unknown item '{raw}'")]
    UnknownItem { raw: String },
}

impl ResolveError {
    /// The raw name that failed to resolve.
    pub fn raw(&self) -> &str {
        match self {
            ResolveError::Malformed { raw } | ResolveError::UnknownItem { raw } => raw,
        }
    }
}

/// Maps `namespace:identifier` strings to catalog item types.
#[derive(Debug)]
pub struct ItemResolver<'a, C: ?Sized> {
    catalog: &'a C,
}

impl<'a, C: ItemCatalog + ?Sized> ItemResolver<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Resolve one namespaced name. The namespace itself is not checked.
    pub fn resolve(&self, raw: &str) -> Result<ItemTypeId, ResolveError> {
        let identifier = match raw.trim().split_once(':') {
            Some((_, id)) if !id.is_empty() && !id.contains(':') => id,
            _ => {
                return Err(ResolveError::Malformed {
                    raw: raw.to_string(),
                });
            }
        };
        self.catalog
            .lookup(identifier)
            .ok_or_else(|| ResolveError::UnknownItem {
                raw: raw.to_string(),
            })
    }

    /// Resolve a list of alternatives, dropping the ones that fail.
    pub fn resolve_choice<S: AsRef<str>>(&self, names: &[S]) -> RecipeChoice {
        let mut choice = RecipeChoice::default();
        for name in names {
            match self.resolve(name.as_ref()) {
                Ok(id) => choice.push(id),
                Err(e) => tracing::debug!("dropping ingredient alternative: {e}"),
            }
        }
        choice
    }
}
