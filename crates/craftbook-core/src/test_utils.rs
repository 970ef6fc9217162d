//! Shared test helpers for unit and integration tests.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so these helpers
//! are available to other crates' tests via the `test-utils` feature.

use crate::id::*;
use crate::item::{Catalog, ItemStack};
use crate::recipe::{Recipe, ShapelessRecipe};
use crate::registry::RecipeRegistry;
use std::collections::{HashMap, HashSet};

/// Namespace used by test identifiers.
pub const TEST_NAMESPACE: &str = "craftbook";

// ===========================================================================
// Catalog
// ===========================================================================

/// Item names registered by [`standard_catalog`], in id order.
pub const STANDARD_ITEMS: [&str; 12] = [
    "STONE",
    "IRON_ORE",
    "IRON_INGOT",
    "IRON_BLOCK",
    "GOLD_ORE",
    "GOLD_INGOT",
    "COPPER_ORE",
    "COPPER_INGOT",
    "OAK_PLANKS",
    "BIRCH_PLANKS",
    "STICK",
    "DIAMOND",
];

pub fn standard_catalog() -> Catalog {
    Catalog::from_names(STANDARD_ITEMS)
}

pub fn stone() -> ItemTypeId {
    ItemTypeId(0)
}
pub fn iron_ore() -> ItemTypeId {
    ItemTypeId(1)
}
pub fn iron_ingot() -> ItemTypeId {
    ItemTypeId(2)
}
pub fn iron_block() -> ItemTypeId {
    ItemTypeId(3)
}
pub fn gold_ore() -> ItemTypeId {
    ItemTypeId(4)
}
pub fn gold_ingot() -> ItemTypeId {
    ItemTypeId(5)
}
pub fn oak_planks() -> ItemTypeId {
    ItemTypeId(8)
}
pub fn birch_planks() -> ItemTypeId {
    ItemTypeId(9)
}
pub fn stick() -> ItemTypeId {
    ItemTypeId(10)
}

// ===========================================================================
// Keys and recipes
// ===========================================================================

pub fn crafting_key(key: &str) -> RecipeKey {
    RecipeKey::new(TEST_NAMESPACE, Category::Crafting, key)
}

pub fn smelting_key(key: &str) -> RecipeKey {
    RecipeKey::new(TEST_NAMESPACE, Category::Smelting, key)
}

pub fn blasting_key(key: &str) -> RecipeKey {
    RecipeKey::new(TEST_NAMESPACE, Category::Blasting, key)
}

/// Smallest valid recipe object; useful when only the identifier matters.
pub fn dummy_recipe() -> Recipe {
    Recipe::Shapeless(ShapelessRecipe {
        result: ItemStack::new(stone(), 1),
        ingredients: Vec::new(),
    })
}

// ===========================================================================
// Recording registry
// ===========================================================================

/// A host registry that records every call and can be told to refuse
/// specific adds or removes.
#[derive(Debug, Default)]
pub struct RecordingRegistry {
    /// Ids passed to `add`, in call order (accepted or not).
    pub adds: Vec<RecipeKey>,
    /// Ids passed to `remove`, in call order (accepted or not).
    pub removes: Vec<RecipeKey>,
    /// Recipes currently held.
    pub recipes: HashMap<RecipeKey, Recipe>,
    reject_adds: HashSet<RecipeKey>,
    reject_removes: HashSet<RecipeKey>,
    reject_all_removes: bool,
}

impl RecordingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject_add(&mut self, id: &RecipeKey) {
        self.reject_adds.insert(id.clone());
    }

    pub fn reject_remove(&mut self, id: &RecipeKey) {
        self.reject_removes.insert(id.clone());
    }

    /// Make every subsequent `remove` fail.
    pub fn reject_all_removes(&mut self) {
        self.reject_all_removes = true;
    }

    pub fn recipe(&self, id: &RecipeKey) -> Option<&Recipe> {
        self.recipes.get(id)
    }
}

impl RecipeRegistry for RecordingRegistry {
    fn add(&mut self, id: &RecipeKey, recipe: Recipe) -> bool {
        self.adds.push(id.clone());
        if self.reject_adds.contains(id) {
            return false;
        }
        self.recipes.insert(id.clone(), recipe);
        true
    }

    fn remove(&mut self, id: &RecipeKey) -> bool {
        self.removes.push(id.clone());
        if self.reject_all_removes || self.reject_removes.contains(id) {
            return false;
        }
        self.recipes.remove(id).is_some()
    }
}
