use crate::id::RecipeKey;
use crate::recipe::Recipe;
use std::collections::HashMap;

/// The host's recipe registry.
///
/// Only the success signal of each call is observed; the registry's
/// internal state is never inspected.
pub trait RecipeRegistry {
    /// Add a recipe under `id`. Returns `false` if the host refused it.
    fn add(&mut self, id: &RecipeKey, recipe: Recipe) -> bool;

    /// Remove the recipe registered under `id`. Returns `false` if nothing
    /// was removed.
    fn remove(&mut self, id: &RecipeKey) -> bool;
}

impl<R: RecipeRegistry + ?Sized> RecipeRegistry for &mut R {
    fn add(&mut self, id: &RecipeKey, recipe: Recipe) -> bool {
        (**self).add(id, recipe)
    }

    fn remove(&mut self, id: &RecipeKey) -> bool {
        (**self).remove(id)
    }
}

/// A plain in-memory host registry. Refuses to overwrite an existing id.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    recipes: HashMap<RecipeKey, Recipe>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &RecipeKey) -> Option<&Recipe> {
        self.recipes.get(id)
    }

    pub fn contains(&self, id: &RecipeKey) -> bool {
        self.recipes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &RecipeKey> {
        self.recipes.keys()
    }
}

impl RecipeRegistry for MemoryRegistry {
    fn add(&mut self, id: &RecipeKey, recipe: Recipe) -> bool {
        if self.recipes.contains_key(id) {
            return false;
        }
        self.recipes.insert(id.clone(), recipe);
        true
    }

    fn remove(&mut self, id: &RecipeKey) -> bool {
        self.recipes.remove(id).is_some()
    }
}
