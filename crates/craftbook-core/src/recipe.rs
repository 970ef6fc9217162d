//! Recipe descriptors (parsed, resolved config entries) and the recipe
//! objects handed to the host registry.

use crate::id::ItemTypeId;
use crate::item::ItemStack;
use std::collections::BTreeMap;

// ===========================================================================
// Choices
// ===========================================================================

/// An ordered set of alternative item types that can fill one slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RecipeChoice {
    items: Vec<ItemTypeId>,
}

impl RecipeChoice {
    pub fn new<I: IntoIterator<Item = ItemTypeId>>(items: I) -> Self {
        let mut choice = Self::default();
        for item in items {
            choice.push(item);
        }
        choice
    }

    /// Append an alternative. Duplicates are ignored.
    pub fn push(&mut self, item: ItemTypeId) {
        if !self.items.contains(&item) {
            self.items.push(item);
        }
    }

    pub fn items(&self) -> &[ItemTypeId] {
        &self.items
    }

    pub fn contains(&self, item: ItemTypeId) -> bool {
        self.items.contains(&item)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

// ===========================================================================
// Kinds
// ===========================================================================

/// The structural kind of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeKind {
    Shaped,
    Shapeless,
    Smelt,
    Blast,
}

impl RecipeKind {
    /// Map the `type` field of a crafting entry to a kind. Matching ignores
    /// case; anything other than `SHAPED` or `SHAPELESS` is unsupported.
    pub fn from_crafting_type(value: &str) -> Option<RecipeKind> {
        const TABLE: [(&str, RecipeKind); 2] = [
            ("SHAPED", RecipeKind::Shaped),
            ("SHAPELESS", RecipeKind::Shapeless),
        ];
        TABLE
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(value.trim()))
            .map(|(_, kind)| *kind)
    }
}

// ===========================================================================
// Descriptors
// ===========================================================================

/// Input, experience and timing of a furnace-style conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub input: ItemTypeId,
    pub experience: f32,
    /// Cooking time in host ticks.
    pub cooking_time: u32,
}

/// Kind-specific payload of a descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeBody {
    Shaped {
        shape: Vec<String>,
        ingredients: BTreeMap<char, RecipeChoice>,
    },
    Shapeless {
        groups: Vec<RecipeChoice>,
    },
    Smelt(Conversion),
    Blast(Conversion),
}

/// One validated config entry with every item reference resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDescriptor {
    pub key: String,
    pub result: ItemStack,
    pub body: RecipeBody,
}

impl RecipeDescriptor {
    pub fn kind(&self) -> RecipeKind {
        match self.body {
            RecipeBody::Shaped { .. } => RecipeKind::Shaped,
            RecipeBody::Shapeless { .. } => RecipeKind::Shapeless,
            RecipeBody::Smelt(_) => RecipeKind::Smelt,
            RecipeBody::Blast(_) => RecipeKind::Blast,
        }
    }
}

// ===========================================================================
// Recipe objects
// ===========================================================================

/// A grid recipe. Every non-blank symbol in `shape` has an entry in
/// `ingredients`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapedRecipe {
    pub result: ItemStack,
    pub shape: Vec<String>,
    pub ingredients: BTreeMap<char, RecipeChoice>,
}

impl ShapedRecipe {
    pub fn ingredient(&self, symbol: char) -> Option<&RecipeChoice> {
        self.ingredients.get(&symbol)
    }

    /// The choice at a grid position, or `None` for a blank slot.
    pub fn slot(&self, row: usize, col: usize) -> Option<&RecipeChoice> {
        let symbol = self.shape.get(row)?.chars().nth(col)?;
        if symbol == ' ' {
            return None;
        }
        self.ingredients.get(&symbol)
    }

    /// All grid positions, row-major.
    pub fn slots(&self) -> Vec<Option<&RecipeChoice>> {
        let mut out = Vec::new();
        for (row, line) in self.shape.iter().enumerate() {
            for col in 0..line.chars().count() {
                out.push(self.slot(row, col));
            }
        }
        out
    }
}

/// An order-independent recipe; each choice occupies one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapelessRecipe {
    pub result: ItemStack,
    pub ingredients: Vec<RecipeChoice>,
}

/// A furnace-style conversion of one input into a result.
#[derive(Debug, Clone, PartialEq)]
pub struct CookingRecipe {
    pub input: ItemTypeId,
    pub result: ItemStack,
    pub experience: f32,
    pub cooking_time: u32,
}

/// A host-ready recipe object.
#[derive(Debug, Clone, PartialEq)]
pub enum Recipe {
    Shaped(ShapedRecipe),
    Shapeless(ShapelessRecipe),
    Smelting(CookingRecipe),
    Blasting(CookingRecipe),
}

impl Recipe {
    pub fn result(&self) -> ItemStack {
        match self {
            Recipe::Shaped(r) => r.result,
            Recipe::Shapeless(r) => r.result,
            Recipe::Smelting(r) | Recipe::Blasting(r) => r.result,
        }
    }

    pub fn kind(&self) -> RecipeKind {
        match self {
            Recipe::Shaped(_) => RecipeKind::Shaped,
            Recipe::Shapeless(_) => RecipeKind::Shapeless,
            Recipe::Smelting(_) => RecipeKind::Smelt,
            Recipe::Blasting(_) => RecipeKind::Blast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_deduplicates_in_order() {
        let c = RecipeChoice::new([ItemTypeId(3), ItemTypeId(1), ItemTypeId(3)]);
        assert_eq!(c.items(), &[ItemTypeId(3), ItemTypeId(1)]);
        assert!(c.contains(ItemTypeId(1)));
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn crafting_type_table() {
        assert_eq!(
            RecipeKind::from_crafting_type("SHAPED"),
            Some(RecipeKind::Shaped)
        );
        assert_eq!(
            RecipeKind::from_crafting_type("shapeless"),
            Some(RecipeKind::Shapeless)
        );
        assert_eq!(RecipeKind::from_crafting_type("smelting"), None);
        assert_eq!(RecipeKind::from_crafting_type(""), None);
    }

    #[test]
    fn shaped_slots_mark_blanks() {
        let mut ingredients = BTreeMap::new();
        ingredients.insert('A', RecipeChoice::new([ItemTypeId(1)]));
        let recipe = ShapedRecipe {
            result: ItemStack::new(ItemTypeId(2), 1),
            shape: vec!["AA".into(), " A".into()],
            ingredients,
        };
        let slots = recipe.slots();
        assert_eq!(slots.len(), 4);
        assert_eq!(slots.iter().filter(|s| s.is_some()).count(), 3);
        assert!(recipe.slot(1, 0).is_none());
        assert!(recipe.slot(5, 5).is_none());
    }

    #[test]
    fn recipe_reports_kind_and_result() {
        let r = Recipe::Smelting(CookingRecipe {
            input: ItemTypeId(0),
            result: ItemStack::new(ItemTypeId(1), 2),
            experience: 0.5,
            cooking_time: 200,
        });
        assert_eq!(r.kind(), RecipeKind::Smelt);
        assert_eq!(r.result().amount, 2);
    }
}
