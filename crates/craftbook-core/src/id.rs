use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies an item type in the host catalog. Cheap to copy and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemTypeId(pub u32);

/// A partition of the recipe namespace. Each category has its own config
/// document and its own identifier space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Crafting,
    Smelting,
    Blasting,
}

impl Category {
    /// All categories in load order.
    pub const ALL: [Category; 3] = [Category::Crafting, Category::Smelting, Category::Blasting];

    /// Logical name of the config document holding this category's recipes.
    pub fn document_name(self) -> &'static str {
        match self {
            Category::Crafting => "crafting",
            Category::Smelting => "smelting",
            Category::Blasting => "blasting",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Category::Crafting => 0,
            Category::Smelting => 1,
            Category::Blasting => 2,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.document_name())
    }
}

/// Separates the category tag from the key in a conversion recipe's path.
/// Config keys may not contain it.
pub const PATH_SEPARATOR: char = '/';

/// Structured identifier under which a recipe is registered with the host.
///
/// Equality covers all three parts, so the same config key used in two
/// categories never produces the same identifier. The rendered form is only
/// unique when the key passes [`RecipeKey::is_valid_key`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecipeKey {
    pub namespace: String,
    pub category: Category,
    pub key: String,
}

impl RecipeKey {
    pub fn new(namespace: &str, category: Category, key: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            category,
            key: key.to_string(),
        }
    }

    /// Whether `key` can be used as the key part. Crafting paths are the bare
    /// key, so a key holding [`PATH_SEPARATOR`] could render like a
    /// conversion path.
    pub fn is_valid_key(key: &str) -> bool {
        !key.contains(PATH_SEPARATOR)
    }

    /// The host-facing path: the bare key for crafting recipes, or
    /// `<category>/<key>` for the conversion categories.
    pub fn path(&self) -> String {
        match self.category {
            Category::Crafting => self.key.clone(),
            Category::Smelting | Category::Blasting => {
                format!("{}{PATH_SEPARATOR}{}", self.category.document_name(), self.key)
            }
        }
    }
}

impl fmt::Display for RecipeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_type_id_equality() {
        let a = ItemTypeId(0);
        let b = ItemTypeId(0);
        let c = ItemTypeId(1);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn categories_load_in_fixed_order() {
        assert_eq!(
            Category::ALL.map(Category::document_name),
            ["crafting", "smelting", "blasting"]
        );
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn crafting_key_renders_verbatim() {
        let key = RecipeKey::new("craftbook", Category::Crafting, "iron_block");
        assert_eq!(key.path(), "iron_block");
        assert_eq!(key.to_string(), "craftbook:iron_block");
    }

    #[test]
    fn conversion_keys_carry_category_tag() {
        let smelt = RecipeKey::new("craftbook", Category::Smelting, "iron");
        let blast = RecipeKey::new("craftbook", Category::Blasting, "iron");
        assert_eq!(smelt.to_string(), "craftbook:smelting/iron");
        assert_eq!(blast.to_string(), "craftbook:blasting/iron");
        assert_ne!(smelt, blast);
    }

    #[test]
    fn numeric_keys_do_not_collide_across_categories() {
        // Legacy "key + 1000" naming made "a" in smelting equal "a1000" in crafting.
        let crafting = RecipeKey::new("ns", Category::Crafting, "a1000");
        let smelting = RecipeKey::new("ns", Category::Smelting, "a");
        assert_ne!(crafting, smelting);
        assert_ne!(crafting.path(), smelting.path());
    }

    #[test]
    fn separator_in_key_is_invalid() {
        assert!(RecipeKey::is_valid_key("iron_block"));
        assert!(RecipeKey::is_valid_key(""));
        assert!(!RecipeKey::is_valid_key("smelting/iron"));

        // What the check prevents: a crafting key rendering as a smelting path.
        let crafting = RecipeKey::new("ns", Category::Crafting, "smelting/iron");
        let smelting = RecipeKey::new("ns", Category::Smelting, "iron");
        assert_eq!(crafting.to_string(), smelting.to_string());
    }

    #[test]
    fn keys_are_hashable() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(RecipeKey::new("ns", Category::Crafting, "a"));
        set.insert(RecipeKey::new("ns", Category::Crafting, "a"));
        set.insert(RecipeKey::new("ns", Category::Blasting, "a"));
        assert_eq!(set.len(), 2);
    }
}
