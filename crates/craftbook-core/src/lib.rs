//! Craftbook Core -- recipe descriptors, builders, and the registration
//! ledger for declaratively defined crafting, smelting and blasting recipes.
//!
//! # Pipeline
//!
//! 1. **Resolve** -- [`item::ItemResolver`] maps `namespace:identifier`
//!    strings to catalog item types.
//! 2. **Describe** -- a parsed config entry becomes a
//!    [`recipe::RecipeDescriptor`] (see the `craftbook-data` crate).
//! 3. **Build** -- [`builder::build`] checks structure and produces a
//!    [`recipe::Recipe`] plus its [`id::RecipeKey`].
//! 4. **Register** -- [`ledger::Ledger::register`] hands the recipe to the
//!    host [`registry::RecipeRegistry`] and tracks the key.
//! 5. **Teardown** -- [`ledger::Ledger::unregister_all`] removes every owned
//!    key of a category and empties it.
//!
//! ```rust,ignore
//! let (key, recipe) = builder::build("craftbook", descriptor, Strictness::Strict)?;
//! ledger.register(&mut host, key, recipe)?;
//! // ...
//! ledger.unregister_all(&mut host, Category::Crafting);
//! ```

pub mod builder;
pub mod id;
pub mod item;
pub mod ledger;
pub mod recipe;
pub mod registry;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
