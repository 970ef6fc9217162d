//! Builders that turn a descriptor into a host-ready recipe and its
//! identifier.
//!
//! Shaped, shapeless and conversion recipes are built independently. Each
//! builder checks the structural rules the host would otherwise enforce at
//! registration time, so a bad entry is skipped instead of rejected by the
//! host.

use crate::id::{Category, RecipeKey};
use crate::item::ItemStack;
use crate::recipe::{
    Conversion, CookingRecipe, Recipe, RecipeBody, RecipeChoice, RecipeDescriptor, ShapedRecipe,
    ShapelessRecipe,
};
use crate::validation::{Strictness, ValidationError};
use std::collections::BTreeMap;

/// Largest grid dimension, in rows or columns.
pub const MAX_GRID: usize = 3;

/// Most ingredients a shapeless recipe may list.
pub const MAX_SHAPELESS_INGREDIENTS: usize = 9;

/// Build the recipe object and identifier for a descriptor. Keys holding
/// the path separator are rejected so rendered identifiers stay unique.
pub fn build(
    namespace: &str,
    descriptor: RecipeDescriptor,
    strictness: Strictness,
) -> Result<(RecipeKey, Recipe), ValidationError> {
    let RecipeDescriptor { key, result, body } = descriptor;
    if !RecipeKey::is_valid_key(&key) {
        return Err(ValidationError::InvalidKey {
            key,
            detail: "'/' is reserved for category paths",
        });
    }
    match body {
        RecipeBody::Shaped { shape, ingredients } => {
            let recipe = build_shaped(result, shape, ingredients, strictness)?;
            Ok((
                RecipeKey::new(namespace, Category::Crafting, &key),
                Recipe::Shaped(recipe),
            ))
        }
        RecipeBody::Shapeless { groups } => {
            let recipe = build_shapeless(result, groups, strictness)?;
            Ok((
                RecipeKey::new(namespace, Category::Crafting, &key),
                Recipe::Shapeless(recipe),
            ))
        }
        RecipeBody::Smelt(conversion) => Ok((
            RecipeKey::new(namespace, Category::Smelting, &key),
            Recipe::Smelting(build_cooking(result, conversion)),
        )),
        RecipeBody::Blast(conversion) => Ok((
            RecipeKey::new(namespace, Category::Blasting, &key),
            Recipe::Blasting(build_cooking(result, conversion)),
        )),
    }
}

/// Build a shaped recipe, checking the grid and the symbol mapping.
pub fn build_shaped(
    result: ItemStack,
    shape: Vec<String>,
    mut ingredients: BTreeMap<char, RecipeChoice>,
    strictness: Strictness,
) -> Result<ShapedRecipe, ValidationError> {
    check_shape(&shape)?;

    if let Some(symbol) = ingredients
        .keys()
        .find(|s| !shape.iter().any(|row| row.contains(**s)))
    {
        return Err(ValidationError::UnknownSymbol { symbol: *symbol });
    }

    for symbol in shape.iter().flat_map(|row| row.chars()) {
        if symbol == ' ' || ingredients.contains_key(&symbol) {
            continue;
        }
        if strictness.is_strict() {
            return Err(ValidationError::MissingIngredient { symbol });
        }
        ingredients.insert(symbol, RecipeChoice::default());
    }

    Ok(ShapedRecipe {
        result,
        shape,
        ingredients,
    })
}

fn check_shape(shape: &[String]) -> Result<(), ValidationError> {
    if shape.is_empty() || shape.len() > MAX_GRID {
        return Err(ValidationError::MalformedShape {
            detail: format!("expected 1 to {MAX_GRID} rows, found {}", shape.len()),
        });
    }
    let width = shape[0].chars().count();
    if width == 0 || width > MAX_GRID {
        return Err(ValidationError::MalformedShape {
            detail: format!("expected 1 to {MAX_GRID} columns, found {width}"),
        });
    }
    if let Some(row) = shape.iter().find(|row| row.chars().count() != width) {
        return Err(ValidationError::MalformedShape {
            detail: format!("row '{row}' differs in length from the first row"),
        });
    }
    Ok(())
}

/// Build a shapeless recipe from its ingredient groups.
pub fn build_shapeless(
    result: ItemStack,
    groups: Vec<RecipeChoice>,
    strictness: Strictness,
) -> Result<ShapelessRecipe, ValidationError> {
    let count = groups.len();
    if count > MAX_SHAPELESS_INGREDIENTS || (count == 0 && strictness.is_strict()) {
        return Err(ValidationError::IngredientCount { count });
    }
    Ok(ShapelessRecipe {
        result,
        ingredients: groups,
    })
}

/// Build a smelting or blasting recipe. Conversions carry no structure to
/// check beyond what the parser already validated.
pub fn build_cooking(result: ItemStack, conversion: Conversion) -> CookingRecipe {
    CookingRecipe {
        input: conversion.input,
        result,
        experience: conversion.experience,
        cooking_time: conversion.cooking_time,
    }
}
