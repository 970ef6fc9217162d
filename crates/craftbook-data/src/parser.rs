//! Recipe definition parser: turns a category's document into resolved
//! [`RecipeDescriptor`]s.
//!
//! Failures are scoped to one entry. A bad entry is logged, reported as a
//! [`SkippedEntry`], and the rest of the document is still parsed.

use craftbook_core::id::Category;
use craftbook_core::item::{ItemCatalog, ItemResolver, ItemStack};
use craftbook_core::recipe::{
    Conversion, RecipeBody, RecipeChoice, RecipeDescriptor, RecipeKind,
};
use craftbook_core::validation::{SkippedEntry, Strictness, ValidationError};
use std::collections::BTreeMap;
use tracing::warn;

use crate::document::{Document, Section};

/// Result item used when a crafting entry omits `result`.
pub const DEFAULT_RESULT: &str = "minecraft:STONE";

/// Crafting kind used when an entry omits `type`.
pub const DEFAULT_CRAFTING_TYPE: &str = "SHAPED";

/// The only `type` value accepted in smelting and blasting documents.
pub const CONVERSION_TYPE: &str = "smelting";

/// Descriptors and skipped entries from one document.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub descriptors: Vec<RecipeDescriptor>,
    pub skipped: Vec<SkippedEntry>,
}

/// Parse every top-level entry of a category's document, in order.
pub fn parse_document<C: ItemCatalog + ?Sized>(
    category: Category,
    document: &Document,
    resolver: &ItemResolver<'_, C>,
    strictness: Strictness,
) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for entry in document.entries() {
        let key = entry.label();
        let parsed = match (entry.name(), entry.section()) {
            (Some(name), Some(section)) => {
                parse_entry(category, &name, section, resolver, strictness)
            }
            (Some(_), None) => Err(ValidationError::NotASection),
            (None, _) => Err(ValidationError::InvalidKey {
                key: key.clone(),
                detail: "entry names must be scalars",
            }),
        };
        match parsed {
            Ok(descriptor) => outcome.descriptors.push(descriptor),
            Err(reason) => {
                warn!(entry = %key, "skipping {category} recipe: {reason}");
                outcome.skipped.push(SkippedEntry::new(&key, reason));
            }
        }
    }

    outcome
}

/// Parse one entry of the given category.
pub fn parse_entry<C: ItemCatalog + ?Sized>(
    category: Category,
    key: &str,
    section: Section<'_>,
    resolver: &ItemResolver<'_, C>,
    strictness: Strictness,
) -> Result<RecipeDescriptor, ValidationError> {
    match category {
        Category::Crafting => parse_crafting(key, section, resolver, strictness),
        Category::Smelting | Category::Blasting => {
            parse_conversion(category, key, section, resolver, strictness)
        }
    }
}

// ===========================================================================
// Crafting
// ===========================================================================

fn parse_crafting<C: ItemCatalog + ?Sized>(
    key: &str,
    section: Section<'_>,
    resolver: &ItemResolver<'_, C>,
    strictness: Strictness,
) -> Result<RecipeDescriptor, ValidationError> {
    let raw_result = section
        .get_string("result")
        .unwrap_or_else(|| DEFAULT_RESULT.to_string());
    let raw_kind = section
        .get_string("type")
        .unwrap_or_else(|| DEFAULT_CRAFTING_TYPE.to_string());

    let result = resolve_stack(section, &raw_result, resolver, strictness)?;

    let body = match RecipeKind::from_crafting_type(&raw_kind) {
        Some(RecipeKind::Shaped) => parse_shaped(section, resolver, strictness)?,
        Some(RecipeKind::Shapeless) => parse_shapeless(section, resolver, strictness)?,
        _ => return Err(ValidationError::UnsupportedKind { kind: raw_kind }),
    };

    Ok(RecipeDescriptor {
        key: key.to_string(),
        result,
        body,
    })
}

fn parse_shaped<C: ItemCatalog + ?Sized>(
    section: Section<'_>,
    resolver: &ItemResolver<'_, C>,
    strictness: Strictness,
) -> Result<RecipeBody, ValidationError> {
    let shape = section.get_string_list("shape");
    let mut ingredients = BTreeMap::new();

    if let Some(nested) = section.get_section("ingredients") {
        for name in nested.keys() {
            let mut chars = name.chars();
            let symbol = match (chars.next(), chars.next()) {
                (Some(c), None) if c != ' ' => c,
                _ => return Err(ValidationError::InvalidSymbol { symbol: name }),
            };
            let choice = resolve_group(nested, &name, resolver, strictness)?;
            ingredients.insert(symbol, choice);
        }
    }

    Ok(RecipeBody::Shaped { shape, ingredients })
}

fn parse_shapeless<C: ItemCatalog + ?Sized>(
    section: Section<'_>,
    resolver: &ItemResolver<'_, C>,
    strictness: Strictness,
) -> Result<RecipeBody, ValidationError> {
    let mut groups = Vec::new();

    if let Some(nested) = section.get_section("ingredients") {
        for name in nested.keys() {
            groups.push(resolve_group(nested, &name, resolver, strictness)?);
        }
    }

    Ok(RecipeBody::Shapeless { groups })
}

fn resolve_group<C: ItemCatalog + ?Sized>(
    nested: Section<'_>,
    name: &str,
    resolver: &ItemResolver<'_, C>,
    strictness: Strictness,
) -> Result<RecipeChoice, ValidationError> {
    let choice = resolver.resolve_choice(&nested.get_string_list(name));
    if choice.is_empty() && strictness.is_strict() {
        return Err(ValidationError::EmptyChoice {
            symbol: name.to_string(),
        });
    }
    Ok(choice)
}

// ===========================================================================
// Smelting / blasting
// ===========================================================================

fn parse_conversion<C: ItemCatalog + ?Sized>(
    category: Category,
    key: &str,
    section: Section<'_>,
    resolver: &ItemResolver<'_, C>,
    strictness: Strictness,
) -> Result<RecipeDescriptor, ValidationError> {
    match section.get_string("type") {
        Some(kind) if kind.trim().eq_ignore_ascii_case(CONVERSION_TYPE) => {}
        Some(kind) => return Err(ValidationError::UnsupportedKind { kind }),
        None => {
            return Err(ValidationError::UnsupportedKind {
                kind: String::new(),
            });
        }
    }

    let raw_input = section
        .get_string("ingredient")
        .ok_or(ValidationError::MissingField {
            field: "ingredient",
        })?;
    let raw_result = section
        .get_string("result")
        .ok_or(ValidationError::MissingField { field: "result" })?;

    let input = resolver
        .resolve(&raw_input)
        .map_err(|source| ValidationError::UnresolvedItem {
            field: "ingredient",
            source,
        })?;
    let result = resolve_stack(section, &raw_result, resolver, strictness)?;

    let experience = section.get_float("experience").unwrap_or(0.0);
    if !experience.is_finite() || experience < 0.0 {
        return Err(ValidationError::InvalidExperience { value: experience });
    }

    let raw_time = section.get_int("cookingtime");
    let cooking_time = u32::try_from(raw_time)
        .ok()
        .filter(|t| *t > 0 || !strictness.is_strict())
        .ok_or(ValidationError::InvalidCookingTime { value: raw_time })?;

    let conversion = Conversion {
        input,
        experience: experience as f32,
        cooking_time,
    };
    let body = match category {
        Category::Blasting => RecipeBody::Blast(conversion),
        Category::Smelting | Category::Crafting => RecipeBody::Smelt(conversion),
    };

    Ok(RecipeDescriptor {
        key: key.to_string(),
        result,
        body,
    })
}

// ===========================================================================
// Shared fields
// ===========================================================================

/// Resolve the result item and read `amount` alongside it.
fn resolve_stack<C: ItemCatalog + ?Sized>(
    section: Section<'_>,
    raw: &str,
    resolver: &ItemResolver<'_, C>,
    strictness: Strictness,
) -> Result<ItemStack, ValidationError> {
    let item = resolver
        .resolve(raw)
        .map_err(|source| ValidationError::UnresolvedItem {
            field: "result",
            source,
        })?;

    let raw_amount = section.get_int("amount");
    let amount = u32::try_from(raw_amount)
        .map_err(|_| ValidationError::InvalidQuantity { value: raw_amount })?;
    if amount == 0 && strictness.is_strict() {
        return Err(ValidationError::ZeroQuantity);
    }

    Ok(ItemStack::new(item, amount))
}
