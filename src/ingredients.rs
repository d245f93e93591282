use crate::model::{IngredientLine, MealDetails};

/// Ingredient lines of a meal in authored slot order.
///
/// Slots whose ingredient is blank after trimming are skipped; a missing
/// measure becomes an empty string.
pub fn extract_ingredients(meal: &MealDetails) -> Vec<IngredientLine> {
    meal.slots
        .iter()
        .flatten()
        .filter(|slot| !slot.ingredient.trim().is_empty())
        .map(|slot| IngredientLine {
            ingredient: slot.ingredient.trim().to_string(),
            measure: slot
                .measure
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
        })
        .collect()
}

/// Lowercased ingredient names, used by the substring predicates
pub fn ingredient_names_lowercase(meal: &MealDetails) -> Vec<String> {
    extract_ingredients(meal)
        .into_iter()
        .map(|line| line.ingredient.to_lowercase())
        .collect()
}
