use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Number of numbered ingredient/measure pairs in a meal record
pub const INGREDIENT_SLOTS: usize = 20;

/// A meal as returned by the filter-by-ingredient endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: String,
}

/// One numbered ingredient field pair, exactly as authored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngredientSlot {
    pub ingredient: String,
    pub measure: Option<String>,
}

/// Full meal record from the lookup endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealDetails {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub category: Option<String>,
    pub area: Option<String>,
    /// Comma-separated tag string
    pub tags: Option<String>,
    pub instructions: Option<String>,
    pub youtube: Option<String>,
    pub source: Option<String>,
    /// Slot `i` holds `strIngredient{i + 1}` / `strMeasure{i + 1}`
    pub slots: [Option<IngredientSlot>; INGREDIENT_SLOTS],
}

impl MealDetails {
    /// Individual tags, trimmed, with empty entries dropped
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}

/// Derived ingredient line; `measure` may be empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientLine {
    pub ingredient: String,
    pub measure: String,
}

/// Envelope shared by both endpoints
#[derive(Debug, Deserialize)]
pub(crate) struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

/// Wire shape of a full meal record.
///
/// The numbered `strIngredientN` / `strMeasureN` fields land in `extra` and
/// are folded into fixed slots by the `From` conversion.
#[derive(Debug, Deserialize)]
pub(crate) struct RawMeal {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strTags", default)]
    tags: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    youtube: Option<String>,
    #[serde(rename = "strSource", default)]
    source: Option<String>,
    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl RawMeal {
    fn numbered(&self, prefix: &str, index: usize) -> Option<String> {
        self.extra
            .get(&format!("{}{}", prefix, index))
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

impl From<RawMeal> for MealDetails {
    fn from(raw: RawMeal) -> Self {
        let slots = std::array::from_fn(|i| {
            raw.numbered("strIngredient", i + 1)
                .map(|ingredient| IngredientSlot {
                    ingredient,
                    measure: raw.numbered("strMeasure", i + 1),
                })
        });

        MealDetails {
            id: raw.id,
            name: raw.name,
            thumbnail: raw.thumbnail.unwrap_or_default(),
            category: non_blank(raw.category),
            area: non_blank(raw.area),
            tags: non_blank(raw.tags),
            instructions: raw.instructions,
            youtube: non_blank(raw.youtube),
            source: non_blank(raw.source),
            slots,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_meal_folds_numbered_fields_into_slots() {
        let raw: RawMeal = serde_json::from_value(serde_json::json!({
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strMealThumb": "https://example.com/thumb.jpg",
            "strCategory": "Chicken",
            "strArea": "Japanese",
            "strTags": "Meat,Casserole",
            "strInstructions": "Preheat oven.",
            "strYoutube": "",
            "strIngredient1": "soy sauce",
            "strMeasure1": "3/4 cup",
            "strIngredient2": "water",
            "strMeasure2": null,
            "strIngredient3": "",
            "strIngredient20": null
        }))
        .unwrap();

        let meal = MealDetails::from(raw);
        assert_eq!(meal.id, "52772");
        assert_eq!(meal.category.as_deref(), Some("Chicken"));
        assert_eq!(meal.youtube, None);
        assert_eq!(
            meal.slots[0],
            Some(IngredientSlot {
                ingredient: "soy sauce".to_string(),
                measure: Some("3/4 cup".to_string()),
            })
        );
        assert_eq!(meal.slots[1].as_ref().unwrap().measure, None);
        assert_eq!(meal.slots[2].as_ref().unwrap().ingredient, "");
        assert!(meal.slots[3].is_none());
        assert!(meal.slots[19].is_none());
    }

    #[test]
    fn test_tag_list_splits_and_trims() {
        let raw: RawMeal = serde_json::from_value(serde_json::json!({
            "idMeal": "1",
            "strMeal": "Stew",
            "strTags": "Comfort, Stew,,Winter "
        }))
        .unwrap();
        let meal = MealDetails::from(raw);
        assert_eq!(meal.tag_list(), vec!["Comfort", "Stew", "Winter"]);
    }

    #[test]
    fn test_envelope_with_null_meals() {
        let envelope: MealsEnvelope<MealSummary> =
            serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(envelope.meals.is_none());
    }
}
