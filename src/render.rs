//! Text and JSON rendering of search results.

use serde::Serialize;

use crate::criteria::SearchCriteria;
use crate::estimate::estimate_minutes;
use crate::ingredients::extract_ingredients;
use crate::model::{IngredientLine, MealDetails};
use crate::search::SearchState;

/// Display-ready view of one result card
#[derive(Debug, Clone, Serialize)]
pub struct MealCard {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub tags: Vec<String>,
    pub minutes: u32,
    pub ingredients: Vec<IngredientLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl From<&MealDetails> for MealCard {
    fn from(meal: &MealDetails) -> Self {
        MealCard {
            id: meal.id.clone(),
            name: meal.name.clone(),
            thumbnail: meal.thumbnail.clone(),
            category: meal.category.clone(),
            area: meal.area.clone(),
            tags: meal.tag_list().into_iter().map(str::to_string).collect(),
            minutes: estimate_minutes(meal),
            ingredients: extract_ingredients(meal),
            instructions: meal
                .instructions
                .as_deref()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(str::to_string),
            youtube: meal.youtube.clone(),
            source: meal.source.clone(),
        }
    }
}

impl MealCard {
    /// One-line heading: name, category/area and estimated time
    pub fn headline(&self) -> String {
        let origin: Vec<&str> = [self.category.as_deref(), self.area.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if origin.is_empty() {
            format!("{} (~{} min)", self.name, self.minutes)
        } else {
            format!("{} [{}] (~{} min)", self.name, origin.join(" / "), self.minutes)
        }
    }

    /// Collapsed card, or the full detail view when `expanded`
    pub fn render(&self, expanded: bool) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}  #{}\n", self.headline(), self.id));
        if !self.tags.is_empty() {
            output.push_str(&format!("  tags: {}\n", self.tags.join(", ")));
        }
        if !expanded {
            return output;
        }

        output.push_str("  ingredients:\n");
        for line in &self.ingredients {
            if line.measure.is_empty() {
                output.push_str(&format!("    - {}\n", line.ingredient));
            } else {
                output.push_str(&format!("    - {} {}\n", line.measure, line.ingredient));
            }
        }
        if let Some(instructions) = &self.instructions {
            output.push_str("  instructions:\n");
            for paragraph in instructions.lines().map(str::trim).filter(|l| !l.is_empty()) {
                output.push_str(&format!("    {}\n", paragraph));
            }
        }
        if let Some(youtube) = &self.youtube {
            output.push_str(&format!("  video: {}\n", youtube));
        }
        if let Some(source) = &self.source {
            output.push_str(&format!("  source: {}\n", source));
        }
        output
    }
}

/// Short description of the active filters, e.g. for a results header
pub fn describe_criteria(criteria: &SearchCriteria) -> String {
    let mut parts = vec![format!("with {}", criteria.ingredients.join(", "))];
    if !criteria.excludes.is_empty() {
        parts.push(format!("without {}", criteria.excludes.join(", ")));
    }
    parts.push(format!("time: {}", criteria.time));
    parts.push(format!("mood: {}", criteria.mood));
    parts.push(format!("diet: {}", criteria.diet));
    parts.join("; ")
}

/// Render a search state. `is_expanded` decides which cards show details.
pub fn render_state<F>(state: &SearchState, is_expanded: F) -> String
where
    F: Fn(&str) -> bool,
{
    match state {
        SearchState::Idle => "Enter some ingredients to start.\n".to_string(),
        SearchState::Loading => "Searching...\n".to_string(),
        SearchState::Empty => "No recipes found. Try fewer ingredients or looser filters.\n".to_string(),
        SearchState::Error(message) => format!("Error: {}\n", message),
        SearchState::Success(meals) => {
            let mut output = format!("Found {} recipe(s)\n\n", meals.len());
            for meal in meals {
                let card = MealCard::from(meal);
                output.push_str(&card.render(is_expanded(&card.id)));
                output.push('\n');
            }
            output
        }
    }
}
