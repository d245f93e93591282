use serde::Serialize;

use crate::filters::{Diet, Mood, TimeBucket};

/// Everything the user chose for one search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchCriteria {
    /// Lowercased, deduplicated, in the order typed
    pub ingredients: Vec<String>,
    /// Lowercased, deduplicated, in the order typed
    pub excludes: Vec<String>,
    pub time: TimeBucket,
    pub mood: Mood,
    pub diet: Diet,
}

impl SearchCriteria {
    /// Build criteria from the raw comma-separated ingredient and exclusion
    /// inputs
    pub fn parse(ingredients: &str, excludes: &str) -> Self {
        SearchCriteria {
            ingredients: parse_list(ingredients),
            excludes: parse_list(excludes),
            ..Default::default()
        }
    }

    pub fn with_time(mut self, time: TimeBucket) -> Self {
        self.time = time;
        self
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self
    }

    pub fn with_diet(mut self, diet: Diet) -> Self {
        self.diet = diet;
        self
    }
}

/// Split a comma-separated list into trimmed, lowercased, unique entries
pub fn parse_list(input: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for item in input.split(',') {
        let item = item.trim().to_lowercase();
        if !item.is_empty() && !items.contains(&item) {
            items.push(item);
        }
    }
    items
}
